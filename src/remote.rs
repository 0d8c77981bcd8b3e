use std::future::Future;

use reqwest::Client;
#[cfg(feature = "verbose")]
use tracing::debug;

use crate::{error::FetchError, resource::Fetcher};

/// Reads locators over HTTP with a shared [`Client`].
///
/// The status code is not checked: whatever body comes back is handed on and either decodes or
/// fails as a malformed body.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        let request = self.client.get(locator);

        async move {
            let response = request.send().await?;

            #[cfg(feature = "verbose")]
            debug!("Status: {}", response.status());

            let bytes = response.bytes().await?;

            Ok(bytes.to_vec())
        }
    }
}
