//! # Remote Resource
//!
//! Fetch-and-track primitive behind every page that talks to the API.
//!
//! ## States
//!
//! - **Pending**: initial state, and again whenever a new locator is being fetched
//! - **Ready**: the latest locator answered with a body that decoded into `T`
//! - **Failed**: the latest locator could not be read, or its body did not decode
//!
//! The payload of a previous success is kept while a new fetch is pending and after a failure.
//!
//! ## Ordering
//!
//! Every fetch is tagged with a generation number. A completion is only written back if its
//! generation is still the newest one, checked under the store lock, so a slow response for an
//! old locator can never overwrite the result of a newer one. Superseded reads are left to finish
//! on their own and their results are dropped.
//!
//! An empty locator issues nothing. If nothing was ever fetched, the resource stays Pending.
use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use serde::de::DeserializeOwned;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{error::FetchError, store::Store};

/// Performs one read against a locator and hands back the raw body.
pub trait Fetcher: Clone + Send + Sync + 'static {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Pending,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T> {
    pub status: Status,
    pub payload: Option<T>,
    /// Locator of the current or in-flight fetch.
    pub locator: Option<String>,
}

impl<T> Snapshot<T> {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Pending
    }

    pub fn has_error(&self) -> bool {
        self.status == Status::Failed
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            status: Status::Pending,
            payload: None,
            locator: None,
        }
    }
}

pub struct RemoteResource<T, F> {
    fetcher: F,
    store: Arc<Store<Snapshot<T>>>,
    latest: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl<T, F> RemoteResource<T, F>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fetcher,
{
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            store: Arc::new(Store::new(Snapshot::default())),
            latest: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    pub fn with_locator(fetcher: F, locator: impl Into<String>) -> Self {
        let mut resource = Self::new(fetcher);
        resource.set_locator(Some(locator.into()));
        resource
    }

    /// Points the resource at `locator`, restarting the fetch if it changed.
    ///
    /// Must be called from within a tokio runtime whenever a fetch is issued.
    pub fn set_locator(&mut self, locator: Option<String>) {
        let locator = locator.filter(|locator| !locator.trim().is_empty());

        if locator == self.store.get().locator {
            return;
        }

        self.start(locator);
    }

    /// Fetches the current locator again. Does nothing without one, or while it is still in flight.
    pub fn refresh(&mut self) {
        let snapshot = self.store.get();
        if snapshot.is_loading() {
            return;
        }

        if let Some(locator) = snapshot.locator {
            self.start(Some(locator));
        }
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.store.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.store.subscribe()
    }

    /// Waits until the resource leaves Pending and returns that state.
    ///
    /// Never resolves while there is no locator or the read never completes.
    pub async fn settled(&self) -> Snapshot<T> {
        let mut receiver = self.store.subscribe();

        match receiver.wait_for(|snapshot| !snapshot.is_loading()).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.store.get(),
        }
    }

    fn start(&mut self, locator: Option<String>) {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(locator) = locator else {
            debug!("No locator, nothing to fetch");
            self.store.update(|snapshot| snapshot.locator = None);
            return;
        };

        info!("Fetching {locator}");
        self.store.update(|snapshot| {
            snapshot.status = Status::Pending;
            snapshot.locator = Some(locator.clone());
        });

        let fetcher = self.fetcher.clone();
        let store = self.store.clone();
        let latest = self.latest.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = match fetcher.fetch(&locator).await {
                Ok(body) => serde_json::from_slice::<T>(&body).map_err(FetchError::from),
                Err(error) => Err(error),
            };

            settle(&store, &latest, generation, &locator, outcome);
        }));
    }
}

impl<T, F> Drop for RemoteResource<T, F> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

/// Writes a completed fetch back, unless a newer fetch has been started since.
fn settle<T: Clone>(
    store: &Store<Snapshot<T>>,
    latest: &AtomicU64,
    generation: u64,
    locator: &str,
    outcome: Result<T, FetchError>,
) -> bool {
    let applied = store.update_if(|snapshot| {
        if latest.load(Ordering::SeqCst) != generation {
            return false;
        }

        match outcome {
            Ok(payload) => {
                snapshot.status = Status::Ready;
                snapshot.payload = Some(payload);
            }
            Err(error) => {
                warn!("Failed to fetch {locator}: {error}");
                snapshot.status = Status::Failed;
            }
        }

        true
    });

    if !applied {
        debug!("Discarded stale response for {locator}");
    }

    applied
}
