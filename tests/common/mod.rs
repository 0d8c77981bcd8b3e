#![allow(dead_code)]

use shiny::{config::Config, context::Context, theme::Theme};

/// Starts a mock API on an ephemeral port and returns its base URL.
pub async fn mock_api() -> String {
    let address = shiny_tester::spawn("127.0.0.1:0")
        .await
        .expect("bind mock API");

    format!("http://{address}")
}

pub async fn context(theme: Theme) -> Context {
    Context::with_config(Config::new(mock_api().await, theme))
}

/// A base URL nothing is listening on.
pub async fn closed_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let address = listener.local_addr().expect("probe address");
    drop(listener);

    format!("http://{address}")
}
