//! # Mock Shiny API
//!
//! Serves fixed survey, results and freelancer data so the client can be run and tested without
//! the real backend.
//!
//! ## Routes
//!
//! - `GET /survey`: six yes/no questions
//! - `GET /results?a1=true...`: one skill per question answered yes
//! - `GET /freelances`: a handful of profiles
//! - `GET /broken`: a body that is not JSON
//!
//! Every route accepts `delay_ms` to hold the response back, used to reorder completions.
use std::{collections::HashMap, io, net::SocketAddr, time::Duration};

use axum::{
    Json, Router,
    extract::Query,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
    time::sleep,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub mod config;

use config::Config;

const QUESTIONS: [(&str, &str, &str); 6] = [
    (
        "Should your application show up first in search results?",
        "seo",
        "Takes care of how well your pages rank on search engines",
    ),
    (
        "Does your application need screens your users interact with?",
        "frontend",
        "Builds the interface: interactions with the user, style, etc.",
    ),
    (
        "Does your application need to store user data?",
        "backend",
        "Builds the server side: data, accounts, business rules",
    ),
    (
        "Do you need a visual identity?",
        "designer",
        "Designs the look and feel of your brand and product",
    ),
    (
        "Should your application scale to many users?",
        "devops",
        "Deploys, monitors and scales your infrastructure",
    ),
    (
        "Must your application be installable on phones?",
        "mobile",
        "Builds native applications for iOS and Android",
    ),
];

type Params = Query<HashMap<String, String>>;

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/survey", get(survey_handler))
        .route("/results", get(results_handler))
        .route("/freelances", get(freelances_handler))
        .route("/broken", get(broken_handler))
        .layer(cors)
}

/// Binds `address` and serves the mock API on a background task.
pub async fn spawn(address: &str) -> io::Result<SocketAddr> {
    let listener = TcpListener::bind(address).await?;
    let local = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router()).await {
            warn!("Mock API stopped: {e}");
        }
    });

    info!("Mock API running on {local}");
    Ok(local)
}

pub async fn start_server() -> io::Result<()> {
    let config = Config::load();
    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Mock API running on {address}");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Mock API shutting down...");
    Ok(())
}

async fn hold(params: &HashMap<String, String>) {
    if let Some(millis) = params.get("delay_ms").and_then(|value| value.parse().ok()) {
        sleep(Duration::from_millis(millis)).await;
    }
}

pub fn survey_data() -> Value {
    let survey_data: serde_json::Map<String, Value> = QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, (question, _, _))| ((index + 1).to_string(), json!(question)))
        .collect();

    json!({ "surveyData": survey_data })
}

/// Skills for every `a<N>=true` parameter, in question order.
pub fn results_data(params: &HashMap<String, String>) -> Value {
    let results_data: Vec<Value> = QUESTIONS
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            params
                .get(&format!("a{}", index + 1))
                .is_some_and(|value| value == "true")
        })
        .map(|(_, (_, title, description))| json!({ "title": title, "description": description }))
        .collect();

    json!({ "resultsData": results_data })
}

pub fn freelancers_data() -> Value {
    json!({
        "freelancersList": [
            { "id": "1", "name": "Harry Potter", "job": "Frontend wizard", "picture": "" },
            { "id": "2", "name": "Hermione Granger", "job": "Fullstack wizard", "picture": "" },
            { "id": "3", "name": "Ron Weasley", "job": "Backend wizard", "picture": "" }
        ]
    })
}

async fn survey_handler(Query(params): Params) -> impl IntoResponse {
    hold(&params).await;
    Json(survey_data())
}

async fn results_handler(Query(params): Params) -> impl IntoResponse {
    hold(&params).await;
    Json(results_data(&params))
}

async fn freelances_handler(Query(params): Params) -> impl IntoResponse {
    hold(&params).await;
    Json(freelancers_data())
}

async fn broken_handler(Query(params): Params) -> impl IntoResponse {
    hold(&params).await;
    (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Internal error</h1>")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
