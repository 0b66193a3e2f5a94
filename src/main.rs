//! Car Price Prediction Server
//!
//! Single-page form that predicts a used car's selling price from its
//! year, mileage and max power.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    CAR PRICE WEB                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────┐  ┌───────────────────┐  │
//! │  │  Form     │─▶│  Feature    │─▶│  Inference        │  │
//! │  │  (Axum)   │  │  Assembler  │  │  scale→predict→exp│  │
//! │  └───────────┘  └─────────────┘  └─────────┬─────────┘  │
//! │                                            ▼            │
//! │                                   ┌────────────────┐    │
//! │                                   │ Model artifact │    │
//! │                                   │ (loaded once)  │    │
//! │                                   └────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod inference;
mod models;
mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::AppResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    tracing::info!("Car Price Prediction server {} starting...", env!("CARGO_PKG_VERSION"));

    // The server must not start without a usable artifact
    let artifact = models::ModelArtifact::load(&config.model_path)
        .with_context(|| format!("Failed to load model bundle {}", config.model_path.display()))?;

    tracing::info!(
        fingerprint = artifact.fingerprint.as_deref().unwrap_or("-"),
        mileage_default = artifact.defaults.mileage,
        max_power_default = artifact.defaults.max_power,
        "Model bundle loaded"
    );

    // Build application state
    let state = AppState {
        artifact: Arc::new(artifact),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "car_price_web=debug,tower_http=debug".into());

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub artifact: Arc<models::ModelArtifact>,
    pub config: config::Config,
}

/// Create the router: the form page and its predict action
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::predict::show).post(handlers::predict::submit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let artifact = models::ModelArtifact::from_slice(
            include_bytes!("../model/car_selling_price.json"),
        )
        .unwrap();
        create_router(AppState {
            artifact: Arc::new(artifact),
            config: config::Config::default(),
        })
    }

    async fn post_form(body: &'static str) -> (StatusCode, String) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_form() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Car Price Prediction"));
        assert!(body.contains("Enter mileage (default: 19.4)"));
    }

    #[tokio::test]
    async fn test_post_prediction() {
        let (status, body) = post_form("year=2015&mileage=&max_power=&n_clicks=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("The predicted selling price of the car is: "));
        assert!(body.contains(" Baht</div>"));
    }

    #[tokio::test]
    async fn test_post_without_year() {
        let (status, body) = post_form("year=&mileage=20&max_power=90&n_clicks=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please provide the year of manufacture to calculate the price."));
        assert!(!body.contains("Baht</div>"));
    }

    #[tokio::test]
    async fn test_post_without_click_is_idle() {
        let (status, body) = post_form("year=2015&n_clicks=0").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<div id="output-prediction"></div>"#));
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
