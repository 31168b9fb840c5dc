//! sitelog-server: HTTP upload endpoint for sitelog.
//!
//! | Route          | Behaviour                                                    |
//! |----------------|--------------------------------------------------------------|
//! | `POST /upload` | multipart file in the configured field → JSON record array   |
//! | `GET /health`  | `200 ok`                                                     |
//!
//! A request without the file part gets `400 {"error":"No file uploaded."}`.
//! Extraction runs on the blocking pool behind a [`WithFallback`] boundary,
//! so a failing alternate extractor still answers with one sentinel record.

pub mod error;

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use sitelog_core::config::ServerConfig;
use sitelog_core::{Extractor, Record, WithFallback};
use tokio::net::TcpListener;

pub use error::{ServerError, UploadError};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    extractor: Arc<WithFallback<Box<dyn Extractor>>>,
    upload_field: Arc<str>,
}

impl AppState {
    pub fn new(extractor: Box<dyn Extractor>, config: &ServerConfig) -> Self {
        Self {
            extractor: Arc::new(WithFallback::new(extractor)),
            upload_field: Arc::from(config.upload_field.as_str()),
        }
    }
}

/// Build the application router.
pub fn router(extractor: Box<dyn Extractor>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/upload", post(upload))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(AppState::new(extractor, config))
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, extractor: Box<dyn Extractor>) -> Result<(), ServerError> {
    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind.clone(), source })?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, backend = extractor.name(), "upload server listening");

    axum::serve(listener, router(extractor, config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("upload server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn health() -> &'static str {
    "ok"
}

async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<Record>>, UploadError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "upload without a multipart body");
        UploadError::MissingFile
    })?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(&*state.upload_field) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
        let bytes = field.bytes().await?;
        let size = bytes.len();
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let extractor = Arc::clone(&state.extractor);
        let records = tokio::task::spawn_blocking(move || extractor.records(&text))
            .await
            .map_err(|err| UploadError::Internal(err.to_string()))?;

        tracing::info!(file = %file_name, bytes = size, records = records.len(), "upload parsed");
        return Ok(Json(records));
    }

    Err(UploadError::MissingFile)
}
