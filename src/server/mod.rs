//! HTTP upload service.
//!
//! `GET /` serves a small upload form and `POST /upload` accepts a
//! multipart `file` field containing saved feed HTML, answering with the
//! extracted posts as a CSV attachment.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::{info, warn};

use crate::csv_output::{self, CSV_CONTENT_DISPOSITION, CSV_CONTENT_TYPE};
use crate::options::Options;

pub mod config;

pub use config::{ConfigError, ServerConfig};

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

const UPLOAD_FORM_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <title>Extract feed posts</title>
  </head>
  <body>
    <h1>Upload a .txt file containing saved feed HTML</h1>
    <form action="/upload" method="post" enctype="multipart/form-data">
      <p><input type="file" name="file" accept=".txt"></p>
      <p><button type="submit">Upload &amp; Extract</button></p>
    </form>
  </body>
</html>
"#;

/// Shared, read-only handler state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub options: Options,
}

/// Errors surfaced to the uploader.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No file found in the request")]
    MissingFile,

    #[error("No selected file")]
    EmptyFilename,

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("{0}")]
    Extraction(#[from] crate::Error),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFile | ApiError::EmptyFilename => StatusCode::BAD_REQUEST,
            ApiError::Multipart(err) => err.status(),
            ApiError::Extraction(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!(error = %self, "upload failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(upload_form))
        .route("/upload", post(upload))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM_HTML)
}

async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let (filename, bytes) = read_upload(&mut multipart).await?;
    info!(%filename, size = bytes.len(), "received upload");

    let options = state.options.clone();
    let csv = tokio::task::spawn_blocking(move || render_csv(&bytes, &options)).await??;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, CSV_CONTENT_DISPOSITION),
        ],
        csv,
    )
        .into_response())
}

/// Pull the first file part named `file` out of the form.
///
/// Parts without a filename are plain form values and are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(ApiError::EmptyFilename);
        }
        let bytes = field.bytes().await?;
        return Ok((filename, bytes.to_vec()));
    }
    Err(ApiError::MissingFile)
}

/// Decode, extract and serialize one uploaded document.
fn render_csv(bytes: &[u8], options: &Options) -> crate::Result<Vec<u8>> {
    let records = crate::extract_posts_bytes_with_options(bytes, options)?;
    csv_output::to_csv_bytes(&records)
}
