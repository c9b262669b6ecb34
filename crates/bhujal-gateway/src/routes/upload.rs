use axum::Json;
use axum::extract::{Multipart, State};
use tracing::info;

use bhujal_upstream::client::IngestResponse;

use crate::error::ApiError;
use crate::staging::StagedFile;
use crate::state::AppState;

/// Handle a document upload: stage, forward to the ingestion endpoint,
/// echo its response.
///
/// A missing `pdf` field is a 400 before any staging happens. The staged
/// copy is removed on every exit path before the outcome is reported;
/// ingestion failure is a 500.
pub async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("pdf") {
            let filename = field.file_name().unwrap_or("upload.pdf").to_string();
            let bytes = field.bytes().await?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err(ApiError::BadRequest("no file uploaded".to_string()));
    };

    let staged = StagedFile::create(&state.staging_dir, &bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to stage upload: {e}")))?;

    let outcome = state
        .upstream
        .ingest_document(staged.path(), &filename)
        .await;
    staged.remove();

    match outcome {
        Ok(response) => {
            info!(file = %filename, "document ingested");
            Ok(Json(response))
        }
        Err(err) => Err(ApiError::Internal(format!(
            "document ingestion failed: {err}"
        ))),
    }
}
