use anyhow::anyhow;
use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::pdf::extract::extract_markdown;

#[derive(Debug, Serialize)]
pub struct PdfExtractResponse {
    pub pages: usize,
    pub markdown: String,
}

/// POST /api/v1/pdf/extract
/// Multipart upload with a `file` field containing the PDF.
pub async fn handle_pdf_extract(
    mut multipart: Multipart,
) -> Result<Json<PdfExtractResponse>, AppError> {
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some(data);
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    if file.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    // Parsing is CPU-bound; keep it off the async workers.
    let extracted = tokio::task::spawn_blocking(move || extract_markdown(&file))
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;

    Ok(Json(PdfExtractResponse {
        pages: extracted.pages,
        markdown: extracted.markdown,
    }))
}
