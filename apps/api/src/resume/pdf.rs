use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Accepts either a declared `application/pdf` upload or bytes carrying the PDF header.
pub fn looks_like_pdf(content_type: Option<&str>, data: &[u8]) -> bool {
    let declared = content_type
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim())
        .is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"));
    declared || data.starts_with(PDF_MAGIC)
}

/// Extracts plain text from an in-memory PDF on the blocking pool.
/// Parser errors and parser panics on malformed input both surface as 422.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let outcome = tokio::task::spawn_blocking(move || {
        panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&data)))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?;

    let text = match outcome {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF text extraction failed ({size} bytes): {e}");
            return Err(unreadable_pdf());
        }
        Err(_) => {
            warn!("PDF parser panicked on a {size}-byte upload");
            return Err(unreadable_pdf());
        }
    };

    debug!("Extracted {} characters from {size}-byte PDF", text.len());
    Ok(text)
}

fn unreadable_pdf() -> AppError {
    AppError::UnprocessableEntity("Could not read text from the uploaded PDF".to_string())
}
