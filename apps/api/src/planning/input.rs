//! Where a résumé or job description came from, resolved to plain text before
//! the pipeline sees it.

use anyhow::anyhow;
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub enum InputSource {
    /// Raw PDF bytes from a file upload.
    Upload(Bytes),
    /// Text pasted by the user.
    Pasted(String),
}

impl InputSource {
    /// Resolves the source to text. PDF extraction runs on the blocking pool;
    /// an unreadable document is logged and produces an empty string, which the
    /// pipeline then reports as missing input.
    pub async fn resolve(self, field: &'static str) -> Result<String, AppError> {
        match self {
            InputSource::Pasted(text) => Ok(text),
            InputSource::Upload(bytes) => {
                match tokio::task::spawn_blocking(move || extract_pdf_text(&bytes, field)).await {
                    Ok(text) => Ok(text),
                    // pdf-extract panics on some malformed documents
                    Err(e) if e.is_panic() => {
                        warn!("PDF extraction panicked for uploaded {field}");
                        Ok(String::new())
                    }
                    Err(e) => Err(AppError::Internal(anyhow!(
                        "PDF extraction task failed: {e}"
                    ))),
                }
            }
        }
    }
}

fn extract_pdf_text(bytes: &[u8], field: &str) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            info!(
                "Extracted {} chars from uploaded {field} ({} bytes)",
                text.chars().count(),
                bytes.len()
            );
            text
        }
        Err(e) => {
            warn!("Could not extract text from uploaded {field}: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pasted_text_is_returned_unchanged() {
        let source = InputSource::Pasted("  Rust developer\n".to_string());
        assert_eq!(source.resolve("resume").await.unwrap(), "  Rust developer\n");
    }

    #[tokio::test]
    async fn test_unreadable_upload_resolves_to_empty_text() {
        let source = InputSource::Upload(Bytes::from_static(b"definitely not a pdf"));
        assert_eq!(source.resolve("resume").await.unwrap(), "");
    }
}
