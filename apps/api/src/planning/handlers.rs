//! Axum route handlers for the Tracks API.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::diagram::page::render_page;
use crate::errors::AppError;
use crate::models::track::{StepCount, TrackReport};
use crate::planning::input::InputSource;
use crate::planning::pipeline::run_pipeline;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_text: String,
    /// Defaults to 10 when omitted.
    pub steps: Option<u32>,
}

fn step_count(steps: Option<u32>) -> Result<StepCount, AppError> {
    steps
        .map(StepCount::try_from)
        .transpose()
        .map_err(|e| AppError::Validation(e.to_string()))
        .map(Option::unwrap_or_default)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/tracks
///
/// Pasted résumé and job text in, full run report out.
pub async fn handle_generate_tracks(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<TrackReport>, AppError> {
    let steps = step_count(request.steps)?;
    let report = run_pipeline(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_text,
        steps,
    )
    .await?;
    Ok(Json(report))
}

/// POST /api/v1/tracks/upload
///
/// Multipart form. Each input is either a PDF (`resume_pdf`, `job_pdf`) or
/// pasted text (`resume_text`, `job_text`); an upload wins over text for the
/// same input. Optional `steps` field.
pub async fn handle_upload_tracks(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TrackReport>, AppError> {
    let mut resume: Option<InputSource> = None;
    let mut job: Option<InputSource> = None;
    let mut steps: Option<u32> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume_pdf" | "job_pdf" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))?;
                // Browsers send an empty part when no file was chosen
                if bytes.is_empty() {
                    continue;
                }
                let source = Some(InputSource::Upload(bytes));
                if name == "resume_pdf" {
                    resume = source;
                } else {
                    job = source;
                }
            }
            "resume_text" | "job_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))?;
                let slot = if name == "resume_text" {
                    &mut resume
                } else {
                    &mut job
                };
                if !matches!(slot, Some(InputSource::Upload(_))) {
                    *slot = Some(InputSource::Pasted(text));
                }
            }
            "steps" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read steps: {e}")))?;
                let parsed = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| AppError::Validation(format!("steps must be a number, got '{raw}'")))?;
                steps = Some(parsed);
            }
            _ => {}
        }
    }

    let steps = step_count(steps)?;
    let resume_text = match resume {
        Some(source) => source.resolve("resume").await?,
        None => String::new(),
    };
    let job_text = match job {
        Some(source) => source.resolve("job description").await?,
        None => String::new(),
    };

    let report = run_pipeline(state.llm.as_ref(), &resume_text, &job_text, steps).await?;
    Ok(Json(report))
}

/// POST /api/v1/tracks/page
///
/// Same input as `/api/v1/tracks`; responds with the HTML page that draws the
/// diagram.
pub async fn handle_tracks_page(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Html<String>, AppError> {
    let steps = step_count(request.steps)?;
    let report = run_pipeline(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_text,
        steps,
    )
    .await?;
    Ok(Html(render_page(&report)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_defaults_when_absent() {
        assert_eq!(step_count(None).unwrap(), StepCount::default());
    }

    #[test]
    fn test_step_count_out_of_range_is_validation_error() {
        assert!(matches!(step_count(Some(0)), Err(AppError::Validation(_))));
        assert!(matches!(step_count(Some(21)), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_track_request_fields_default_to_empty() {
        let request: TrackRequest = serde_json::from_str(r#"{"steps": 3}"#).unwrap();
        assert!(request.resume_text.is_empty());
        assert!(request.job_text.is_empty());
        assert_eq!(request.steps, Some(3));
    }
}
