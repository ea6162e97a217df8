//! Pipeline Orchestrator: runs one learning-track generation end to end.
//!
//! Flow: input check → generate_plan → extract_tracks → filter_valid_lines →
//!       sanitize_lines → assemble_diagram → TrackReport.
//!
//! Model failures never abort a run: each stage substitutes a failure message
//! for its output and the next stage consumes it as ordinary text. A failed
//! track stage therefore ends in a header-only diagram.

use tracing::{info, warn};
use uuid::Uuid;

use crate::diagram::assemble::assemble_diagram;
use crate::diagram::grammar::filter_valid_lines;
use crate::diagram::sanitize::sanitize_lines;
use crate::errors::AppError;
use crate::llm_client::CompletionModel;
use crate::models::track::{StepCount, TrackReport};
use crate::planning::plan::generate_plan;
use crate::planning::tracks::extract_tracks;

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both the resume and the job description.";

pub const NO_TRACKS_WARNING: &str =
    "The model output contained no valid track lines; the diagram is empty.";

/// Runs the full pipeline. Returns `AppError::Validation` without calling the
/// model when either input is blank.
pub async fn run_pipeline(
    model: &dyn CompletionModel,
    resume_text: &str,
    job_text: &str,
    steps: StepCount,
) -> Result<TrackReport, AppError> {
    if resume_text.trim().is_empty() || job_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
    }

    let run_id = Uuid::new_v4();

    // Step 1: development plan
    info!("Run {run_id}: generating development plan ({steps} steps)");
    let plan = generate_plan(model, resume_text, job_text, steps).await;

    // Step 2: raw learning tracks
    info!("Run {run_id}: generating learning tracks");
    let raw_tracks = extract_tracks(model, &plan, steps).await;

    // Steps 3-5: filter, sanitize, assemble
    let valid = filter_valid_lines(&raw_tracks);
    let tracks = sanitize_lines(&valid);
    let diagram = assemble_diagram(&tracks);

    let warning = if tracks.is_empty() {
        warn!("Run {run_id}: no valid track lines in model output");
        Some(NO_TRACKS_WARNING.to_string())
    } else {
        None
    };

    info!(
        "Run {run_id}: kept {} of {} track lines",
        tracks.len(),
        raw_tracks.lines().count()
    );

    Ok(TrackReport {
        run_id,
        steps,
        plan,
        raw_tracks,
        tracks,
        diagram,
        warning,
    })
}
