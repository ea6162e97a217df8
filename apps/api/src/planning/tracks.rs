//! Track Extractor: development plan → Mermaid-style edge lines (unfiltered).

use tracing::warn;

use crate::llm_client::prompts::{FAILURE_MARKER, MENTOR_SYSTEM, MENTOR_TEMPERATURE};
use crate::llm_client::CompletionModel;
use crate::models::track::StepCount;
use crate::planning::prompts::{fill_template, TRACK_PROMPT_TEMPLATE};

pub fn build_track_prompt(plan_text: &str, steps: StepCount) -> String {
    let steps = steps.to_string();
    fill_template(
        TRACK_PROMPT_TEMPLATE,
        &[("steps", steps.as_str()), ("plan_text", plan_text)],
    )
}

/// Asks the model to restate the plan as graph edges. Same failure policy as
/// `generate_plan`: errors come back as a `FAILURE_MARKER` message.
pub async fn extract_tracks(
    model: &dyn CompletionModel,
    plan_text: &str,
    steps: StepCount,
) -> String {
    let prompt = build_track_prompt(plan_text, steps);
    match model
        .complete(MENTOR_SYSTEM, &prompt, MENTOR_TEMPERATURE)
        .await
    {
        Ok(tracks) => tracks,
        Err(e) => {
            warn!("Track extraction failed: {e}");
            format!("{FAILURE_MARKER} Failed to generate learning tracks: {e}")
        }
    }
}
