//! Plan Generator: résumé + job description → free-text development plan.

use tracing::warn;

use crate::llm_client::prompts::{FAILURE_MARKER, MENTOR_SYSTEM, MENTOR_TEMPERATURE};
use crate::llm_client::CompletionModel;
use crate::models::track::StepCount;
use crate::planning::prompts::{fill_template, PLAN_PROMPT_TEMPLATE};

pub fn build_plan_prompt(resume_text: &str, job_text: &str, steps: StepCount) -> String {
    let steps = steps.to_string();
    fill_template(
        PLAN_PROMPT_TEMPLATE,
        &[
            ("steps", steps.as_str()),
            ("resume_text", resume_text),
            ("job_text", job_text),
        ],
    )
}

/// Asks the model for a development plan and returns its text unmodified.
///
/// Never fails: a model error comes back as a message starting with
/// `FAILURE_MARKER` so the caller can show it in place of the plan.
pub async fn generate_plan(
    model: &dyn CompletionModel,
    resume_text: &str,
    job_text: &str,
    steps: StepCount,
) -> String {
    let prompt = build_plan_prompt(resume_text, job_text, steps);
    match model
        .complete(MENTOR_SYSTEM, &prompt, MENTOR_TEMPERATURE)
        .await
    {
        Ok(plan) => plan,
        Err(e) => {
            warn!("Plan generation failed: {e}");
            format!("{FAILURE_MARKER} Failed to generate the development plan: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::{Reply, ScriptedModel};

    const RESUME: &str = "Backend developer, 3 years of Python and PostgreSQL.";
    const JOB: &str = "Cloud engineer: AWS, Terraform, Kubernetes required.";

    #[test]
    fn test_plan_prompt_embeds_inputs_and_bounds() {
        let steps = StepCount::try_from(7u32).unwrap();
        let prompt = build_plan_prompt(RESUME, JOB, steps);
        assert!(prompt.contains("at most 7 steps"));
        assert!(prompt.contains("at most 5 main competency categories"));
        assert!(prompt.contains(RESUME));
        assert!(prompt.contains(JOB));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_text}"));
    }

    #[test]
    fn test_plan_prompt_keeps_placeholder_text_inside_resume() {
        let prompt = build_plan_prompt("I wrote {job_text} templates", JOB, StepCount::default());
        assert!(prompt.contains("I wrote {job_text} templates"));
    }

    #[test]
    fn test_plan_prompt_keeps_placeholder_text_inside_job() {
        let prompt = build_plan_prompt("RESUME-BODY", "Use {resume_text} templating", StepCount::default());
        assert!(prompt.contains("JOB DESCRIPTION:\nUse {resume_text} templating"));
        assert_eq!(prompt.matches("RESUME-BODY").count(), 1);
    }

    #[tokio::test]
    async fn test_generate_plan_returns_model_text_verbatim() {
        let model = ScriptedModel::texts(&["  Cloud:\n  1. AWS Practitioner\n"]);
        let plan = generate_plan(&model, RESUME, JOB, StepCount::default()).await;
        assert_eq!(plan, "  Cloud:\n  1. AWS Practitioner\n");

        let calls = model.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].role, MENTOR_SYSTEM);
        assert!((calls[0].temperature - 0.7).abs() < f32::EPSILON);
        assert!(calls[0].prompt.contains("at most 10 steps"));
    }

    #[tokio::test]
    async fn test_generate_plan_converts_failure_to_message() {
        let model = ScriptedModel::new(vec![Reply::Fail(401, "Incorrect API key".to_string())]);
        let plan = generate_plan(&model, RESUME, JOB, StepCount::default()).await;
        assert!(plan.starts_with(FAILURE_MARKER));
        assert!(plan.contains("Incorrect API key"));
    }
}
