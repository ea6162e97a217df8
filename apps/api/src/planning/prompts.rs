// LLM prompt templates for the planning module.
// Placeholders are filled by `fill_template` in a single pass; see plan.rs and tracks.rs.

/// Development plan prompt. Placeholders: {steps}, {job_text}, {resume_text}
pub const PLAN_PROMPT_TEMPLATE: &str = r#"Create a development plan with at most {steps} steps that closes the candidate's competency gaps for the role below.
Group the steps into at most 5 main competency categories.
Answer as a list of categories, and under each category list the steps required, in order.
Base the plan on the following information:

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_text}"#;

/// Learning-track prompt. Placeholders: {steps}, {plan_text}
pub const TRACK_PROMPT_TEMPLATE: &str = r#"Based on the development plan below, produce learning tracks with at most {steps} entries.
Write every entry as a Mermaid.js flowchart edge in this format:
Category --> CourseOrCertification[Name of the course or certification]

An edge may carry a label between pipes:
Category[Category name] --> |Step label| Course[Name of the course or certification]

Node ids use ASCII letters only: no digits, spaces, underscores or hyphens.
Do NOT include explanations, comments, headings or code fences. Output only the edge lines, one per line.

DEVELOPMENT PLAN:
{plan_text}"#;

/// Fills `{name}` placeholders in one left-to-right pass. Inserted values are
/// never rescanned, so user text containing `{resume_text}` and similar stays
/// literal. Unknown braces are copied through.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = values.iter().find_map(|(name, value)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(*name))
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
