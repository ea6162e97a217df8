// Shared prompt constants used by every model call.
// Stage-specific templates live alongside their stage (see planning::prompts).

/// Role framing sent as the system message on every call.
pub const MENTOR_SYSTEM: &str = "You are a career-development mentor specialised in \
    technology and professional growth.";

/// Sampling temperature for plan and track generation.
pub const MENTOR_TEMPERATURE: f32 = 0.7;

/// Prefix placed on every stage output that stands in for a failed model call.
pub const FAILURE_MARKER: &str = "[generation failed]";
