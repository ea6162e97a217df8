use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How many plan/track entries to ask the model for. A hint, never enforced on
/// the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StepCount(u8);

#[derive(Debug, Error, PartialEq)]
#[error("steps must be between 1 and 20, got {0}")]
pub struct StepCountError(pub u32);

impl StepCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for StepCount {
    fn default() -> Self {
        StepCount(10)
    }
}

impl TryFrom<u32> for StepCount {
    type Error = StepCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&value) {
            Ok(StepCount(value as u8))
        } else {
            Err(StepCountError(value))
        }
    }
}

impl From<StepCount> for u32 {
    fn from(steps: StepCount) -> Self {
        u32::from(steps.get())
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything one pipeline run produced, stage by stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackReport {
    pub run_id: Uuid,
    pub steps: StepCount,
    /// Development plan text, or a failure message standing in for it.
    pub plan: String,
    /// Raw model output for the track stage, before filtering.
    pub raw_tracks: String,
    /// Validated and sanitized edge lines, in model order.
    pub tracks: Vec<String>,
    /// Mermaid document built from `tracks`.
    pub diagram: String,
    /// Set when no line of the track output was usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
