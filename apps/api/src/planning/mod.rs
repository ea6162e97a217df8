// Learning-track planning: prompt building, the two model stages and the
// orchestrator that feeds their output through the diagram module.
// All model calls go through llm_client::CompletionModel.

pub mod handlers;
pub mod input;
pub mod pipeline;
pub mod plan;
pub mod prompts;
pub mod tracks;
