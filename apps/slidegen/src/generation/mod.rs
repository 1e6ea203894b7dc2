// Presentation content generation.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod pipeline;
pub mod prompts;
pub mod topic;
