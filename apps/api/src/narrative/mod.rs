// Narrative Response Generator: persona prompts, opening lines, completion cleanup
// and the deterministic fallback copy used whenever the completion service fails.
// All completion calls go through llm_client.

pub mod cleanup;
pub mod defaults;
pub mod generator;
pub mod guidance;
pub mod openings;
pub mod templates;
