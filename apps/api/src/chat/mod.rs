// Free-form chat endpoint sharing the journal's completion client.

pub mod handlers;
pub mod prompts;
