//! Axum route handler for the chat API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::prompts::{GENERAL_PROMPT_TEMPLATE, WELLNESS_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;

pub const EMPTY_REPLY_FALLBACK: &str = "I'm here to help with any questions you have.";
const WELLNESS_CONTEXT: &str = "wellness";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "general".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub context: String,
}

/// Builds the prompt for `context`; anything other than "wellness" is a general question.
pub fn build_chat_prompt(message: &str, context: &str) -> String {
    let template = if context == WELLNESS_CONTEXT {
        WELLNESS_PROMPT_TEMPLATE
    } else {
        GENERAL_PROMPT_TEMPLATE
    };
    template.replace("{message}", message)
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let message = match request.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(AppError::Validation("Message is required".to_string())),
    };

    info!("Chat request: context={}, length={}", request.context, message.chars().count());

    let reply = match state
        .completer
        .complete(&build_chat_prompt(&message, &request.context))
        .await
    {
        Ok(reply) => reply,
        Err(LlmError::EmptyContent) => String::new(),
        Err(e) => return Err(AppError::Chat(e)),
    };

    let reply = reply.trim();
    Ok(Json(ChatResponse {
        message: if reply.is_empty() {
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            reply.to_string()
        },
        context: request.context,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wellness_prompt() {
        let prompt = build_chat_prompt("rough day", "wellness");
        assert!(prompt.contains("What you shared: rough day"));
        assert!(prompt.contains("under 180 words"));
    }

    #[test]
    fn test_unknown_context_is_general() {
        let prompt = build_chat_prompt("what is CBT?", "trivia");
        assert!(prompt.starts_with("You are a helpful AI assistant."));
        assert!(prompt.contains("User: what is CBT?"));
    }
}
