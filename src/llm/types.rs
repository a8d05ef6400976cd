//! Request types for the chat completions API

use serde::{Deserialize, Serialize};

/// Chat completion request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    /// Always `false`: the reply is read as a single JSON body
    pub stream: bool,
    /// Always `0` for deterministic sampling
    pub temperature: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatRequest {
    /// System message first, then the user message
    pub fn new(system_prompt: &str, user_prompt: &str, model: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage::new("system", system_prompt),
                ChatMessage::new("user", user_prompt),
            ],
            model: model.to_string(),
            stream: false,
            temperature: 0,
        }
    }
}

impl ChatMessage {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}
