//! Chat completion API access

pub mod client;
pub mod types;

pub use client::{call_chat_completion, first_message_content, ChatClient};
pub use types::{ChatMessage, ChatRequest};
