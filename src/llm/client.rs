//! Chat completions client
//!
//! One blocking POST per call. There is no retry and no timeout: a server
//! that never answers blocks the caller.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;

use super::types::ChatRequest;
use crate::config::ApiConfig;
use crate::error::Result;

/// Blocking client for an OpenAI-compatible chat completions endpoint
pub struct ChatClient {
    client: Client,
    config: ApiConfig,
}

impl ChatClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a system/user prompt pair and return the parsed JSON reply.
    ///
    /// `model` falls back to the configured default. A 4xx/5xx status is
    /// returned as [`crate::Error::Http`].
    pub fn complete(
        &self,
        api_key: &str,
        system_prompt: &str,
        user_prompt: &str,
        model: Option<&str>,
    ) -> Result<Value> {
        let model = model.unwrap_or(&self.config.model);
        let request = ChatRequest::new(system_prompt, user_prompt, model);

        tracing::info!("POST {} (model {})", self.config.endpoint, model);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Chat completion failed with status {}", status);
        }

        let body: Value = response.error_for_status()?.json()?;
        Ok(body)
    }
}

/// Call the default endpoint once with the given prompts.
///
/// `model` defaults to [`crate::config::DEFAULT_MODEL`].
pub fn call_chat_completion(
    api_key: &str,
    system_prompt: &str,
    user_prompt: &str,
    model: Option<&str>,
) -> Result<Value> {
    ChatClient::new(ApiConfig::default())?.complete(api_key, system_prompt, user_prompt, model)
}

/// Text of the first choice's message, if the reply has one
pub fn first_message_content(response: &Value) -> Option<&str> {
    response.pointer("/choices/0/message/content")?.as_str()
}
