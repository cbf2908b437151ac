use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::llm::ChatBackend;
use crate::config::AnthropicConfig;
use crate::error::ProviderError;

const API_VERSION: &str = "2023-06-01";

/// Messages-API backend (`POST {endpoint}`).
pub struct AnthropicBackend {
    client: Client,
    config: AnthropicConfig,
    api_key: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicBackend {
    pub fn new(config: AnthropicConfig, api_key: String) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(AnthropicBackend {
            client,
            config,
            api_key,
        })
    }

    fn request_body<'a>(&'a self, system: &'a str, user: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system,
            messages: [UserMessage {
                role: "user",
                content: user,
            }],
        }
    }
}

impl ChatBackend for AnthropicBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let response: MessagesResponse = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request_body(system, user))
            .send()?
            .error_for_status()?
            .json()?;

        extract_text(response)
    }
}

fn extract_text(response: MessagesResponse) -> Result<String, ProviderError> {
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| ProviderError::Malformed("response has no text block".into()))
}
