use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::llm::ChatBackend;
use crate::config::OpenAiConfig;
use crate::error::ProviderError;

/// Chat-completions backend (`POST {endpoint}`), JSON response format.
pub struct OpenAiBackend {
    client: Client,
    config: OpenAiConfig,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl OpenAiBackend {
    pub fn new(config: OpenAiConfig, api_key: String) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(OpenAiBackend {
            client,
            config,
            api_key,
        })
    }

    fn request_body<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: self.config.temperature,
        }
    }
}

impl ChatBackend for OpenAiBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let response: ChatResponse = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system, user))
            .send()?
            .error_for_status()?
            .json()?;

        extract_content(response)
    }
}

fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::Malformed("response has no message content".into()))
}
