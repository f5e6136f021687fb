//! Async client for OpenAI-compatible chat completion APIs
//!
//! Only flavor text goes through here: identities and reflections. The
//! simulation never depends on what the model says.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RogueError};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub struct LlmClient {
    client: Client,
    api_key: String,
    organization: Option<String>,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            organization: None,
            api_url,
            model,
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Create a client from environment variables
    ///
    /// Required: OPENAI_API_KEY
    /// Optional: OPENAI_ORG, LLM_API_URL, LLM_MODEL
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| RogueError::TextGeneration("OPENAI_API_KEY not set".into()))?;
        let api_url = std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let client = Self::new(api_key, api_url, model);
        Ok(match std::env::var("OPENAI_ORG") {
            Ok(org) if !org.is_empty() => client.with_organization(org),
            _ => client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system + user exchange and return the reply text
    pub async fn complete(&self, system: Option<&str>, user: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(Message {
                role: "system".into(),
                content: system.into(),
            });
        }
        messages.push(Message {
            role: "user".into(),
            content: user.into(),
        });

        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: 512,
            messages,
        };

        tracing::debug!(model = %self.model, prompt_len = user.len(), "chat completion");

        let mut builder = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json");
        if let Some(org) = &self.organization {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| RogueError::TextGeneration(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RogueError::TextGeneration(format!("API error {status}: {error_text}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| RogueError::TextGeneration(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| RogueError::TextGeneration("Empty response".into()))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
