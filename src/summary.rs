//! Optional prose summary of a contribution list.
//!
//! The summary is produced by an external language-model service. It only
//! ever borrows the items and can never fail the lookup: any problem is
//! logged and replaced by [`SUMMARY_FALLBACK`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;
use crate::types::ContributionItem;

/// Returned whenever a summary cannot be generated.
pub const SUMMARY_FALLBACK: &str = "Summary unavailable.";

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model name.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Produces free-text prose about a contribution list.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `items` for `display_name`. Never fails; returns
    /// [`SUMMARY_FALLBACK`] instead.
    async fn summarize(&self, items: &[ContributionItem], display_name: &str) -> String;
}

/// Build the user prompt sent to the model.
#[must_use]
pub fn build_prompt(items: &[ContributionItem], display_name: &str) -> String {
    let mut prompt = format!(
        "Write a short, factual paragraph summarizing the open-source contributions of {display_name}. \
         Mention the kinds of work done and notable themes. Do not invent details.\n\nContributions:\n"
    );
    for item in items {
        prompt.push_str(&format!(
            "- [{}] {} {}\n",
            item.kind,
            item.date.format("%Y-%m-%d"),
            item.headline()
        ));
    }
    prompt
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: Role,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// [`Summarizer`] backed by an OpenAI-compatible chat completions API.
///
/// The API key is passed in explicitly; nothing is read from the
/// environment.
pub struct ChatSummarizer {
    client: Client,
    url: String,
    model: String,
    api_key: String,
}

impl ChatSummarizer {
    /// Create a summarizer.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer key for the chat endpoint
    /// * `url` - Endpoint (default: [`DEFAULT_CHAT_URL`])
    /// * `model` - Model name (default: [`DEFAULT_CHAT_MODEL`])
    /// * `timeout` - Request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        api_key: &str,
        url: Option<&str>,
        model: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            client,
            url: url.unwrap_or(DEFAULT_CHAT_URL).to_string(),
            model: model.unwrap_or(DEFAULT_CHAT_MODEL).to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn request(&self, prompt: String) -> Result<String, Error> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: "You summarize software contributions concisely.".to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("summary request failed: {status}")));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse response: {e}")))?;

        data.choices
            .into_iter()
            .map(|c| c.message)
            .find(|m| m.role == Role::Assistant && !m.content.trim().is_empty())
            .map(|m| m.content.trim().to_string())
            .ok_or_else(|| Error::Http("summary response had no content".to_string()))
    }
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, items: &[ContributionItem], display_name: &str) -> String {
        if items.is_empty() {
            return SUMMARY_FALLBACK.to_string();
        }
        match self.request(build_prompt(items, display_name)).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "summary generation failed, using fallback");
                SUMMARY_FALLBACK.to_string()
            }
        }
    }
}

/// [`Summarizer`] that returns a fixed text, or the fallback when unset.
#[derive(Debug, Clone, Default)]
pub struct StaticSummarizer {
    text: Option<String>,
}

impl StaticSummarizer {
    /// Always answer with `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Always answer with [`SUMMARY_FALLBACK`], as a failing service would.
    #[must_use]
    pub fn failing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn summarize(&self, _items: &[ContributionItem], _display_name: &str) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| SUMMARY_FALLBACK.to_string())
    }
}
