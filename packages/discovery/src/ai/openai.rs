//! Query generator backed by an OpenAI-compatible chat completions API.
//!
//! Defaults target Cerebras Cloud, which speaks the OpenAI wire format,
//! but any compatible endpoint works via [`OpenAiGenerator::with_base_url`].
//!
//! # Example
//!
//! ```rust,ignore
//! use discovery::ai::OpenAiGenerator;
//!
//! let generator = OpenAiGenerator::new("csk-...")
//!     .with_model("llama3.1-8b");
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ai::prompts;
use crate::error::{DiscoveryError, Result};
use crate::security::SecretString;
use crate::traits::generator::QueryGenerator;
use crate::types::Profile;

const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai/v1";
const DEFAULT_MODEL: &str = "llama3.1-8b";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "CEREBRAS_API_KEY";
/// Optional override for the API base url.
pub const BASE_URL_VAR: &str = "CEREBRAS_BASE_URL";
/// Optional override for the model name.
pub const MODEL_VAR: &str = "CEREBRAS_MODEL";

// Low temperature and a tight token cap: the output is a single short
// query, not prose.
const QUERY_TEMPERATURE: f32 = 0.2;
const QUERY_MAX_TOKENS: u32 = 50;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

/// [`QueryGenerator`] implementation over the OpenAI chat completions
/// wire format.
pub struct OpenAiGenerator {
    client: Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl OpenAiGenerator {
    /// Create a generator with the given API key and Cerebras defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: SecretString::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a generator from `CEREBRAS_API_KEY`, honoring the optional
    /// `CEREBRAS_BASE_URL` and `CEREBRAS_MODEL` overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| DiscoveryError::Config(format!("{API_KEY_VAR} is not set").into()))?;

        let mut generator = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            generator = generator.with_base_url(base_url);
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            generator = generator.with_model(model);
        }
        Ok(generator)
    }

    /// Point at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Strip whitespace and any wrapping quote characters from a model reply.
fn clean_reply(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

#[async_trait]
impl QueryGenerator for OpenAiGenerator {
    async fn generate_query(&self, profile: &Profile) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompts::build_query_prompt(profile),
            }],
            temperature: QUERY_TEMPERATURE,
            max_tokens: QUERY_MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DiscoveryError::QuerySynthesis(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DiscoveryError::QuerySynthesis(
                format!("chat completions error {status}: {error_text}").into(),
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DiscoveryError::QuerySynthesis(Box::new(e)))?;

        let reply = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| clean_reply(&c.message.content))
            .ok_or_else(|| DiscoveryError::QuerySynthesis("empty choices in reply".into()))?;

        if reply.is_empty() {
            return Err(DiscoveryError::QuerySynthesis("model returned an empty query".into()));
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_reply_strips_quotes_and_whitespace() {
        assert_eq!(clean_reply("  \"sales jobs in Lahore\"  "), "sales jobs in Lahore");
        assert_eq!(clean_reply("'remote sdr roles'"), "remote sdr roles");
        assert_eq!(clean_reply("\"'quoted twice'\""), "quoted twice");
        assert_eq!(clean_reply("plain query"), "plain query");
    }

    #[test]
    fn defaults_target_cerebras() {
        let generator = OpenAiGenerator::new("csk-test");
        assert_eq!(generator.base_url, DEFAULT_BASE_URL);
        assert_eq!(generator.model(), "llama3.1-8b");
    }

    #[test]
    fn response_parses_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"\"b2b sales jobs in Karachi\""}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let cleaned = clean_reply(&parsed.choices[0].message.content);
        assert_eq!(cleaned, "b2b sales jobs in Karachi");
    }

    // Requires a real API key.
    #[tokio::test]
    #[ignore]
    async fn live_generate() {
        let generator = OpenAiGenerator::from_env().unwrap();
        let profile = Profile::new("dev@example.com")
            .with_skills(["rust", "tokio", "postgres"])
            .with_location("Lahore");

        let query = generator.generate_query(&profile).await.unwrap();
        assert!(!query.is_empty());
    }
}
