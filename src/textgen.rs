use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::TextGenConfig;
use crate::error::TextGenError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_length: usize) -> Result<String, TextGenError>;
}

/// Optional text-generation capability. Callers branch on availability.
#[derive(Clone)]
pub enum TextGeneration {
    Available(Arc<dyn TextGenerator>),
    Unavailable,
}

impl TextGeneration {
    pub fn from_config(config: Option<TextGenConfig>) -> Self {
        match config {
            Some(config) => Self::Available(Arc::new(HttpTextGenerator::new(config))),
            None => Self::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Best effort: any failure is logged and turned into `None`.
    pub async fn insight(&self, prompt: &str, max_length: usize) -> Option<String> {
        let generator = match self {
            Self::Available(generator) => generator,
            Self::Unavailable => return None,
        };

        match generator.generate(prompt, max_length).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(err) => {
                log::warn!("text generation unavailable, skipping insight: {err}");
                None
            }
        }
    }
}

pub struct HttpTextGenerator {
    client: Client,
    config: TextGenConfig,
}

impl HttpTextGenerator {
    pub fn new(config: TextGenConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str, max_length: usize) -> Result<String, TextGenError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            max_tokens: max_length,
        };

        let mut request = self.client.post(url).json(&payload);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(TextGenError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TextGenError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _prompt: &str, _max_length: usize) -> Result<String, TextGenError> {
            Err(TextGenError::EmptyResponse)
        }
    }

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        async fn generate(&self, prompt: &str, _max_length: usize) -> Result<String, TextGenError> {
            Ok(format!("{prompt} it is"))
        }
    }

    #[actix_web::test]
    async fn test_unavailable_yields_nothing() {
        assert_eq!(TextGeneration::Unavailable.insight("Explain x", 150).await, None);
    }

    #[actix_web::test]
    async fn test_failure_is_swallowed() {
        let generation = TextGeneration::Available(Arc::new(Failing));
        assert_eq!(generation.insight("Explain x", 150).await, None);
    }

    #[actix_web::test]
    async fn test_available_returns_text() {
        let generation = TextGeneration::Available(Arc::new(Echo));
        assert_eq!(
            generation.insight("Explain x", 150).await.as_deref(),
            Some("Explain x it is")
        );
    }
}
