/// Groq language-model provider
///
/// Uses Groq's OpenAI-compatible `/chat/completions` endpoint with a single user message.
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    services::providers::{ensure_success, LanguageModel},
};

const PROVIDER: &str = "groq";
const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct GroqProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GroqProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            model,
        }
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Content of the first choice
fn first_choice_content(response: ChatResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::ExternalApi("Groq response contained no completion".to_string()))
}

#[async_trait::async_trait]
impl LanguageModel for GroqProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await?;

        let completion: ChatResponse = ensure_success("Groq", response).await?.json().await?;
        let content = first_choice_content(completion)?;

        tracing::info!(
            model = %self.model,
            prompt_chars = prompt.len(),
            completion_chars = content.len(),
            provider = PROVIDER,
            "Completion generated"
        );

        Ok(content)
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}
