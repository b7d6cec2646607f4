//! Client for the OpenAI completions and edits endpoints.

use clap::ValueEnum;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response contained no choices")]
    EmptyResponse,
}

/// Model family selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Engine {
    Code,
    #[default]
    Text,
}

/// Fixed sampling parameters for a completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub engine: &'static str,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

/// Fixed sampling parameters for an edit request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditParams {
    pub engine: &'static str,
    pub temperature: f64,
    pub top_p: f64,
}

impl Engine {
    pub fn completion_params(self) -> CompletionParams {
        match self {
            Self::Code => CompletionParams {
                engine: "code-davinci-002",
                temperature: 0.05,
                max_tokens: 512,
                top_p: 1.0,
            },
            Self::Text => CompletionParams {
                engine: "text-davinci-003",
                temperature: 0.2,
                max_tokens: 512,
                top_p: 1.0,
            },
        }
    }

    pub fn edit_params(self) -> EditParams {
        let engine = match self {
            Self::Code => "code-davinci-edit-001",
            Self::Text => "text-davinci-edit-001",
        };
        EditParams {
            engine,
            temperature: 0.0,
            top_p: 1.0,
        }
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Serialize)]
struct EditRequest<'a> {
    input: &'a str,
    instruction: &'a str,
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct TextResponse {
    choices: Vec<TextChoice>,
}

#[derive(Debug, Deserialize)]
struct TextChoice {
    text: String,
}

/// Thin wrapper issuing one request per call. Failures are returned as-is.
pub struct OpenAiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_base: &str, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Submit `prompt` to the completions endpoint and return the first choice.
    pub async fn complete(&self, engine: Engine, prompt: &str) -> Result<String, ApiError> {
        let params = engine.completion_params();
        let url = format!("{}/engines/{}/completions", self.api_base, params.engine);
        let request = CompletionRequest {
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
        };

        self.post_for_text(&url, &request).await
    }

    /// Submit `input` with `instruction` to the edits endpoint and return the first choice.
    pub async fn edit(
        &self,
        engine: Engine,
        input: &str,
        instruction: &str,
    ) -> Result<String, ApiError> {
        let params = engine.edit_params();
        let url = format!("{}/engines/{}/edits", self.api_base, params.engine);
        let request = EditRequest {
            input,
            instruction,
            temperature: params.temperature,
            top_p: params.top_p,
        };

        self.post_for_text(&url, &request).await
    }

    async fn post_for_text<T: Serialize>(&self, url: &str, body: &T) -> Result<String, ApiError> {
        tracing::debug!("POST {}", url);

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Backend { status, message });
        }

        let response: TextResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or(ApiError::EmptyResponse)
    }
}
