use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{LlmProvider, SummaryRequest};
use crate::llm::prompts::build_summary_prompt;

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Upper bound on generated summary length, in tokens.
const MAX_SUMMARY_TOKENS: u32 = 300;

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "OpenAI API key is missing. Set llm.api_key in config or TALKSUM_OPENAI_API_KEY."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build OpenAI HTTP client")?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        let body = CompletionApiRequest {
            model: self.model.clone(),
            prompt: build_summary_prompt(request.plain_text),
            temperature: request.creativity,
            max_tokens: MAX_SUMMARY_TOKENS,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Completion request failed")?;

        let response = response
            .error_for_status()
            .context("Completion API returned an error status")?;

        let payload: CompletionApiResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        extract_completion_text(&payload).context("Completion response did not contain text")
    }
}

/// First non-empty choice text, trimmed.
fn extract_completion_text(payload: &CompletionApiResponse) -> Option<String> {
    payload
        .choices
        .iter()
        .filter_map(|choice| choice.text.as_deref())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Serialize)]
struct CompletionApiRequest {
    model: String,
    prompt: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionApiResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trimmed_choice_text() {
        let payload: CompletionApiResponse =
            serde_json::from_value(serde_json::json!({
                "choices": [{ "text": "  It's about X.  " }]
            }))
            .expect("valid payload");

        assert_eq!(
            extract_completion_text(&payload).as_deref(),
            Some("It's about X.")
        );
    }

    #[test]
    fn skips_empty_choices() {
        let payload: CompletionApiResponse =
            serde_json::from_value(serde_json::json!({
                "choices": [{ "text": "   " }, { "text": "real summary" }]
            }))
            .expect("valid payload");

        assert_eq!(
            extract_completion_text(&payload).as_deref(),
            Some("real summary")
        );
    }

    #[test]
    fn missing_choices_yield_none() {
        let payload: CompletionApiResponse =
            serde_json::from_value(serde_json::json!({})).expect("valid payload");
        assert_eq!(extract_completion_text(&payload), None);
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let mut settings = Settings::default();
        settings.llm.api_key = "test-key".to_string();
        settings.llm.endpoint = "https://example.com/v1/".to_string();

        let client = OpenAiClient::from_settings(&settings).expect("client");
        assert_eq!(client.request_url(), "https://example.com/v1/completions");
    }

    #[test]
    fn blank_model_falls_back_to_default() {
        let mut settings = Settings::default();
        settings.llm.api_key = "test-key".to_string();
        settings.llm.model = "   ".to_string();

        let client = OpenAiClient::from_settings(&settings).expect("client");
        assert_eq!(client.model, DEFAULT_OPENAI_MODEL);
    }
}
