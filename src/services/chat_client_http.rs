//! Chat completions client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;

use crate::domain::{ApiConfig, AppError, Role};
use crate::ports::{ChatCompletionClient, ChatMessage, ChatRequest};

const DEFAULT_STATUS_MESSAGE: &str = "Chat completions request failed";

/// HTTP transport for an OpenAI-compatible chat completions endpoint.
///
/// One request per call; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    api_url: Url,
    client: Client,
}

impl HttpChatClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::api_error(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { api_url: config.url.clone(), client })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Option<Vec<ApiChoice>>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    #[serde(default)]
    message: Option<ApiChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn first_choice(body: &str, status: u16) -> Result<ChatMessage, AppError> {
    let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        AppError::api_error(format!("Failed to parse response: {}", e), Some(status))
    })?;

    let choices = api_response
        .choices
        .ok_or_else(|| AppError::api_error("No choices in response", Some(status)))?;
    let message = choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .ok_or_else(|| AppError::api_error("Response contained no choice message", Some(status)))?;
    let content = message
        .content
        .ok_or_else(|| AppError::api_error("First choice has no content", Some(status)))?;

    Ok(ChatMessage { role: message.role.unwrap_or(Role::Assistant), content })
}

impl ChatCompletionClient for HttpChatClient {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatMessage, AppError> {
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completions request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::api_error(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| {
            AppError::api_error(format!("Failed to read response: {}", e), Some(status.as_u16()))
        })?;

        if status.is_success() {
            return first_choice(&body_text, status.as_u16());
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 401 {
                "Unauthorized".to_string()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::api_error(message, Some(status.as_u16())))
    }
}
