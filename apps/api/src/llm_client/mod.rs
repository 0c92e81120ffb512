/// LLM Client — the single point of entry for all Groq API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module.
///
/// Handlers hold the model as `Arc<dyn ChatModel>` so tests can swap in a
/// fake; `GroqClient` is the only production implementation.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A chat completion backend. One user prompt in, one text completion out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// Groq chat-completions client. Wraps the OpenAI-compatible endpoint with a
/// request timeout and retry on 429/5xx.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(api_key: String, model: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
            temperature,
            max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatModel for GroqClient {
    /// Makes a chat completion call, returning the assistant message text.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(GROQ_API_URL)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<GroqError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return chat_response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .filter(|s| !s.is_empty())
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Canned-reply model: pops one queued reply per call and counts calls,
    /// so tests can assert which gates actually reached the LLM.
    pub struct FakeModel {
        replies: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl FakeModel {
        pub fn new(replies: Vec<String>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn as_model(self: &Arc<Self>) -> Arc<dyn ChatModel> {
            self.clone()
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Prompts received so far, in call order.
        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatModel for FakeModel {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(LlmError::EmptyContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_openai_shape() {
        let request = ChatRequest {
            model: "llama-3.3-70b-versatile",
            temperature: 0.2,
            max_tokens: 1024,
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.3-70b-versatile");
        assert_eq!(value["max_tokens"], 1024);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_chat_response_deserializes_content() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "resume"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 1}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("resume")
        );
        assert_eq!(response.usage.unwrap().completion_tokens, 1);
    }

    #[test]
    fn test_chat_response_tolerates_missing_usage() {
        let json = r#"{"choices": [{"message": {"content": "ok"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.usage.is_none());
    }
}
