//! DeepSeek chat-completions client for the annotation service.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::prompt::ANNOTATION_RULES;
use super::types::AnnotationService;
use super::AnnotateError;
use crate::config::AnnotatorConfig;

/// HTTP client for the DeepSeek chat-completions API.
pub struct DeepseekClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl DeepseekClient {
    pub fn new(config: &AnnotatorConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout_secs: config.timeout_secs,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for /chat/completions
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    model: &'a str,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /chat/completions
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl AnnotationService for DeepseekClient {
    fn annotate(&self, text: &str) -> Result<String, AnnotateError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ANNOTATION_RULES,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            model: &self.model,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AnnotateError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AnnotateError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    AnnotateError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnnotateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| AnnotateError::ResponseParsing(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AnnotateError::MissingContent)
    }
}

/// One scripted reply for [`MockAnnotationService`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Succeed with this annotated text.
    Reply(String),
    /// Sleep, then succeed. Used to exercise FIFO ordering.
    ReplyAfter(Duration, String),
    /// Fail with an HTTP-client error carrying this message.
    Fail(String),
}

/// Mock annotation service for testing — scripted replies, failures,
/// and delays, with an attempt counter.
pub struct MockAnnotationService {
    script: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    calls: AtomicU32,
}

impl MockAnnotationService {
    /// Always succeed with `response`.
    pub fn replying(response: &str) -> Self {
        Self::scripted(vec![], MockReply::Reply(response.to_string()))
    }

    /// Always fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self::scripted(vec![], MockReply::Fail(message.to_string()))
    }

    /// Play `script` in order, then repeat `fallback` forever.
    pub fn scripted(script: Vec<MockReply>, fallback: MockReply) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicU32::new(0),
        }
    }

    /// Number of annotate calls received so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnnotationService for MockAnnotationService {
    fn annotate(&self, _text: &str) -> Result<String, AnnotateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .script
            .lock()
            .expect("mock script lock")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            MockReply::Reply(text) => Ok(text),
            MockReply::ReplyAfter(delay, text) => {
                std::thread::sleep(delay);
                Ok(text)
            }
            MockReply::Fail(message) => Err(AnnotateError::HttpClient(message)),
        }
    }
}
