use std::io::{BufRead, BufReader};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::advisor::{AdvisorError, ChatMessage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// OpenAI-compatible base URL, including the version segment.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Environment variable consulted for the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub stream: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.siliconflow.cn/v1".to_string(),
            model: "deepseek-ai/DeepSeek-R1-0528-Qwen3-8B".to_string(),
            api_key: None,
            api_key_env: "MY_API_KEY".to_string(),
            timeout_secs: 120,
            stream: true,
        }
    }
}

pub trait TextGenerator {
    /// Send `messages` and return the full reply. Partial output is passed
    /// to `on_chunk` as it arrives; non-streaming backends call it once.
    fn generate(
        &self,
        messages: &[ChatMessage],
        on_chunk: &mut dyn FnMut(&str),
    ) -> Result<String, AdvisorError>;
}

/// Chat-completions client over blocking HTTP.
pub struct HttpTextGenerator {
    config: AdvisorConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpTextGenerator {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AdvisorError::Disabled(config.api_key_env.clone()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn map_send_error(&self, e: reqwest::Error) -> AdvisorError {
        if e.is_timeout() {
            AdvisorError::Timeout(self.config.timeout_secs)
        } else {
            AdvisorError::Http(format!("Request failed: {e}"))
        }
    }

    fn send(&self, messages: &[ChatMessage]) -> Result<reqwest::blocking::Response, AdvisorError> {
        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "stream": self.config.stream,
        });

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(AdvisorError::Http(format!(
                "HTTP {} from chat completions endpoint",
                response.status()
            )));
        }
        Ok(response)
    }

    fn read_stream(
        &self,
        response: reqwest::blocking::Response,
        on_chunk: &mut dyn FnMut(&str),
    ) -> Result<String, AdvisorError> {
        let mut reply = String::new();
        for line in BufReader::new(response).lines() {
            let line = line.map_err(|e| AdvisorError::Http(format!("Stream interrupted: {e}")))?;
            match parse_stream_line(&line)? {
                StreamEvent::Delta(text) => {
                    on_chunk(&text);
                    reply.push_str(&text);
                }
                StreamEvent::Done => break,
                StreamEvent::Skip => {}
            }
        }
        Ok(reply)
    }

    fn read_whole(&self, response: reqwest::blocking::Response) -> Result<String, AdvisorError> {
        let body: serde_json::Value = response
            .json()
            .map_err(|e| AdvisorError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        body.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(AdvisorError::EmptyResponse)
    }
}

impl TextGenerator for HttpTextGenerator {
    fn generate(
        &self,
        messages: &[ChatMessage],
        on_chunk: &mut dyn FnMut(&str),
    ) -> Result<String, AdvisorError> {
        tracing::debug!(model = %self.config.model, messages = messages.len(), "sending chat completion");
        let response = self.send(messages)?;

        let reply = if self.config.stream {
            self.read_stream(response, on_chunk)?
        } else {
            let reply = self.read_whole(response)?;
            on_chunk(&reply);
            reply
        };

        if reply.trim().is_empty() {
            return Err(AdvisorError::EmptyResponse);
        }
        Ok(reply)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum StreamEvent {
    Delta(String),
    Done,
    Skip,
}

/// One line of a server-sent-event chat stream.
fn parse_stream_line(line: &str) -> Result<StreamEvent, AdvisorError> {
    let Some(data) = line.trim().strip_prefix("data:") else {
        return Ok(StreamEvent::Skip);
    };
    let data = data.trim();
    if data == "[DONE]" {
        return Ok(StreamEvent::Done);
    }

    let chunk: serde_json::Value = serde_json::from_str(data)
        .map_err(|e| AdvisorError::InvalidResponse(format!("Bad stream chunk: {e}")))?;

    // Reasoning models also emit `reasoning_content`; only the answer is kept.
    match chunk
        .pointer("/choices/0/delta/content")
        .and_then(|v| v.as_str())
    {
        Some(text) if !text.is_empty() => Ok(StreamEvent::Delta(text.to_string())),
        _ => Ok(StreamEvent::Skip),
    }
}
