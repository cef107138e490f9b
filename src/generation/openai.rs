//! OpenAI-compatible chat completion backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CompletionRequest, TextBackend};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiBackend {
    pub fn new(api_key: String, base_url: String, model: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Backend(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl TextBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system_prompt,
                },
                Message {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Backend(format!("request failed: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Error::Backend(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Error::Backend(format!(
                "request failed with status {status}: {response_text}"
            )));
        }

        parse_chat_response(&response_text)
    }
}

fn parse_chat_response(response_text: &str) -> Result<String> {
    let chat_response: ChatResponse = serde_json::from_str(response_text)
        .map_err(|e| Error::Backend(format!("failed to parse response: {e}")))?;

    chat_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::Backend("no choices in response".to_string()))?
        .message
        .content
        .ok_or_else(|| Error::Backend("no content in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_response() {
        let text = parse_chat_response(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"시장 규모는"}}]}"#,
        )
        .unwrap();
        assert_eq!(text, "시장 규모는");
    }

    #[test]
    fn test_missing_choices_or_content() {
        assert!(matches!(
            parse_chat_response(r#"{"choices":[]}"#),
            Err(Error::Backend(_))
        ));
        assert!(matches!(
            parse_chat_response(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(Error::Backend(_))
        ));
        assert!(matches!(parse_chat_response("not json"), Err(Error::Backend(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "gpt-4-turbo-preview",
            messages: vec![Message {
                role: "user",
                content: "hi",
            }],
            temperature: 0.5,
            max_tokens: 2000,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4-turbo-preview");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 2000);
    }
}
