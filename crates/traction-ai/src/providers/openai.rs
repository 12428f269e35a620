use crate::client::CompletionClient;
use crate::models::{ChatMessage, ChatRequest, ChatResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// OpenAI 兼容 Provider（官方 API 及兼容网关均可）。
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let timeout = timeout_secs.unwrap_or(120);
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            client,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn provider(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let req = ChatRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            max_tokens,
            temperature: None,
        };

        tracing::debug!(
            model = %model,
            max_tokens,
            message_count = messages.len(),
            "Calling completion API"
        );

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&req)
            .send()
            .await
            .context("Failed to send request to completion API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Completion API request failed"
            );
            anyhow::bail!("Completion API error {}: {}", status, body);
        }

        let chat_resp: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse completion API response")?;

        tracing::debug!(
            usage = ?chat_resp.usage,
            finish_reason = ?chat_resp.choices.first().and_then(|c| c.finish_reason.as_deref()),
            "Completion API response received"
        );

        chat_resp
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("Empty response from completion API"))
    }
}
