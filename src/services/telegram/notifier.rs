use crate::services::errors::BotError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument};

/// Доставка текстовых сообщений единственному получателю
#[async_trait]
pub trait Notifier {
    async fn send_message(&self, text: &str) -> Result<(), BotError>;
}

#[derive(Debug, Deserialize)]
struct TelegramApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API, метод sendMessage
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, bot_token: &str, chat_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.bot_token, method)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip_all)]
    async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::DeliveryFailed(e.to_string()))?;

        let result: TelegramApiResponse = response
            .json()
            .await
            .map_err(|e| BotError::DeliveryFailed(format!("invalid sendMessage response: {e}")))?;

        if !result.ok {
            return Err(BotError::DeliveryFailed(
                result
                    .description
                    .unwrap_or_else(|| "Telegram API returned ok=false".to_string()),
            ));
        }

        info!("Message delivered to Telegram chat {}", self.chat_id);
        Ok(())
    }
}
