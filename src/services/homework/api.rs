use crate::services::errors::BotError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Источник статусов домашних работ
#[async_trait]
pub trait HomeworkApi {
    /// Один запрос статусов начиная с from_date. Повторов внутри нет.
    async fn get_statuses(&self, from_date: i64) -> Result<Value, BotError>;
}

/// Клиент API Практикума
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: &str,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    #[instrument(skip(self))]
    async fn get_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        debug!("Requesting homework statuses from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| BotError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::EndpointUnavailable {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BotError::RequestFailed(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| BotError::DecodeFailed(e.to_string()))
    }
}
