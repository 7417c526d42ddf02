use crate::env_config::models::app_setting::AppSettings;
use crate::services::homework::api::{HomeworkApi, PracticumClient};
use crate::services::telegram::notifier::{Notifier, TelegramNotifier};

use std::sync::Arc;

pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub homework_api: Arc<dyn HomeworkApi + Send + Sync>,
    pub notifier: Arc<dyn Notifier + Send + Sync>,
}

impl AppState {
    pub fn new(
        settings: Arc<AppSettings>,
        homework_api: Arc<dyn HomeworkApi + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            settings,
            homework_api,
            notifier,
        }
    }

    /// Собирает боевые клиенты Практикума и Telegram из настроек
    pub fn from_settings(settings: Arc<AppSettings>) -> Result<Self, reqwest::Error> {
        let poller_config = &settings.app_config.homework_poller;

        let homework_api = Arc::new(PracticumClient::new(
            &poller_config.endpoint,
            &settings.app_env.practicum_token,
            poller_config.request_timeout(),
        )?) as Arc<dyn HomeworkApi + Send + Sync>;

        let notifier = Arc::new(TelegramNotifier::new(
            &settings.app_config.telegram.api_url,
            &settings.app_env.telegram_token,
            &settings.app_env.telegram_chat_id,
        )) as Arc<dyn Notifier + Send + Sync>;

        Ok(Self::new(settings, homework_api, notifier))
    }
}
