use crate::env_config::errors::ConfigError;
use crate::env_config::models::app_env::Env;
use serde::Deserialize;
use std::io::ErrorKind;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub homework_poller: HomeworkPollerConfig,
    pub telegram: TelegramConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeworkPollerConfig {
    pub endpoint: String,
    pub interval_seconds: u64,
    // Без значения используется таймаут транспорта по умолчанию
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub api_url: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
        }
    }
}

impl Default for HomeworkPollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_seconds: 600,
            request_timeout_seconds: None,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Загружает config/<env>.toml. Отсутствующий файл не ошибка: берутся значения по умолчанию.
    pub fn new(env: &Env) -> Result<AppConfig, ConfigError> {
        let path = format!("config/{}.toml", env);

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        Self::from_toml(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn from_toml(raw: &str) -> Result<AppConfig, toml::de::Error> {
        toml::from_str(raw)
    }
}

impl HomeworkPollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}
