use super::errors::ConfigError;
use super::models::app_env::{AppEnv, Env};
use std::env;
use std::str::FromStr;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Обязательные переменные в порядке проверки
pub const REQUIRED_VARS: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

impl AppEnv {
    /// Читает окружение процесса
    pub fn new() -> Result<AppEnv, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Собирает окружение через произвольный источник переменных.
    /// Возвращает все отсутствующие переменные сразу, а не только первую.
    pub fn from_lookup<F>(lookup: F) -> Result<AppEnv, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = read_env(&lookup)?;

        let mut missing = Vec::new();
        let values = REQUIRED_VARS.map(|name| {
            let value = lookup(name).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        });

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let [practicum_token, telegram_token, telegram_chat_id] = values;

        Ok(AppEnv {
            env,
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

/// Окружение нужно раньше секретов: от него зависят конфиг и логгер
pub fn read_env<F>(lookup: &F) -> Result<Env, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("ENV") {
        Some(value) if !value.trim().is_empty() => Env::from_str(&value),
        _ => Ok(Env::Local),
    }
}
