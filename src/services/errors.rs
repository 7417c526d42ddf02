use thiserror::Error;

/// Что цикл опроса делает с ошибкой
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Логировать и сообщить в чат (с дедупликацией)
    Notify,
    /// Только логировать
    LogOnly,
}

/// Ошибки одной итерации опроса. Тексты уходят в чат как есть.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Ошибка при запросе к основному API: {0}")]
    RequestFailed(String),

    #[error("Эндпоинт {endpoint} недоступен. Код ответа: {status}")]
    EndpointUnavailable { endpoint: String, status: u16 },

    #[error("Ошибка при декодировании JSON: {0}")]
    DecodeFailed(String),

    #[error("Ответ API имеет тип {found} вместо объекта")]
    ResponseNotObject { found: &'static str },

    #[error("В ответе API отсутствует ключ current_date")]
    MissingCurrentDate,

    #[error("В ответе API current_date имеет тип {found} вместо целого числа")]
    CurrentDateNotInteger { found: &'static str },

    #[error("В ответе API отсутствует ключ homeworks")]
    MissingHomeworks,

    #[error("В ответе API homeworks имеет тип {found} вместо списка")]
    HomeworksNotList { found: &'static str },

    #[error("Домашняя работа имеет тип {found} вместо объекта")]
    HomeworkNotObject { found: &'static str },

    #[error("В ответе API отсутствует ключ homework_name")]
    MissingHomeworkName,

    #[error("Статус {} не найден", .0.as_deref().unwrap_or("None"))]
    UnknownStatus(Option<String>),

    #[error("Ошибка при отправке сообщения: {0}")]
    DeliveryFailed(String),
}

impl BotError {
    pub fn disposition(&self) -> Disposition {
        match self {
            // Отсутствие current_date не повод будить пользователя,
            // а о сбое отправки в чат сообщить нельзя
            BotError::MissingCurrentDate | BotError::DeliveryFailed(_) => Disposition::LogOnly,
            BotError::RequestFailed(_)
            | BotError::EndpointUnavailable { .. }
            | BotError::DecodeFailed(_)
            | BotError::ResponseNotObject { .. }
            | BotError::CurrentDateNotInteger { .. }
            | BotError::MissingHomeworks
            | BotError::HomeworksNotList { .. }
            | BotError::HomeworkNotObject { .. }
            | BotError::MissingHomeworkName
            | BotError::UnknownStatus(_) => Disposition::Notify,
        }
    }
}

/// Имя JSON-типа для сообщений об ошибках
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
