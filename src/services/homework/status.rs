use crate::services::errors::{BotError, json_type_name};
use serde_json::Value;
use tracing::instrument;

/// Статус проверки домашней работы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Домашняя работа из ответа API
#[derive(Debug, PartialEq)]
pub struct Homework<'a> {
    pub name: &'a str,
    pub status: HomeworkStatus,
}

impl<'a> Homework<'a> {
    pub fn from_value(homework: &'a Value) -> Result<Self, BotError> {
        let object = homework.as_object().ok_or(BotError::HomeworkNotObject {
            found: json_type_name(homework),
        })?;

        let name = object
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(BotError::MissingHomeworkName)?;

        let status = match object.get("status") {
            Some(Value::String(code)) => HomeworkStatus::from_code(code)
                .ok_or_else(|| BotError::UnknownStatus(Some(code.clone())))?,
            None | Some(Value::Null) => return Err(BotError::UnknownStatus(None)),
            Some(other) => return Err(BotError::UnknownStatus(Some(other.to_string()))),
        };

        Ok(Homework { name, status })
    }
}

/// Готовит текст уведомления об изменении статуса
#[instrument(skip_all)]
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let homework = Homework::from_value(homework)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name,
        homework.status.verdict()
    ))
}
