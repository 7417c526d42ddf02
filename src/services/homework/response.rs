use crate::services::errors::{BotError, json_type_name};
use serde_json::Value;
use tracing::instrument;

/// Ответ API, прошедший проверку структуры
#[derive(Debug, PartialEq)]
pub struct CheckedResponse<'a> {
    pub current_date: i64,
    pub homeworks: &'a [Value],
}

/// Проверяет ответ API и возвращает список домашних работ без изменений
#[instrument(skip_all)]
pub fn check_response(response: &Value) -> Result<CheckedResponse<'_>, BotError> {
    let object = response.as_object().ok_or(BotError::ResponseNotObject {
        found: json_type_name(response),
    })?;

    let current_date = current_date(response)?;

    let homeworks = match object.get("homeworks") {
        None | Some(Value::Null) => return Err(BotError::MissingHomeworks),
        Some(Value::Array(homeworks)) => homeworks.as_slice(),
        Some(other) => {
            return Err(BotError::HomeworksNotList {
                found: json_type_name(other),
            });
        }
    };

    Ok(CheckedResponse {
        current_date,
        homeworks,
    })
}

/// Курсор для следующего запроса
pub fn current_date(response: &Value) -> Result<i64, BotError> {
    let object = response.as_object().ok_or(BotError::ResponseNotObject {
        found: json_type_name(response),
    })?;

    match object.get("current_date") {
        None | Some(Value::Null) => Err(BotError::MissingCurrentDate),
        Some(value) => value.as_i64().ok_or(BotError::CurrentDateNotInteger {
            found: json_type_name(value),
        }),
    }
}
