// File: src/services/homework/scheduler.rs
use super::response::{check_response, current_date};
use super::status::parse_status;
use crate::app_state::models::AppState;
use crate::services::errors::{BotError, Disposition};
use chrono::Utc;
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info, instrument, warn};

/// Префикс сообщения о сбое, которое уходит в чат
pub const FAILURE_PREFIX: &str = "Сбой в работе программы: ";

/// Состояние между итерациями опроса
#[derive(Debug, Clone, PartialEq)]
pub struct PollState {
    /// Нижняя граница окна для следующего запроса (секунды Unix)
    pub cursor: i64,
    /// Текст последней ошибки, о которой сообщили в чат
    pub last_error: Option<String>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_error: None,
        }
    }

    /// После перезапуска события между остановкой и стартом не запрашиваются
    pub fn starting_now() -> Self {
        Self::new(Utc::now().timestamp())
    }
}

pub struct HomeworkScheduler {
    app_state: Arc<AppState>,
}

impl HomeworkScheduler {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self { app_state }
    }

    /// Бесконечный цикл опроса с фиксированной паузой после каждой итерации
    pub async fn run(&self, state: &mut PollState) {
        let interval = self.app_state.settings.app_config.homework_poller.interval();

        info!(
            "Starting homework scheduler with {} second interval, cursor {}",
            interval.as_secs(),
            state.cursor
        );

        loop {
            self.poll_once(state).await;

            debug!("Next poll in {} seconds", interval.as_secs());
            time::sleep(interval).await;
        }
    }

    /// Одна итерация: запрос, проверка, уведомление. Ошибки не выходят наружу.
    pub async fn poll_once(&self, state: &mut PollState) {
        if let Err(err) = self.check_updates(state).await {
            self.handle_error(err, state).await;
        }
    }

    #[instrument(skip_all, fields(cursor = state.cursor))]
    async fn check_updates(&self, state: &mut PollState) -> Result<(), BotError> {
        let response = self.app_state.homework_api.get_statuses(state.cursor).await?;

        // Курсор двигаем до проверки списка работ, иначе сбойная запись
        // будет приходить в каждом следующем ответе
        if let Ok(next_cursor) = current_date(&response) {
            state.cursor = next_cursor;
        }

        let checked = check_response(&response)?;
        debug!(
            "API returned {} homework records up to {}",
            checked.homeworks.len(),
            checked.current_date
        );

        // API отдаёт работы от новых к старым, сообщаем только о последней
        let Some((latest, rest)) = checked.homeworks.split_first() else {
            debug!("No homework status changes");
            return Ok(());
        };

        if !rest.is_empty() {
            debug!("Skipping {} older homework records", rest.len());
        }

        let message = parse_status(latest)?;
        self.app_state.notifier.send_message(&message).await
    }

    #[instrument(skip_all)]
    async fn handle_error(&self, err: BotError, state: &mut PollState) {
        let message = format!("{}{}", FAILURE_PREFIX, err);
        error!("Polling iteration failed: {}", err);

        if err.disposition() == Disposition::LogOnly {
            return;
        }

        if state.last_error.as_deref() == Some(message.as_str()) {
            debug!("Error already reported to chat, skipping notification");
            return;
        }

        // Запоминаем до отправки, даже если доставка не удастся
        state.last_error = Some(message.clone());

        if let Err(send_err) = self.app_state.notifier.send_message(&message).await {
            warn!("Failed to report error to chat: {}", send_err);
        }
    }
}
