mod app_state;
mod env_config;
mod logger;
mod services;

use app_state::models::AppState;
use env_config::build_env::read_env;
use env_config::errors::ConfigError;
use env_config::models::{app_config::AppConfig, app_env::AppEnv, app_setting::AppSettings};
use services::homework::scheduler::{HomeworkScheduler, PollState};
use std::{process, sync::Arc};
use tracing::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Инициализация приложения
    let settings: Arc<AppSettings> = Arc::new(initialize_application());

    // Клиенты Практикума и Telegram
    let app_state = match AppState::from_settings(settings.clone()) {
        Ok(state) => Arc::new(state),
        Err(err) => {
            error!("Failed to build HTTP clients: {}", err);
            process::exit(1);
        }
    };

    info!(
        "Polling {} every {} seconds",
        settings.app_config.homework_poller.endpoint,
        settings.app_config.homework_poller.interval_seconds
    );

    // Цикл опроса работает, пока процесс не остановят
    let scheduler = HomeworkScheduler::new(app_state);
    let mut state = PollState::starting_now();
    scheduler.run(&mut state).await;
}

/// Инициализирует настройки и логирование приложения.
/// Любая ошибка конфигурации завершает процесс с кодом 1.
fn initialize_application() -> AppSettings {
    // .env необязателен
    dotenvy::dotenv().ok();

    let environment = match read_env(&|name: &str| std::env::var(name).ok()) {
        Ok(env) => env,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let config = match AppConfig::new(&environment) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Err(err) = logger::init_logger(&config.log.level, &config.log.format, environment) {
        eprintln!("Failed to initialize logger: {}", err);
        process::exit(1);
    }

    info!("Starting homework bot...");
    info!("Current environment: {}", environment);

    let app_env = match AppEnv::new() {
        Ok(app_env) => app_env,
        Err(ConfigError::MissingVariables(names)) => {
            for name in &names {
                error!("Missing required environment variable {}", name);
            }
            error!("{}", ConfigError::MissingVariables(names));
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    let app_settings = AppSettings {
        app_config: config,
        app_env,
    };

    if app_settings.app_env.is_local() {
        info!("Running in local development mode");
        debug!("Configuration details: {:#?}", app_settings);
    }

    app_settings
}
