use thiserror::Error;

/// Ошибки загрузки конфигурации. Все они фатальны: бот не стартует.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Отсутствуют необходимые переменные окружения: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
