use crate::env_config::models::app_env::Env;
use std::fmt;
use std::io::{Error, ErrorKind};
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::FmtSpan, time::ChronoLocal},
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Supported log format types
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Plain,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Plain => write!(f, "plain"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl From<&str> for LogFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Plain,
        }
    }
}

/// Every line carries timestamp, level, span (stage function) and source line, written to stdout.
pub fn init_logger(log_level: &str, log_format: &str, env: Env) -> Result<(), Error> {
    let filter = EnvFilter::try_new(log_level)
        .map_err(|_| Error::new(ErrorKind::InvalidInput, "Invalid log level"))?;

    let format = LogFormat::from(log_format);

    let result = if env == Env::Prod {
        // Production: без событий закрытия спанов
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Plain => builder.try_init(),
        }
    } else {
        // Development: видно, сколько длился каждый этап
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE);

        match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Plain => builder.try_init(),
        }
    };

    result.map_err(|err| Error::other(err.to_string()))?;

    tracing::info!("Logger initialized: level {}, format {}", log_level, format);
    Ok(())
}
