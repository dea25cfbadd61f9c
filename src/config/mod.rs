//! Configuration handling for the service.
//!
//! Everything is read from environment variables with development defaults,
//! so `Config::from_env` works out of the box on a laptop with the artifacts
//! sitting in `./artifacts`. Values that are present but malformed are
//! rejected instead of silently falling back.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable names. Public so tests and deployment tooling can
/// refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MODEL_PATH: &str = "MODEL_PATH";
pub const ENV_VECTORIZER_PATH: &str = "VECTORIZER_PATH";
pub const ENV_STOPWORDS_PATH: &str = "STOPWORDS_PATH";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_FETCH_USER_AGENT: &str = "FETCH_USER_AGENT";
pub const ENV_MIN_TEXT_LENGTH: &str = "MIN_TEXT_LENGTH";
pub const ENV_MIN_ARTICLE_LENGTH: &str = "MIN_ARTICLE_LENGTH";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_MODEL_PATH: &str = "artifacts/model.json";
const DEFAULT_VECTORIZER_PATH: &str = "artifacts/vectorizer.json";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
const DEFAULT_MIN_TEXT_LENGTH: usize = 20;
const DEFAULT_MIN_ARTICLE_LENGTH: usize = 50;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Service runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    model_path: PathBuf,
    vectorizer_path: PathBuf,
    stopwords_path: Option<PathBuf>,
    fetch_timeout: Duration,
    fetch_user_agent: String,
    min_text_length: usize,
    min_article_length: usize,
    log_format: LogFormat,
}

impl Config {
    /// Create a config pointing at explicit artifact paths, everything else
    /// at its default.
    pub fn new(
        bind_addr: impl Into<String>,
        model_path: impl Into<PathBuf>,
        vectorizer_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            model_path: model_path.into(),
            vectorizer_path: vectorizer_path.into(),
            stopwords_path: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            fetch_user_agent: DEFAULT_FETCH_USER_AGENT.to_string(),
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            min_article_length: DEFAULT_MIN_ARTICLE_LENGTH,
            log_format: LogFormat::default(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let model_path = env::var(ENV_MODEL_PATH).unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
        let vectorizer_path =
            env::var(ENV_VECTORIZER_PATH).unwrap_or_else(|_| DEFAULT_VECTORIZER_PATH.to_string());
        let stopwords_path = env::var(ENV_STOPWORDS_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let fetch_timeout_secs: u64 =
            parse_var(ENV_FETCH_TIMEOUT_SECS, "fetch_timeout_secs", DEFAULT_FETCH_TIMEOUT_SECS)?;
        if fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        let fetch_user_agent = env::var(ENV_FETCH_USER_AGENT)
            .unwrap_or_else(|_| DEFAULT_FETCH_USER_AGENT.to_string());
        let min_text_length =
            parse_var(ENV_MIN_TEXT_LENGTH, "min_text_length", DEFAULT_MIN_TEXT_LENGTH)?;
        let min_article_length =
            parse_var(ENV_MIN_ARTICLE_LENGTH, "min_article_length", DEFAULT_MIN_ARTICLE_LENGTH)?;
        let log_format = parse_var(ENV_LOG_FORMAT, "log_format", LogFormat::default())?;

        Ok(Self {
            bind_addr,
            model_path: PathBuf::from(model_path),
            vectorizer_path: PathBuf::from(vectorizer_path),
            stopwords_path,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            fetch_user_agent,
            min_text_length,
            min_article_length,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Serialized classifier artifact.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
    /// Serialized vectorizer artifact.
    pub fn vectorizer_path(&self) -> &Path {
        &self.vectorizer_path
    }
    /// Optional replacement for the built-in English stopword list.
    pub fn stopwords_path(&self) -> Option<&Path> {
        self.stopwords_path.as_deref()
    }
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    pub fn fetch_user_agent(&self) -> &str {
        &self.fetch_user_agent
    }
    /// Minimum trimmed length of the raw text submitted for analysis.
    pub fn min_text_length(&self) -> usize {
        self.min_text_length
    }
    /// Minimum length of the title + body pulled out of a URL.
    pub fn min_article_length(&self) -> usize {
        self.min_article_length
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

/// Development defaults, identical to `from_env` with no overrides set.
impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BIND_ADDR, DEFAULT_MODEL_PATH, DEFAULT_VECTORIZER_PATH)
    }
}

fn parse_var<T>(key: &str, field: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
