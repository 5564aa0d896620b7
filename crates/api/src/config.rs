use std::path::PathBuf;
use std::str::FromStr;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (default).
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://database.db`).
    pub database_url: String,
    /// Upper bound of pooled store connections (default: `5`).
    pub database_max_connections: u32,
    /// Allowed CORS origins. `["*"]` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for paths no API route matches, if it exists.
    pub static_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                |
    /// |----------------------------|------------------------|
    /// | `HOST`                     | `0.0.0.0`              |
    /// | `PORT`                     | `8080`                 |
    /// | `DATABASE_URL`             | `sqlite://database.db` |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                    |
    /// | `CORS_ORIGINS`             | `*`                    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                   |
    /// | `STATIC_DIR`               | `public`               |
    /// | `LOG_FORMAT`               | `pretty`               |
    ///
    /// Panics on unparsable numeric values; misconfiguration should stop
    /// the process at startup.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", 8080);
        let database_url = env_or("DATABASE_URL", "sqlite://database.db");
        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);
        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "*"));
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);

        let static_dir = Some(PathBuf::from(env_or("STATIC_DIR", "public")))
            .filter(|dir| dir.is_dir());

        let log_format = LogFormat::parse(&env_or("LOG_FORMAT", "pretty"));

        Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            static_dir,
            log_format,
        }
    }

    /// `true` when CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn parse_env<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} must be a valid {}: {e}", std::any::type_name::<T>())),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
