use std::env;
use std::time::Duration;

/// Server configuration, read once at startup.
///
/// The deadlines default to the values the system was tuned with: 200ms for
/// the upstream fetch and 10ms for the database write.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub awesome_api_url: String,
    pub fetch_timeout: Duration,
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://cotacoes.db?mode=rwc".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            awesome_api_url: env::var("AWESOME_API_URL")
                .unwrap_or_else(|_| "https://economia.awesomeapi.com.br".to_string()),
            fetch_timeout: duration_ms_from_env("FETCH_TIMEOUT_MS", 200),
            store_timeout: duration_ms_from_env("STORE_TIMEOUT_MS", 10),
        }
    }
}

/// Client-side configuration for the `cotacao-client` binary.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout: Duration,
    pub output_file: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: env::var("COTACAO_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8080/cotacao".to_string()),
            timeout: duration_ms_from_env("CLIENT_TIMEOUT_MS", 300),
            output_file: env::var("COTACAO_FILE").unwrap_or_else(|_| "cotacao.txt".to_string()),
        }
    }
}

/// Reads a millisecond duration from the environment, falling back to
/// `default_ms` when the variable is unset or not a number.
fn duration_ms_from_env(key: &str, default_ms: u64) -> Duration {
    let ms = env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
