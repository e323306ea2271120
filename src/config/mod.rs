use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    /// MongoDB connection string
    pub url: Option<String>,
    /// Database used when the connection string does not name one
    pub name: String,
    pub connection_timeout: u64,
}

/// How error outcomes are reported on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCodeMode {
    /// Every response is 200 OK, failures are only visible in the body
    Legacy,
    /// Validation 400, not found 404, store failures 500
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub status_codes: StatusCodeMode,
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("MOVIE_API_HOST") {
            self.server.host = v;
        }
        if let Some(port) = ["MOVIE_API_PORT", "PORT", "port"]
            .iter()
            .find_map(|key| env::var(key).ok())
            .and_then(|v| v.parse().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Ok(v) = env::var("MOVIE_API_STORE") {
            self.database.backend = parse_backend(&v).unwrap_or(self.database.backend);
        }
        if let Some(url) = ["DATABASE_URL", "DATABASENAME"]
            .iter()
            .find_map(|key| env::var(key).ok())
        {
            self.database.url = Some(url);
        }
        if let Ok(v) = env::var("MOVIE_API_DB_NAME") {
            self.database.name = v;
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // API overrides
        if let Ok(v) = env::var("MOVIE_API_STATUS_CODES") {
            self.api.status_codes = parse_status_codes(&v).unwrap_or(self.api.status_codes);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                backend: StoreBackend::MongoDb,
                url: None,
                name: "test".to_string(),
                connection_timeout: 30,
            },
            api: ApiConfig {
                status_codes: StatusCodeMode::Legacy,
                enable_request_logging: true,
                max_request_size_bytes: 100 * 1024, // 100KB
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                backend: StoreBackend::MongoDb,
                url: None,
                name: "test".to_string(),
                connection_timeout: 10,
            },
            api: ApiConfig {
                status_codes: StatusCodeMode::Legacy,
                enable_request_logging: true,
                max_request_size_bytes: 100 * 1024,
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                backend: StoreBackend::MongoDb,
                url: None,
                name: "test".to_string(),
                connection_timeout: 5,
            },
            api: ApiConfig {
                status_codes: StatusCodeMode::Legacy,
                enable_request_logging: false,
                max_request_size_bytes: 100 * 1024,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_backend(value: &str) -> Option<StoreBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mongodb" | "mongo" => Some(StoreBackend::MongoDb),
        "memory" | "mem" => Some(StoreBackend::Memory),
        _ => None,
    }
}

fn parse_status_codes(value: &str) -> Option<StatusCodeMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "legacy" | "uniform" => Some(StatusCodeMode::Legacy),
        "http" | "strict" => Some(StatusCodeMode::Http),
        _ => None,
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
