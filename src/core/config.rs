use std::env;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the PostgreSQL pool.
///
/// `url` wins when present; otherwise the discrete parts are assembled into
/// connect options with TLS disabled.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        Ok(Self { host, port })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_HOST: &'static str = "localhost";
    const DEFAULT_PORT: u16 = 5433;
    const DEFAULT_USER: &'static str = "postgres";
    const DEFAULT_NAME: &'static str = "threads";

    // Pool defaults (conservative for a small service)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        let host = env::var("DB_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = env::var("DB_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| "DB_PORT must be a valid port number".to_string())?;
        let username = env::var("DB_USER").unwrap_or_else(|_| Self::DEFAULT_USER.to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_default();
        let database = env::var("DB_NAME").unwrap_or_else(|_| Self::DEFAULT_NAME.to_string());

        let max_connections = parse_or("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?;
        let min_connections = parse_or("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?;
        let acquire_timeout_secs =
            parse_or("DB_ACQUIRE_TIMEOUT_SECS", Self::DEFAULT_ACQUIRE_TIMEOUT_SECS)?;
        let idle_timeout_secs = parse_or("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?;
        let max_lifetime_secs = parse_or("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?;

        Ok(Self {
            url,
            host,
            port,
            username,
            password,
            database,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }

    /// Build connect options from either the URL or the discrete parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse::<PgConnectOptions>();
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable))
    }

    /// Target description safe for logs (no credentials).
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) => url.split('@').next_back().unwrap_or("***").to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Threadboard API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Discussion threads and messages".to_string());

        Self {
            title,
            version,
            description,
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_database_config() -> DatabaseConfig {
        DatabaseConfig {
            url: None,
            host: "db.internal".to_string(),
            port: 5433,
            username: "postgres".to_string(),
            password: "secret".to_string(),
            database: "threads".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_connect_options_from_parts() {
        let config = sample_database_config();
        let options = config.connect_options().unwrap();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "postgres");
        assert_eq!(options.get_database(), Some("threads"));
    }

    #[test]
    fn test_connect_options_prefers_url() {
        let config = DatabaseConfig {
            url: Some("postgres://app:pw@pg.example.com:6543/forum".to_string()),
            ..sample_database_config()
        };
        let options = config.connect_options().unwrap();

        assert_eq!(options.get_host(), "pg.example.com");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("forum"));
    }

    #[test]
    fn test_connect_options_rejects_bad_url() {
        let config = DatabaseConfig {
            url: Some("not a url".to_string()),
            ..sample_database_config()
        };
        assert!(config.connect_options().is_err());
    }

    #[test]
    fn test_display_target_hides_credentials() {
        let config = DatabaseConfig {
            url: Some("postgres://app:pw@pg.example.com:6543/forum".to_string()),
            ..sample_database_config()
        };
        assert_eq!(config.display_target(), "pg.example.com:6543/forum");
        assert_eq!(
            sample_database_config().display_target(),
            "db.internal:5433/threads"
        );
    }
}
