//! Server configuration

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; unset selects the in-memory store
    pub database_url: Option<String>,
    /// Listener address
    pub bind_addr: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// sqlx pool size
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

        if database_url.is_none() && environment != "development" {
            return Err(format!("DATABASE_URL must be set in {environment} environment").into());
        }

        Ok(Self {
            database_url,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}
