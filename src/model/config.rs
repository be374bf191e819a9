const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Application configuration
///
/// Read once at process start and treated as immutable for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API credential. A missing credential does not prevent
    /// startup; triage requests are rejected until it is set.
    pub api_key: Option<String>,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Self {
            api_key,
            port,
            host,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
