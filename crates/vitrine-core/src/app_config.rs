use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the commerce backend's storefront API.
    pub storefront_api_url: String,
    /// Bearer token sent as `X-Storefront-Token` on every backend request.
    pub storefront_api_token: String,
    /// Locale used when a request names none or an unknown one.
    pub default_locale: String,
    pub locales_path: PathBuf,
    /// Seconds after which a generated page is considered stale and eligible
    /// for background regeneration.
    pub revalidate_secs: u64,
    pub fetch_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_retry_backoff_base_ms: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("storefront_api_url", &self.storefront_api_url)
            .field("storefront_api_token", &"[redacted]")
            .field("default_locale", &self.default_locale)
            .field("locales_path", &self.locales_path)
            .field("revalidate_secs", &self.revalidate_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_max_retries", &self.fetch_max_retries)
            .field(
                "fetch_retry_backoff_base_ms",
                &self.fetch_retry_backoff_base_ms,
            )
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
