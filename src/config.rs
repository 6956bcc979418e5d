use std::env;
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.harvestapp.com/v2";

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub access_token: Option<String>,
    pub account_id: Option<String>,
    // Legacy (v1) account subdomain and Basic auth credentials
    pub legacy_account: Option<String>,
    // Overrides https://{legacy_account}.harvestapp.com
    pub legacy_url: Option<String>,
    pub legacy_email: Option<String>,
    pub legacy_password: Option<String>,
    pub user_agent: String,
    pub http_timeout_ms: u64,
    // 0 disables retries entirely
    pub http_max_retries: u32,
    pub http_retry_backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            account_id: None,
            legacy_account: None,
            legacy_url: None,
            legacy_email: None,
            legacy_password: None,
            user_agent: format!("harvest-api/{}", env!("CARGO_PKG_VERSION")),
            http_timeout_ms: 30_000,
            http_max_retries: 0,
            http_retry_backoff_ms: 500,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let get = |k: &str| env::var(k).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_url = get("HARVEST_API_URL").unwrap_or(defaults.api_url);
        let access_token = get("HARVEST_ACCESS_TOKEN");
        let account_id = get("HARVEST_ACCOUNT_ID");
        let legacy_account = get("HARVEST_LEGACY_ACCOUNT");
        let legacy_url = get("HARVEST_LEGACY_URL");
        let legacy_email = get("HARVEST_EMAIL");
        let legacy_password = get("HARVEST_PASSWORD");
        let user_agent = get("HARVEST_USER_AGENT").unwrap_or(defaults.user_agent);
        let http_timeout_ms: u64 = get("HARVEST_HTTP_TIMEOUT_MS").and_then(|s| s.parse().ok()).unwrap_or(defaults.http_timeout_ms);
        let http_max_retries: u32 = get("HARVEST_HTTP_MAX_RETRIES").and_then(|s| s.parse().ok()).unwrap_or(defaults.http_max_retries);
        let http_retry_backoff_ms: u64 = get("HARVEST_HTTP_RETRY_BACKOFF_MS").and_then(|s| s.parse().ok()).unwrap_or(defaults.http_retry_backoff_ms);

        Self {
            api_url,
            access_token,
            account_id,
            legacy_account,
            legacy_url,
            legacy_email,
            legacy_password,
            user_agent,
            http_timeout_ms,
            http_max_retries,
            http_retry_backoff_ms,
        }
    }

    /// Base URI of the legacy API: explicit override, else the account subdomain.
    pub fn legacy_base_url(&self) -> Option<String> {
        self.legacy_url
            .clone()
            .or_else(|| self.legacy_account.as_ref().map(|a| format!("https://{}.harvestapp.com", a)))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("access_token", &redact(&self.access_token))
            .field("account_id", &self.account_id)
            .field("legacy_account", &self.legacy_account)
            .field("legacy_url", &self.legacy_url)
            .field("legacy_email", &self.legacy_email)
            .field("legacy_password", &redact(&self.legacy_password))
            .field("user_agent", &self.user_agent)
            .field("http_timeout_ms", &self.http_timeout_ms)
            .field("http_max_retries", &self.http_max_retries)
            .field("http_retry_backoff_ms", &self.http_retry_backoff_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_base_url_prefers_override() {
        let mut cfg = Config { legacy_account: Some("acme".into()), ..Config::default() };
        assert_eq!(cfg.legacy_base_url().as_deref(), Some("https://acme.harvestapp.com"));
        cfg.legacy_url = Some("http://127.0.0.1:9999".into());
        assert_eq!(cfg.legacy_base_url().as_deref(), Some("http://127.0.0.1:9999"));
    }

    const VARS: &[&str] = &[
        "HARVEST_API_URL",
        "HARVEST_ACCESS_TOKEN",
        "HARVEST_ACCOUNT_ID",
        "HARVEST_LEGACY_ACCOUNT",
        "HARVEST_LEGACY_URL",
        "HARVEST_EMAIL",
        "HARVEST_PASSWORD",
        "HARVEST_USER_AGENT",
        "HARVEST_HTTP_TIMEOUT_MS",
        "HARVEST_HTTP_MAX_RETRIES",
        "HARVEST_HTTP_RETRY_BACKOFF_MS",
    ];

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn clear_env() {
        for k in VARS {
            env::remove_var(k);
        }
    }

    #[test]
    fn from_env_reads_values_and_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let cfg = Config::from_env();
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert!(cfg.access_token.is_none());
        assert!(cfg.legacy_base_url().is_none());
        assert_eq!(cfg.http_timeout_ms, 30_000);
        assert_eq!(cfg.http_max_retries, 0);
        assert_eq!(cfg.http_retry_backoff_ms, 500);
        assert!(cfg.user_agent.starts_with("harvest-api/"));

        env::set_var("HARVEST_ACCESS_TOKEN", "tok");
        env::set_var("HARVEST_ACCOUNT_ID", "  ");
        env::set_var("HARVEST_LEGACY_ACCOUNT", "acme");
        env::set_var("HARVEST_API_URL", "");
        env::set_var("HARVEST_HTTP_MAX_RETRIES", "3");
        env::set_var("HARVEST_HTTP_TIMEOUT_MS", "soon");
        env::set_var("HARVEST_HTTP_RETRY_BACKOFF_MS", "-5");
        let cfg = Config::from_env();
        clear_env();

        assert_eq!(cfg.access_token.as_deref(), Some("tok"));
        assert!(cfg.account_id.is_none(), "blank values count as unset");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.legacy_base_url().as_deref(), Some("https://acme.harvestapp.com"));
        assert_eq!(cfg.http_max_retries, 3);
        assert_eq!(cfg.http_timeout_ms, 30_000);
        assert_eq!(cfg.http_retry_backoff_ms, 500);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let cfg = Config {
            access_token: Some("tok-123".into()),
            legacy_password: Some("hunter2".into()),
            ..Config::default()
        };
        let out = format!("{:?}", cfg);
        assert!(!out.contains("tok-123"));
        assert!(!out.contains("hunter2"));
        assert!(out.contains("<redacted>"));
    }
}
