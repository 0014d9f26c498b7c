use hr_client::ClientConfig;
use std::path::PathBuf;
use std::str::FromStr;

use super::SessionContext;

/// Tracker configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HR_API_URL | http://localhost:8000/api/v1 | HR service base URL |
/// | HR_API_TOKEN | - | Bearer token |
/// | REQUEST_TIMEOUT_MS | 30000 | Request timeout (ms) |
/// | WORK_DIR | ./.hr-tracker | Draft storage directory |
/// | CATALOG_FILE | - | JSON catalog replacing the built-in tables |
/// | SESSION_ROLE | HR_OFFICER | Role of the operator |
/// | SESSION_BRANCH | HQ | Branch of the operator |
/// | HOLIDAY_COUNTRY | KE | Country for the holiday calendar |
/// | EXCLUDED_WEEKDAYS | 0 | Non-working weekdays, 0 = Sunday ... 6 = Saturday |
/// | DOCUMENT_ALERT_DAYS | 60 | Expiring documents/certifications window |
/// | CONTRACT_ALERT_DAYS | 60 | Expiring contracts window |
/// | PROBATION_ALERT_DAYS | 30 | Probation completions window |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | - | Rolling log file directory |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// HR_API_URL=http://10.0.0.5:8000/api/v1 SESSION_BRANCH=MSA cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_ms: u64,
    /// Working directory, holds the draft store
    pub work_dir: String,
    pub catalog_file: Option<String>,
    pub session_role: String,
    pub session_branch: String,
    pub holiday_country: String,
    pub excluded_weekdays: Vec<u32>,
    pub document_alert_days: u32,
    pub contract_alert_days: u32,
    pub probation_alert_days: u32,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a comma separated weekday list; out-of-range entries are dropped
pub fn parse_weekdays(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|d| d.trim().parse::<u32>().ok())
        .filter(|d| *d <= 6)
        .collect()
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("HR_API_URL")
                .unwrap_or_else(|_| hr_client::config::DEFAULT_BASE_URL.into()),
            api_token: env_opt("HR_API_TOKEN"),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30000),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./.hr-tracker".into()),
            catalog_file: env_opt("CATALOG_FILE"),
            session_role: std::env::var("SESSION_ROLE").unwrap_or_else(|_| "HR_OFFICER".into()),
            session_branch: std::env::var("SESSION_BRANCH").unwrap_or_else(|_| "HQ".into()),
            holiday_country: std::env::var("HOLIDAY_COUNTRY").unwrap_or_else(|_| "KE".into()),
            excluded_weekdays: std::env::var("EXCLUDED_WEEKDAYS")
                .map(|v| parse_weekdays(&v))
                .unwrap_or_else(|_| vec![0]),
            document_alert_days: env_or("DOCUMENT_ALERT_DAYS", 60),
            contract_alert_days: env_or("CONTRACT_ALERT_DAYS", 60),
            probation_alert_days: env_or("PROBATION_ALERT_DAYS", 30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: env_opt("LOG_DIR"),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(work_dir: impl Into<String>, api_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.api_url = api_url.into();
        config
    }

    /// Directory holding the draft store
    pub fn drafts_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("drafts")
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url).with_timeout_ms(self.request_timeout_ms);
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }

    pub fn session(&self) -> SessionContext {
        SessionContext::new(&self.session_role, &self.session_branch)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(parse_weekdays("0"), vec![0]);
        assert_eq!(parse_weekdays("0, 6"), vec![0, 6]);
        assert_eq!(parse_weekdays("0,7,x,3"), vec![0, 3]);
        assert!(parse_weekdays("").is_empty());
    }

    #[test]
    fn test_overrides_and_derived_values() {
        let config = Config::with_overrides("/tmp/hr", "http://hr.local/api/v1");
        assert_eq!(config.work_dir, "/tmp/hr");
        assert_eq!(config.drafts_dir(), PathBuf::from("/tmp/hr/drafts"));

        let client = config.client_config();
        assert_eq!(client.base_url, "http://hr.local/api/v1");
        assert_eq!(client.timeout_ms, config.request_timeout_ms);
    }
}
