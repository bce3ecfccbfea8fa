use std::time::Duration;

use crate::errors::AppError;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_GENERATE_PATH: &str = "/content-catalyst";
const DEFAULT_CHAT_PATH: &str = "/idea-chat";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 25;

const ENV_BACKEND_URL: &str = "CATALYST_BACKEND_URL";
const ENV_GENERATE_PATH: &str = "CATALYST_GENERATE_PATH";
const ENV_CHAT_PATH: &str = "CATALYST_CHAT_PATH";
const ENV_REQUEST_TIMEOUT_SECS: &str = "CATALYST_REQUEST_TIMEOUT_SECS";

/// Where and how to reach the idea backend. The endpoint paths are
/// configurable because deployments have been observed under more than one
/// route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub generate_path: String,
    pub chat_path: String,
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_owned(),
            generate_path: DEFAULT_GENERATE_PATH.to_owned(),
            chat_path: DEFAULT_CHAT_PATH.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = env_or(ENV_BACKEND_URL, DEFAULT_BACKEND_URL);
        let generate_path = env_or(ENV_GENERATE_PATH, DEFAULT_GENERATE_PATH);
        let chat_path = env_or(ENV_CHAT_PATH, DEFAULT_CHAT_PATH);

        let request_timeout = std::env::var(ENV_REQUEST_TIMEOUT_SECS)
            .ok()
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                let secs = raw.parse::<u64>().map_err(|_| {
                    AppError::Configuration(format!(
                        "{ENV_REQUEST_TIMEOUT_SECS} must be a non-zero number of seconds"
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::Configuration(format!(
                        "{ENV_REQUEST_TIMEOUT_SECS} must be greater than zero"
                    )));
                }
                Ok(Duration::from_secs(secs))
            })
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

        Ok(Self { base_url, generate_path, chat_path, request_timeout })
    }

    /// Joins the base URL and an endpoint path without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let suffix = path.trim_start_matches('/');
        format!("{base}/{suffix}")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}
