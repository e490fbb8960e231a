use std::{env, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    agent::types::FailurePolicy,
    error::{Result, completion_error::CompletionError},
};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_SITE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SITE_NAME: &str = "Agentic AI Demo";
pub const DEFAULT_MODEL: &str = "openai/gpt-4";

/// Connection settings for the OpenRouter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Sent as `HTTP-Referer`.
    pub site_url: String,
    /// Sent as `X-Title`.
    pub site_name: String,
    /// Default per-call timeout for runners driven by this client.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            timeout_secs: 120,
        }
    }

    /// Reads `OPENROUTER_API_KEY`, `YOUR_SITE_URL`, `YOUR_SITE_NAME`,
    /// `OPENROUTER_BASE_URL` and `OPENROUTER_TIMEOUT_SECS`, after loading a
    /// `.env` file when one exists.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_site_name(DEFAULT_SITE_NAME)
    }

    /// Like [`ClientConfig::from_env`], with `site_name` used only when
    /// `YOUR_SITE_NAME` is unset.
    pub fn from_env_with_site_name(site_name: &str) -> Result<Self> {
        load_dotenv();
        Self::from_lookup_with_site_name(|key| env::var(key).ok(), site_name)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_site_name(lookup, DEFAULT_SITE_NAME)
    }

    pub fn from_lookup_with_site_name<F>(lookup: F, site_name: &str) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENROUTER_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(CompletionError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        config.site_name = site_name.to_string();
        if let Some(url) = lookup("YOUR_SITE_URL") {
            config.site_url = url;
        }
        if let Some(name) = lookup("YOUR_SITE_NAME") {
            config.site_name = name;
        }
        if let Some(base) = lookup("OPENROUTER_BASE_URL") {
            config.base_url = base;
        }
        if let Some(secs) = lookup("OPENROUTER_TIMEOUT_SECS") {
            config.timeout_secs = secs
                .parse()
                .ok()
                .filter(|&n: &u64| n > 0)
                .ok_or_else(|| {
                    crate::error::Error::Config(format!(
                        "OPENROUTER_TIMEOUT_SECS must be a positive number of seconds: {secs}"
                    ))
                })?;
        }
        Ok(config)
    }
}

/// Loads `.env` if present. A missing file is normal; a malformed one is
/// reported and otherwise ignored.
fn load_dotenv() {
    if let Some(err) = dotenv_failure(dotenvy::dotenv()) {
        warn!(error = %err, "could not load .env file");
    }
}

fn dotenv_failure(result: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    match result {
        Err(err) if !err.not_found() => Some(err),
        _ => None,
    }
}

/// Knobs for a single `TaskRunner`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub model: String,
    /// Pause between consecutive steps.
    pub step_delay_ms: u64,
    /// Upper bound on each completion call.
    pub call_timeout_secs: u64,
    pub failure_policy: FailurePolicy,
}

impl RunnerConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            step_delay_ms: 1000,
            call_timeout_secs: 120,
            failure_policy: FailurePolicy::default(),
        }
    }
}
