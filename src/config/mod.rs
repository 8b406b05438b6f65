#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_duration, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const GITHUB_ACCOUNT_VAR: &str = "PORTFOLIO_GITHUB_ACCOUNT";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub data_store: DataStoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub account: String,
    pub api_base: String,
    pub api_version: String,
    pub per_page: u32,
    pub sort: String,
    pub cache_ttl_seconds: u64,
    pub page_size: usize,
    pub timeout_seconds: Option<u64>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            account: "kichwee".to_string(),
            api_base: "https://api.github.com".to_string(),
            api_version: "2022-11-28".to_string(),
            per_page: 100,
            sort: "updated".to_string(),
            cache_ttl_seconds: 300,
            page_size: 6,
            timeout_seconds: None,
        }
    }
}

impl GitHubConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Hosted database connection. Both values may be missing; the contact
/// flow then refuses to submit instead of failing at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataStoreConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub table: String,
}

impl Default for DataStoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            table: "contacts".to_string(),
        }
    }
}

impl DataStoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
            ..Self::default()
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(SUPABASE_URL_VAR) {
            self.url = Some(url);
        }
        if let Some(key) = non_empty_env(SUPABASE_ANON_KEY_VAR) {
            self.anon_key = Some(key);
        }
    }

    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.url) && present(&self.anon_key)
    }

    pub fn warn_if_unconfigured(&self) {
        if !self.is_configured() {
            tracing::warn!(
                "[data_store] Missing {} or {}. Contact submissions are disabled until both are set.",
                SUPABASE_URL_VAR,
                SUPABASE_ANON_KEY_VAR
            );
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let mut config: AppConfig =
            toml::from_str(&processed).map_err(|e| PortfolioError::ConfigParse {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.drop_unresolved_placeholders();
        Ok(config)
    }

    /// Environment values win over whatever the file said.
    pub fn apply_env_overrides(&mut self) {
        if let Some(account) = non_empty_env(GITHUB_ACCOUNT_VAR) {
            self.github.account = account;
        }
        self.data_store.apply_env_overrides();
    }

    // ${VAR} -> value; unknown variables are left in place.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    // A data store value still reading "${...}" means the variable was unset.
    fn drop_unresolved_placeholders(&mut self) {
        let unresolved = |v: &Option<String>| {
            v.as_deref()
                .is_some_and(|s| ENV_PLACEHOLDER.is_match(s) || s.trim().is_empty())
        };
        if unresolved(&self.data_store.url) {
            self.data_store.url = None;
        }
        if unresolved(&self.data_store.anon_key) {
            self.data_store.anon_key = None;
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("github.account", &self.github.account)?;
        validate_url("github.api_base", &self.github.api_base)?;
        validate_non_empty_string("github.api_version", &self.github.api_version)?;
        validate_range("github.per_page", self.github.per_page, 1, 100)?;
        validate_positive_duration("github.cache_ttl_seconds", self.github.cache_ttl())?;
        validate_range("github.page_size", self.github.page_size, 1, 100)?;

        let valid_sorts = ["created", "updated", "pushed", "full_name"];
        if !valid_sorts.contains(&self.github.sort.as_str()) {
            return Err(PortfolioError::InvalidConfigValue {
                field: "github.sort".to_string(),
                value: self.github.sort.clone(),
                reason: format!("Unsupported sort. Valid values: {}", valid_sorts.join(", ")),
            });
        }

        // An unconfigured store is allowed; a configured one must be usable.
        if let Some(url) = &self.data_store.url {
            validate_url("data_store.url", url)?;
        }
        validate_non_empty_string("data_store.table", &self.data_store.table)?;

        Ok(())
    }
}
