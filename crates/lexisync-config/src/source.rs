use std::env;

use serde::{Deserialize, Serialize};

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.83 Safari/537.36".to_string()
}

fn default_consent_prefix() -> String {
    "YES+cb.20220219-22-p0.en-US+FX+".to_string()
}

/// Settings for the dictionary page fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Fixed part of the consent cookie, a random number is appended per request
    #[serde(default = "default_consent_prefix")]
    pub consent_prefix: String,
    /// Allow-list document to use instead of the embedded one
    pub languages_path: Option<String>,
}

impl SourceConfig {
    pub fn new() -> Self {
        Self {
            search_url: env::var("SEARCH_URL").unwrap_or_else(|_| default_search_url()),
            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent()),
            consent_prefix: default_consent_prefix(),
            languages_path: env::var("SUPPORTED_LANGUAGES_PATH").ok(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            user_agent: default_user_agent(),
            consent_prefix: default_consent_prefix(),
            languages_path: None,
        }
    }
}
