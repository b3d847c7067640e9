use std::env;

use serde::{Deserialize, Serialize};

use self::notion::NotionConfig;
use self::source::SourceConfig;
use self::tasks::TasksConfig;

pub mod notion;
pub mod source;
pub mod tasks;

fn default_workers() -> usize {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("logs/lexisync.log".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub notion: NotionConfig,
    pub tasks: TasksConfig,

    /// Number of words processed concurrently
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Timeout applied to every HTTP request, none when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Debug log rotated daily, disabled when `None`
    #[serde(default = "default_log_file")]
    pub log_file: Option<String>,
}

impl Config {
    /// Build the config from the process environment, falling back to defaults
    pub fn new() -> Self {
        let workers = env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or_else(default_workers);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level());

        let log_format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::from_env_value(&v))
            .unwrap_or_default();

        // An empty LOG_FILE turns the file log off
        let log_file = match env::var("LOG_FILE") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(path),
            Err(_) => default_log_file(),
        };

        Config {
            source: SourceConfig::new(),
            notion: NotionConfig::new(),
            tasks: TasksConfig::new(),

            workers,
            request_timeout_secs,
            log_level,
            log_format,
            log_file,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            notion: NotionConfig::default(),
            tasks: TasksConfig::default(),
            workers: default_workers(),
            request_timeout_secs: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            log_file: default_log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_json_case_insensitively() {
        assert_eq!(LogFormat::from_env_value("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value("pretty"), LogFormat::Text);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let json = r#"{
            "source": {},
            "notion": { "database_id": "abc", "token": "secret" },
            "tasks": { "path": "LIST.md" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_file.as_deref(), Some("logs/lexisync.log"));
        assert_eq!(config.tasks.path, "LIST.md");
        assert_eq!(config.tasks.header_lines, 4);
        assert_eq!(config.notion.version, "2022-02-22");
        assert_eq!(config.source.search_url, "https://www.google.com/search");
    }
}
