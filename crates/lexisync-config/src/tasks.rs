use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "WORDS.md".to_string()
}

fn default_header_lines() -> usize {
    4
}

fn default_language() -> String {
    "en".to_string()
}

/// Location and layout of the word list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    #[serde(default = "default_path")]
    pub path: String,
    /// Lines at the top of the file that are never parsed nor removed
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,
    /// Language used by lines without one
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl TasksConfig {
    pub fn new() -> Self {
        let header_lines = env::var("WORDS_HEADER_LINES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_header_lines);

        Self {
            path: env::var("WORDS_FILE").unwrap_or_else(|_| default_path()),
            header_lines,
            default_language: env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| default_language()),
        }
    }
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            header_lines: default_header_lines(),
            default_language: default_language(),
        }
    }
}
