use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_version() -> String {
    "2022-02-22".to_string()
}

fn default_page_size() -> u32 {
    250
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Notion API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Database the word entries live in
    pub database_id: String,
    /// Integration token
    pub token: String,
    /// Pinned `Notion-Version` header
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl NotionConfig {
    pub fn new() -> Self {
        let token = env::var("NOTION_TOKEN")
            .or_else(|_| env::var("TOKEN"))
            .unwrap_or_default();

        Self {
            api_url: env::var("NOTION_API_URL").unwrap_or_else(|_| default_api_url()),
            database_id: env::var("DATABASE_ID").unwrap_or_default(),
            token,
            version: env::var("NOTION_VERSION").unwrap_or_else(|_| default_version()),
            page_size: default_page_size(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            database_id: String::new(),
            token: String::new(),
            version: default_version(),
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = NotionConfig {
            api_url: "https://api.notion.com/v1/".to_string(),
            ..NotionConfig::default()
        };

        assert_eq!(config.endpoint("pages"), "https://api.notion.com/v1/pages");
    }
}
