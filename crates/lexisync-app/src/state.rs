use std::path::Path;
use std::time::Duration;

use lexisync_config::Config;
use lexisync_core::SupportedLanguages;
use lexisync_notion::NotionClient;
use lexisync_source_google::GoogleDictionary;

/// Everything a pass needs, built once and shared by the workers
pub struct AppContext {
    pub config: Config,
    pub http: reqwest::Client,
    pub languages: SupportedLanguages,
}

impl AppContext {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let languages_path = config.source.languages_path.as_deref().map(Path::new);
        let languages = SupportedLanguages::load(languages_path)?;

        Ok(Self {
            config,
            http,
            languages,
        })
    }

    pub fn source(&self) -> GoogleDictionary {
        GoogleDictionary::new(
            self.http.clone(),
            self.config.source.clone(),
            self.languages.clone(),
        )
    }

    pub fn notion(&self) -> anyhow::Result<NotionClient> {
        let notion = &self.config.notion;
        if notion.database_id.is_empty() {
            anyhow::bail!("DATABASE_ID is not set, add it to .env or the environment");
        }
        if notion.token.is_empty() {
            anyhow::bail!("NOTION_TOKEN is not set, add it to .env or the environment");
        }

        Ok(NotionClient::new(self.http.clone(), notion.clone()))
    }
}
