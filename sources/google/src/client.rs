use async_trait::async_trait;
use lexisync_config::source::SourceConfig;
use lexisync_core::{DefinitionSource, LexError, Result, SourceMetadata, SupportedLanguages};
use lexisync_types::LexicalRecord;
use rand::Rng;

use crate::parser::parse_page;

/// Dictionary card scraper for the Google search result page
#[derive(Clone)]
pub struct GoogleDictionary {
    client: reqwest::Client,
    config: SourceConfig,
    languages: SupportedLanguages,
}

impl GoogleDictionary {
    pub fn new(
        client: reqwest::Client,
        config: SourceConfig,
        languages: SupportedLanguages,
    ) -> Self {
        Self {
            client,
            config,
            languages,
        }
    }

    /// Consent cookie that keeps the cookie banner from replacing the page
    pub fn consent_cookie(&self) -> String {
        let suffix: u16 = rand::thread_rng().gen_range(100..=900);
        format!("CONSENT={}{};", self.config.consent_prefix, suffix)
    }

    /// Build the `define` query for a word
    pub fn request(&self, word: &str, language: &str) -> reqwest::RequestBuilder {
        let query = format!("define {}", word.to_lowercase());
        let language = language.to_lowercase();

        self.client
            .get(&self.config.search_url)
            .query(&[("hl", language.as_str()), ("q", query.as_str()), ("num", "1")])
            .header(reqwest::header::COOKIE, self.consent_cookie())
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
    }

    async fn get_page(&self, word: &str, language: &str) -> Result<String> {
        tracing::debug!("Fetching web data for \"{}\" in \"{}\"", word, language);

        let response = self
            .request(word, language)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[async_trait]
impl DefinitionSource for GoogleDictionary {
    async fn fetch(&self, word: &str, language: &str) -> Result<LexicalRecord> {
        self.languages.check(language)?;

        let html = self.get_page(word, language).await?;
        let record = parse_page(&html, word, language)?;

        if record.is_empty() {
            return Err(LexError::EmptyRecord { word: record.word });
        }

        Ok(record)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Google Dictionary".to_string(),
            requires_network: true,
        }
    }
}
