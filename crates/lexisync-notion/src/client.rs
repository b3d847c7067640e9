use async_trait::async_trait;
use lexisync_config::notion::NotionConfig;
use lexisync_core::{LexError, Result};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::store::{EntryProperties, EntryStore, RemoteEntry, Tag};
use crate::template::{create_payload, query_payload, update_payload};

/// Notion database client
#[derive(Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    config: NotionConfig,
}

impl NotionClient {
    pub fn new(client: reqwest::Client, config: NotionConfig) -> Self {
        Self { client, config }
    }

    pub fn database_id(&self) -> &str {
        &self.config.database_id
    }

    /// Attach the bearer token and the pinned API version
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.config.token)
            .header("Notion-Version", &self.config.version)
    }

    fn query_request(&self, word: &str) -> reqwest::RequestBuilder {
        let url = self
            .config
            .endpoint(&format!("databases/{}/query", self.config.database_id));
        let payload = query_payload(word, self.config.page_size, None);

        self.authorized(self.client.post(url)).json(&payload)
    }
}

#[async_trait]
impl EntryStore for NotionClient {
    async fn query(&self, word: &str) -> Result<Vec<RemoteEntry>> {
        tracing::debug!("Querying the database for \"{}\"", word);

        let response = self.query_request(word).send().await?;

        match response.status() {
            StatusCode::BAD_REQUEST => {
                return Err(LexError::InvalidDestinationId {
                    database_id: self.config.database_id.clone(),
                });
            }
            StatusCode::UNAUTHORIZED => return Err(LexError::InvalidCredential),
            _ => {}
        }

        let body: QueryResponse = response
            .error_for_status()?
            .json()
            .await
            .map_err(|e| {
                LexError::MalformedResponse(format!("Failed to parse query response: {e}"))
            })?;

        if body.has_more {
            tracing::debug!(
                "Query for \"{}\" has more than {} results, only the first page is used",
                word,
                self.config.page_size
            );
        }

        Ok(body.results.into_iter().map(RemoteEntry::from).collect())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::debug!("Deleting page {}", id);

        let url = self.config.endpoint(&format!("blocks/{id}"));
        self.authorized(self.client.delete(url))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn create(&self, properties: &EntryProperties) -> Result<Option<String>> {
        tracing::debug!("Creating a page for \"{}\"", properties.word);

        let payload = create_payload(&self.config.database_id, properties);
        let response = self
            .authorized(self.client.post(self.config.endpoint("pages")))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        match response.json::<PageObject>().await {
            Ok(page) => Ok(Some(page.id)),
            Err(e) => {
                tracing::warn!(
                    "Create response for \"{}\" could not be parsed, resolving the entry by query: {}",
                    properties.word,
                    e
                );
                Ok(None)
            }
        }
    }

    async fn update(&self, id: &str, properties: &EntryProperties) -> Result<()> {
        tracing::debug!("Updating page {} for \"{}\"", id, properties.word);

        let url = self.config.endpoint(&format!("pages/{id}"));
        self.authorized(self.client.patch(url))
            .json(&update_payload(properties))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    results: Vec<PageObject>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Deserialize)]
struct PageObject {
    id: String,
    #[serde(default)]
    properties: PageProperties,
}

#[derive(Deserialize, Default)]
struct PageProperties {
    #[serde(rename = "Word", default)]
    word: Option<TitleProperty>,
    #[serde(rename = "Part Of Speech", default)]
    part_of_speech: Option<MultiSelectProperty>,
}

#[derive(Deserialize)]
struct TitleProperty {
    #[serde(default)]
    title: Vec<TextObject>,
}

#[derive(Deserialize)]
struct TextObject {
    #[serde(default)]
    plain_text: String,
}

#[derive(Deserialize)]
struct MultiSelectProperty {
    #[serde(default)]
    multi_select: Vec<SelectOption>,
}

#[derive(Deserialize)]
struct SelectOption {
    name: String,
    color: Option<String>,
}

impl From<PageObject> for RemoteEntry {
    fn from(page: PageObject) -> Self {
        let word = page
            .properties
            .word
            .map(|title| title.title.into_iter().map(|t| t.plain_text).collect())
            .unwrap_or_default();

        let tags = page
            .properties
            .part_of_speech
            .map(|pos| {
                pos.multi_select
                    .into_iter()
                    .map(|option| Tag {
                        name: option.name,
                        color: option.color,
                    })
                    .collect()
            })
            .unwrap_or_default();

        RemoteEntry {
            id: page.id,
            word,
            tags,
        }
    }
}
