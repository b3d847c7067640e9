use std::collections::HashMap;

use async_trait::async_trait;
use lexisync_core::{LexError, Result};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::store::{EntryProperties, EntryStore, RemoteEntry, RichText, Tag};

const TAG_COLORS: [&str; 9] = [
    "blue", "green", "orange", "pink", "purple", "red", "yellow", "brown", "gray",
];

/// In-process store, used for dry runs
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    entries: Vec<MemoryEntry>,
    next_id: u64,
    /// Colors are assigned per tag name, once, like database select options
    tag_colors: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryEntry {
    pub id: String,
    pub word: String,
    pub tags: Vec<Tag>,
    pub informations: Vec<RichText>,
}

impl MemoryState {
    fn color_for(&mut self, name: &str) -> String {
        let assigned = self.tag_colors.len();
        self.tag_colors
            .entry(name.to_string())
            .or_insert_with(|| TAG_COLORS[assigned % TAG_COLORS.len()].to_string())
            .clone()
    }

    fn tags_for(&mut self, labels: &[String]) -> Vec<Tag> {
        labels
            .iter()
            .map(|name| Tag {
                name: name.clone(),
                color: Some(self.color_for(name)),
            })
            .collect()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry directly, bypassing the sync protocol
    pub async fn insert(&self, word: &str, labels: &[&str]) -> String {
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        let properties = EntryProperties {
            word: word.to_string(),
            parts_of_speech: labels,
            informations: None,
        };
        self.create_entry(&properties).await
    }

    pub async fn entries(&self) -> Vec<MemoryEntry> {
        self.state.lock().await.entries.clone()
    }

    pub async fn entry(&self, id: &str) -> Option<MemoryEntry> {
        self.state
            .lock()
            .await
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn create_entry(&self, properties: &EntryProperties) -> String {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let id = format!("memory-{}", state.next_id);
        let tags = state.tags_for(&properties.parts_of_speech);

        state.entries.push(MemoryEntry {
            id: id.clone(),
            word: properties.word.clone(),
            tags,
            informations: properties.informations.clone().unwrap_or_default(),
        });

        id
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn query(&self, word: &str) -> Result<Vec<RemoteEntry>> {
        let state = self.state.lock().await;
        Ok(state
            .entries
            .iter()
            .filter(|e| !e.word.is_empty() && e.word.starts_with(word))
            .map(|e| RemoteEntry {
                id: e.id.clone(),
                word: e.word.clone(),
                tags: e.tags.clone(),
            })
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.state.lock().await.entries.retain(|e| e.id != id);
        Ok(())
    }

    async fn create(&self, properties: &EntryProperties) -> Result<Option<String>> {
        Ok(Some(self.create_entry(properties).await))
    }

    async fn update(&self, id: &str, properties: &EntryProperties) -> Result<()> {
        let mut state = self.state.lock().await;
        let tags = state.tags_for(&properties.parts_of_speech);

        let entry = state
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LexError::MalformedResponse(format!("No entry with id {id}")))?;

        entry.word = properties.word.clone();
        entry.tags = tags;
        if let Some(informations) = &properties.informations {
            entry.informations = informations.clone();
        }

        Ok(())
    }
}
