use async_trait::async_trait;
use lexisync_core::Result;
use lexisync_types::LexicalRecord;
use serde::{Deserialize, Serialize};

/// Destination of synced words
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Entries whose word starts with `word`
    async fn query(&self, word: &str) -> Result<Vec<RemoteEntry>>;

    async fn delete(&self, id: &str) -> Result<()>;

    /// Create an entry, returning its id when the store reports one
    async fn create(&self, properties: &EntryProperties) -> Result<Option<String>>;

    async fn update(&self, id: &str, properties: &EntryProperties) -> Result<()>;
}

/// Entry as read back from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub id: String,
    pub word: String,
    pub tags: Vec<Tag>,
}

/// Part of speech tag with the color the store assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: Option<String>,
}

/// Properties written to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryProperties {
    pub word: String,
    pub parts_of_speech: Vec<String>,
    pub informations: Option<Vec<RichText>>,
}

impl EntryProperties {
    pub fn from_record(record: &LexicalRecord) -> Self {
        Self {
            word: record.word.clone(),
            parts_of_speech: record.labels().map(str::to_string).collect(),
            informations: None,
        }
    }
}

/// Styled text segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub content: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    pub color: Option<String>,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
            italic: false,
            color: None,
        }
    }

    pub fn bold(content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            bold: true,
            color: Some(color.into()),
            ..Self::plain(content)
        }
    }

    pub fn italic(content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            italic: true,
            color: Some(color.into()),
            ..Self::plain(content)
        }
    }

    pub fn is_styled(&self) -> bool {
        self.bold || self.italic || self.color.is_some()
    }
}
