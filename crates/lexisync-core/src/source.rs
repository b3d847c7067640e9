use lexisync_types::LexicalRecord;

use crate::error::Result;

/// Provider of dictionary data for a word
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look a word up and extract its lexical record
    async fn fetch(&self, word: &str, language: &str) -> Result<LexicalRecord>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub requires_network: bool,
}
