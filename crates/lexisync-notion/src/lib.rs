mod client;
mod memory;
mod store;
mod template;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

pub use client::NotionClient;
pub use memory::{MemoryEntry, MemoryStore};
pub use store::{EntryProperties, EntryStore, RemoteEntry, RichText, Tag};
pub use template::compose_informations;

use lexisync_core::{LexError, Result};
use lexisync_types::LexicalRecord;

/// Replace whatever the store holds for the record's word with a single,
/// fully populated entry. Returns the id of that entry.
///
/// Stale entries are matched by word prefix and purged one by one before
/// the new entry is created. A failure at any step aborts the sync and
/// leaves the store as it was at that point.
pub async fn sync<S>(store: &S, record: &LexicalRecord) -> Result<String>
where
    S: EntryStore + ?Sized,
{
    let word = record.word.as_str();
    if record.is_empty() {
        return Err(LexError::EmptyRecord {
            word: word.to_string(),
        });
    }

    tracing::debug!("Syncing \"{}\"", word);

    let stale = store.query(word).await?;
    for entry in &stale {
        store.delete(&entry.id).await?;
    }
    tracing::debug!("Purged {} stale entr(ies) for \"{}\"", stale.len(), word);

    let mut properties = EntryProperties::from_record(record);
    let created = store.create(&properties).await?;

    let entries = store.query(word).await?;
    let id = resolve_created(&entries, created.as_deref(), word)?;

    let entries = store.query(word).await?;
    let colors = tag_colors(&entries, &id);

    properties.informations = Some(compose_informations(record, &colors));
    store.update(&id, &properties).await?;

    tracing::debug!("Synced \"{}\" into entry {}", word, id);
    Ok(id)
}

/// Pick the entry that was just created, preferring the id the store
/// returned on create over the first query result
fn resolve_created(entries: &[RemoteEntry], created: Option<&str>, word: &str) -> Result<String> {
    let entry = created
        .and_then(|id| entries.iter().find(|e| e.id == id))
        .or_else(|| entries.first())
        .ok_or_else(|| {
            LexError::MalformedResponse(format!("Entry created for \"{word}\" was not found"))
        })?;

    Ok(entry.id.clone())
}

fn tag_colors(entries: &[RemoteEntry], id: &str) -> HashMap<String, String> {
    entries
        .iter()
        .find(|e| e.id == id)
        .map(|entry| {
            entry
                .tags
                .iter()
                .filter_map(|tag| Some((tag.name.clone(), tag.color.clone()?)))
                .collect()
        })
        .unwrap_or_default()
}
