use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lexisync_core::{DefinitionSource, LexError, Result, SourceMetadata};
use lexisync_notion::{EntryStore, MemoryStore};
use lexisync_types::{LexicalRecord, Sense};
use tokio_util::sync::CancellationToken;

use crate::controller::{BatchController, process};
use crate::status::WorkOutcome;
use crate::tasks::{TaskItem, retain_pending};

/// Source answering from a fixed vocabulary
struct FakeSource {
    calls: AtomicUsize,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl DefinitionSource for FakeSource {
    async fn fetch(&self, word: &str, language: &str) -> Result<LexicalRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if language != "en" {
            return Err(LexError::UnsupportedLanguage {
                language: language.to_string(),
            });
        }
        if word == "Wogewpvgfa" {
            return Err(LexError::WordNotFound {
                word: word.to_string(),
                language: language.to_string(),
            });
        }

        let mut record = LexicalRecord::new(word);
        record
            .part_of_speech_mut("Noun")
            .insert_sense(Sense::new(format!("Meaning of {word}.")));
        Ok(record)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "fake".to_string(),
            requires_network: false,
        }
    }
}

fn items(words: &[(&str, &str)]) -> Vec<TaskItem> {
    words.iter().map(|(w, l)| TaskItem::new(w, l)).collect()
}

#[tokio::test]
async fn process_reports_success_with_entry_id() {
    let store = MemoryStore::new();
    let outcome = process(TaskItem::new("test", "en"), &FakeSource::new(), &store).await;

    match outcome {
        WorkOutcome::Synced { item, entry_id } => {
            assert_eq!(item.word, "Test");
            assert!(store.entry(&entry_id).await.is_some());
        }
        WorkOutcome::Failed { error, .. } => panic!("unexpected failure: {error}"),
    }
}

#[tokio::test]
async fn process_reports_domain_failure() {
    let store = MemoryStore::new();
    let outcome = process(TaskItem::new("wogewpvgfa", "en"), &FakeSource::new(), &store).await;

    assert!(matches!(
        outcome,
        WorkOutcome::Failed { error: LexError::WordNotFound { .. }, .. }
    ));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn batch_records_every_item_without_aborting() {
    let store = Arc::new(MemoryStore::new());
    let source = Arc::new(FakeSource::new());
    let controller = BatchController::new(
        source.clone(),
        store.clone(),
        3,
        CancellationToken::new(),
    );

    let report = controller
        .run(items(&[
            ("test", "en"),
            ("wogewpvgfa", "en"),
            ("chien", "xx"),
            ("run", "en"),
            ("walk", "en"),
        ]))
        .await;

    assert_eq!(report.total, 5);
    assert_eq!(report.synced.len(), 3);
    assert_eq!(report.failed.len(), 2);
    assert_eq!(source.calls.load(Ordering::SeqCst), 5);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn synced_words_leave_the_list_and_failed_words_stay() {
    let content = "header\nheader\ntest\nwogewpvgfa\nrun,en\nchien,xx\n";
    let store = Arc::new(MemoryStore::new());
    let controller = BatchController::new(
        Arc::new(FakeSource::new()),
        store,
        2,
        CancellationToken::new(),
    );

    let report = controller
        .run(crate::tasks::parse_tasks(content, 2, "en"))
        .await;
    let remaining = retain_pending(content, 2, &report.synced_declarations());

    assert_eq!(remaining, "header\nheader\nwogewpvgfa\nchien,xx\n");
}

#[tokio::test]
async fn cancelled_batch_starts_nothing() {
    let store: Arc<dyn EntryStore> = Arc::new(MemoryStore::new());
    let source = Arc::new(FakeSource::new());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let controller = BatchController::new(source.clone(), store, 2, cancel);
    let report = controller.run(items(&[("test", "en"), ("run", "en")])).await;

    assert_eq!(report.processed(), 0);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_batch_returns_empty_report() {
    let controller = BatchController::new(
        Arc::new(FakeSource::new()),
        Arc::new(MemoryStore::new()),
        4,
        CancellationToken::new(),
    );

    let report = controller.run(Vec::new()).await;
    assert_eq!(report.total, 0);
    assert_eq!(report.processed(), 0);
}
