use lexisync_core::LexError;

use crate::tasks::TaskItem;

/// Result of one fetch and sync pass
#[derive(Debug)]
pub enum WorkOutcome {
    Synced { item: TaskItem, entry_id: String },
    Failed { item: TaskItem, error: LexError },
}

/// Batch outcome
#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    pub synced: Vec<TaskItem>,
    pub failed: Vec<(TaskItem, LexError)>,
}

impl BatchReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn processed(&self) -> usize {
        self.synced.len() + self.failed.len()
    }

    /// Log and store an outcome
    pub fn record(&mut self, outcome: WorkOutcome) {
        match outcome {
            WorkOutcome::Synced { item, entry_id } => {
                tracing::info!(
                    "The word \"{}\" has successfully been added for the language \"{}\" (entry {})",
                    item.word,
                    item.language,
                    entry_id
                );
                self.synced.push(item);
            }
            WorkOutcome::Failed { item, error } if error.is_domain() => {
                tracing::warn!(
                    "An error has been encountered trying to add the word \"{}\" for the language \"{}\". Error type: {}. Message: {}",
                    item.word,
                    item.language,
                    error.kind(),
                    error
                );
                self.failed.push((item, error));
            }
            WorkOutcome::Failed { item, error } => {
                tracing::error!(
                    "An unexpected error occurred trying to add the word \"{}\" for the language \"{}\". Error type: {}. Message: {}",
                    item.word,
                    item.language,
                    error.kind(),
                    error
                );
                self.failed.push((item, error));
            }
        }

        tracing::info!("Progress: {}/{}", self.processed(), self.total);
    }

    /// Declarations of the synced words, as they appear in the word list
    pub fn synced_declarations(&self) -> Vec<String> {
        self.synced.iter().map(|item| item.declared.clone()).collect()
    }

    pub fn log_summary(&self) {
        tracing::info!(
            "{} word(s) synced, {} failed, {} not processed",
            self.synced.len(),
            self.failed.len(),
            self.total.saturating_sub(self.processed())
        );
    }
}
