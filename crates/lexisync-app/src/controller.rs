use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexisync_core::{DefinitionSource, Result};
use lexisync_notion::EntryStore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::status::{BatchReport, WorkOutcome};
use crate::tasks::TaskItem;

/// Centralized channel management
pub struct ChannelSet {
    pub jobs: (AsyncSender<TaskItem>, AsyncReceiver<TaskItem>),
    pub outcomes: (AsyncSender<WorkOutcome>, AsyncReceiver<WorkOutcome>),
}

impl ChannelSet {
    pub fn new(workers: usize) -> Self {
        Self {
            jobs: kanal::bounded_async(workers * 2),
            outcomes: kanal::unbounded_async(),
        }
    }
}

/// Fixed-size pool running fetch and sync passes over a word list
pub struct BatchController {
    source: Arc<dyn DefinitionSource>,
    store: Arc<dyn EntryStore>,
    workers: usize,
    cancel_token: CancellationToken,
}

impl BatchController {
    pub fn new(
        source: Arc<dyn DefinitionSource>,
        store: Arc<dyn EntryStore>,
        workers: usize,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            source,
            store,
            workers: workers.max(1),
            cancel_token,
        }
    }

    /// Process every item and collect the outcomes. Stops handing out new
    /// items once the cancel token fires.
    pub async fn run(&self, items: Vec<TaskItem>) -> BatchReport {
        let mut report = BatchReport::new(items.len());
        if items.is_empty() {
            return report;
        }

        tracing::debug!(
            "Starting {} worker(s) for {} word(s)",
            self.workers,
            items.len()
        );

        let ChannelSet { jobs, outcomes } = ChannelSet::new(self.workers);
        let mut tasks = self.spawn_tasks(items, jobs, outcomes.0);

        while let Ok(outcome) = outcomes.1.recv().await {
            report.record(outcome);
        }

        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                tracing::error!("worker task panicked: {e}");
            }
        }

        if self.cancel_token.is_cancelled() && report.processed() < report.total {
            tracing::warn!("Batch cancelled before every word was processed");
        }

        report
    }

    fn spawn_tasks(
        &self,
        items: Vec<TaskItem>,
        jobs: (AsyncSender<TaskItem>, AsyncReceiver<TaskItem>),
        outcome_tx: AsyncSender<WorkOutcome>,
    ) -> JoinSet<()> {
        let mut tasks = JoinSet::new();
        let (job_tx, job_rx) = jobs;

        for worker_id in 0..self.workers {
            tasks.spawn(worker(
                worker_id,
                job_rx.clone(),
                outcome_tx.clone(),
                self.source.clone(),
                self.store.clone(),
                self.cancel_token.child_token(),
            ));
        }

        // Feeder
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            for item in items {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    sent = job_tx.send(item) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        tasks
    }
}

async fn worker(
    worker_id: usize,
    jobs: AsyncReceiver<TaskItem>,
    outcomes: AsyncSender<WorkOutcome>,
    source: Arc<dyn DefinitionSource>,
    store: Arc<dyn EntryStore>,
    cancel: CancellationToken,
) {
    loop {
        let item = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            received = jobs.recv() => match received {
                Ok(item) => item,
                Err(_) => break,
            },
        };

        let span = tracing::info_span!(
            "word",
            worker = worker_id,
            word = %item.word,
            language = %item.language
        );
        let outcome = process(item, source.as_ref(), store.as_ref())
            .instrument(span)
            .await;

        if outcomes.send(outcome).await.is_err() {
            break;
        }
    }

    tracing::debug!("Worker {} stopping", worker_id);
}

/// One full pass for a single word
pub async fn process(
    item: TaskItem,
    source: &dyn DefinitionSource,
    store: &dyn EntryStore,
) -> WorkOutcome {
    match fetch_and_sync(&item, source, store).await {
        Ok(entry_id) => WorkOutcome::Synced { item, entry_id },
        Err(error) => WorkOutcome::Failed { item, error },
    }
}

async fn fetch_and_sync(
    item: &TaskItem,
    source: &dyn DefinitionSource,
    store: &dyn EntryStore,
) -> Result<String> {
    let record = source.fetch(&item.word, &item.language).await?;
    lexisync_notion::sync(store, &record).await
}
