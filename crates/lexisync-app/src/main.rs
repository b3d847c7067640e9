use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use lexisync_config::Config;
use lexisync_core::DefinitionSource;
use lexisync_notion::{EntryStore, MemoryStore};
use tokio::signal;
use tokio_util::sync::CancellationToken;

pub mod cli;
pub mod controller;
pub mod logging;
pub mod state;
pub mod status;
pub mod tasks;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::BatchController;
use self::state::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    let _log_guard = logging::init_tracing(
        &config.log_level,
        config.log_format,
        config.log_file.as_deref().map(Path::new),
    )?;
    tracing::debug!("Start main process");

    let context = AppContext::new(config)?;

    // Ctrl+C stops handing out new words, running passes finish
    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            ctrl_c.cancel();
        }
    });

    let tasks_config = &context.config.tasks;
    let words_path = PathBuf::from(&tasks_config.path);
    let items = tasks::read_tasks(
        &words_path,
        tasks_config.header_lines,
        &tasks_config.default_language,
    )?;
    let items = tasks::dedup_by_word(items);

    if items.is_empty() {
        tracing::info!("No word to process in {}", words_path.display());
        return Ok(());
    }

    let source: Arc<dyn DefinitionSource> = Arc::new(context.source());
    let metadata = source.metadata();
    tracing::debug!(
        "Definition source: {} (network: {})",
        metadata.name,
        metadata.requires_network
    );
    let workers = context.config.workers;

    if cli.dry_run {
        let store = Arc::new(MemoryStore::new());
        let controller = BatchController::new(source, store.clone(), workers, cancel);
        let report = controller.run(items).await;
        report.log_summary();

        println!("{}", serde_json::to_string_pretty(&store.entries().await)?);
        return Ok(());
    }

    let store: Arc<dyn EntryStore> = Arc::new(context.notion()?);
    let controller = BatchController::new(source, store, workers, cancel);
    let report = controller.run(items).await;

    tasks::remove_completed(
        &words_path,
        tasks_config.header_lines,
        &report.synced_declarations(),
    )?;

    report.log_summary();
    tracing::info!("Done!");

    Ok(())
}
