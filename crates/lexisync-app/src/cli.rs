use std::path::PathBuf;

use clap::Parser;
use lexisync_config::{Config, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "lexisync")]
#[command(about = "Fetches dictionary definitions and syncs them into a Notion database", long_about = None)]
pub struct Cli {
    /// Word list, one `word[,lang]` per line
    #[arg(short = 'w', long = "words")]
    pub words: Option<PathBuf>,
    /// Number of lines at the top of the word list to leave alone
    #[arg(long)]
    pub header_lines: Option<usize>,
    /// Number of words processed concurrently
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,
    /// Supported languages document, overrides the embedded list
    #[arg(long)]
    pub languages: Option<PathBuf>,
    /// Log level, `RUST_LOG` takes precedence
    #[arg(long)]
    pub log_level: Option<String>,
    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
    /// Debug log file, rotated daily
    #[arg(long, conflicts_with = "no_log_file")]
    pub log_file: Option<PathBuf>,
    /// Only log to the console
    #[arg(long)]
    pub no_log_file: bool,
    /// Sync into memory and print the result instead of writing to Notion
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Override config values with the flags that were given
    pub fn apply(&self, config: &mut Config) {
        if let Some(words) = &self.words {
            config.tasks.path = words.display().to_string();
        }
        if let Some(header_lines) = self.header_lines {
            config.tasks.header_lines = header_lines;
        }
        if let Some(workers) = self.workers.filter(|&n| n > 0) {
            config.workers = workers;
        }
        if let Some(languages) = &self.languages {
            config.source.languages_path = Some(languages.display().to_string());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.json_logs {
            config.log_format = LogFormat::Json;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.display().to_string());
        }
        if self.no_log_file {
            config.log_file = None;
        }
    }
}
