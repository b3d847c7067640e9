use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lexisync_core::{LexError, Result, prettify};

/// One word to look up, as declared in the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub word: String,
    pub language: String,
    /// Word exactly as written in the file, used to find its line again
    pub declared: String,
}

impl TaskItem {
    pub fn new(word: &str, language: &str) -> Self {
        Self {
            word: prettify(word),
            language: language.trim().to_lowercase(),
            declared: word.trim().to_string(),
        }
    }
}

/// Parse a `word[,lang]` declaration. Blank lines yield `None`.
pub fn parse_task_line(
    line: &str,
    line_number: usize,
    default_language: &str,
) -> Result<Option<TaskItem>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields: Vec<&str> = line.split(',').collect();
    if let Some(last) = fields.pop().map(str::trim) {
        if !last.is_empty() {
            fields.push(last);
        }
    }

    let malformed = || LexError::MalformedTaskLine {
        line: line_number,
        content: line.trim_end().to_string(),
    };

    let (word, language) = match fields.as_slice() {
        [word] => (*word, default_language),
        [word, language] => (*word, *language),
        _ => return Err(malformed()),
    };

    if word.trim().is_empty() {
        return Err(malformed());
    }

    Ok(Some(TaskItem::new(word, language)))
}

/// Parse every declaration after the header. Malformed lines are logged and
/// skipped.
pub fn parse_tasks(content: &str, header_lines: usize, default_language: &str) -> Vec<TaskItem> {
    let mut items = Vec::new();

    for (index, line) in content.lines().enumerate().skip(header_lines) {
        match parse_task_line(line, index + 1, default_language) {
            Ok(Some(item)) => {
                tracing::debug!("OK {:?}", item);
                items.push(item);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    "An error has been encountered trying to get the words. Error type: {}. Message: {}",
                    e.kind(),
                    e
                );
            }
        }
    }

    tracing::debug!("Found {} word(s)", items.len());
    items
}

pub fn read_tasks(
    path: &Path,
    header_lines: usize,
    default_language: &str,
) -> Result<Vec<TaskItem>> {
    tracing::debug!("Searching for words in {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(parse_tasks(&content, header_lines, default_language))
}

/// Keep the first declaration of every word
pub fn dedup_by_word(items: Vec<TaskItem>) -> Vec<TaskItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let first = seen.insert(item.word.clone());
            if !first {
                tracing::warn!(
                    "Skipping duplicate declaration \"{},{}\", \"{}\" is already declared",
                    item.declared,
                    item.language,
                    item.word
                );
            }
            first
        })
        .collect()
}

/// Drop every non-header line that contains one of `words`
pub fn retain_pending(content: &str, header_lines: usize, words: &[String]) -> String {
    content
        .split_inclusive('\n')
        .enumerate()
        .filter(|(index, line)| {
            *index < header_lines || {
                let line = line.trim_end_matches(['\n', '\r']);
                !words
                    .iter()
                    .any(|word| !word.is_empty() && line.contains(word.as_str()))
            }
        })
        .map(|(_, line)| line)
        .collect()
}

/// Remove the lines of completed words from the word list
pub fn remove_completed(path: &Path, header_lines: usize, words: &[String]) -> Result<()> {
    if words.is_empty() {
        return Ok(());
    }

    tracing::debug!("Deleting {} word(s)", words.len());
    let content = fs::read_to_string(path)?;
    fs::write(path, retain_pending(&content, header_lines, words))?;
    tracing::debug!("Deleted {:?}", words);

    Ok(())
}
