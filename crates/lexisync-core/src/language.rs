use std::path::Path;

use crate::error::{LexError, Result};

const EMBEDDED_LANGUAGES: &str = include_str!("../data/supported_languages.md");

/// Allow-list of language codes the dictionary source can be queried in.
///
/// The list is a markdown document where each supported code appears
/// fenced as ```` ```code``` ````.
#[derive(Debug, Clone)]
pub struct SupportedLanguages {
    document: String,
}

impl SupportedLanguages {
    /// The list shipped with the crate
    pub fn embedded() -> Self {
        Self::from_document(EMBEDDED_LANGUAGES)
    }

    pub fn from_document(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading supported languages from {}", path.display());
        let document = std::fs::read_to_string(path)?;
        Ok(Self::from_document(document))
    }

    /// Embedded list unless a file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::embedded()),
        }
    }

    pub fn contains(&self, language: &str) -> bool {
        let code = language.trim().to_lowercase();
        !code.is_empty() && self.document.contains(&format!("```{code}```"))
    }

    pub fn check(&self, language: &str) -> Result<()> {
        tracing::debug!("Checking the validity of \"{}\"", language);
        if self.contains(language) {
            Ok(())
        } else {
            Err(LexError::UnsupportedLanguage {
                language: language.to_string(),
            })
        }
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn embedded_list_contains_english() {
        assert!(SupportedLanguages::embedded().check("en").is_ok());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(SupportedLanguages::embedded().contains("EN"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let error = SupportedLanguages::embedded().check("invalid").unwrap_err();
        assert!(matches!(
            error,
            LexError::UnsupportedLanguage { ref language } if language == "invalid"
        ));
    }

    #[test]
    fn partial_code_does_not_match() {
        let languages = SupportedLanguages::from_document("```en```");
        assert!(!languages.contains("e"));
        assert!(!languages.contains(""));
    }

    #[test]
    fn list_can_be_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Only ```xx``` here").unwrap();

        let languages = SupportedLanguages::load(Some(file.path())).unwrap();
        assert!(languages.contains("xx"));
        assert!(!languages.contains("en"));
    }
}
