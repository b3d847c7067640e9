/// Errors raised while looking a word up or syncing it
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("Language \"{language}\" is not supported, check the supported languages list")]
    UnsupportedLanguage { language: String },

    #[error("Word \"{word}\" was not found for language \"{language}\", check its spelling")]
    WordNotFound { word: String, language: String },

    #[error("Word \"{word}\" has no part of speech on the dictionary page")]
    EmptyRecord { word: String },

    #[error("Database id \"{database_id}\" was rejected by the store")]
    InvalidDestinationId { database_id: String },

    #[error("Access token was rejected by the store")]
    InvalidCredential,

    #[error("Declaration \"{content}\" on line {line} is invalid, expected `word[,lang]`")]
    MalformedTaskLine { line: usize, content: String },

    #[error("Unexpected store response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexError {
    /// Whether the error is an expected outcome for a single word rather
    /// than a failure of the tool itself
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            LexError::UnsupportedLanguage { .. }
                | LexError::WordNotFound { .. }
                | LexError::EmptyRecord { .. }
                | LexError::InvalidDestinationId { .. }
                | LexError::InvalidCredential
                | LexError::MalformedTaskLine { .. }
        )
    }

    /// Short name of the variant, used in batch reports
    pub fn kind(&self) -> &'static str {
        match self {
            LexError::UnsupportedLanguage { .. } => "UnsupportedLanguage",
            LexError::WordNotFound { .. } => "WordNotFound",
            LexError::EmptyRecord { .. } => "EmptyRecord",
            LexError::InvalidDestinationId { .. } => "InvalidDestinationId",
            LexError::InvalidCredential => "InvalidCredential",
            LexError::MalformedTaskLine { .. } => "MalformedTaskLine",
            LexError::MalformedResponse(_) => "MalformedResponse",
            LexError::Transport(_) => "TransportFailure",
            LexError::Io(_) => "Io",
        }
    }
}

pub type Result<T, E = LexError> = std::result::Result<T, E>;
