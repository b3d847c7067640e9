pub mod error;
pub mod language;
pub mod preprocess;
pub mod source;

pub use error::{LexError, Result};
pub use language::SupportedLanguages;
pub use preprocess::{prettify, quote_example};
pub use source::{DefinitionSource, SourceMetadata};
