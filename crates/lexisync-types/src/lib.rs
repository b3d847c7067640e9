pub mod types;

pub use types::{LexicalRecord, PartOfSpeech, Sense};
