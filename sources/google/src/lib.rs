pub mod client;
pub mod parser;

pub use client::GoogleDictionary;
pub use parser::parse_page;
