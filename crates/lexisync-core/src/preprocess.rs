use unicode_normalization::UnicodeNormalization;

const LEFT_SINGLE_QUOTE: char = '\u{2018}';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
const EXAMPLE_QUOTE: char = '\u{201D}';

/// Normalize a piece of page text for display.
///
/// Trims whitespace, then uppercases the first character and lowercases the
/// rest. Text wrapped in typographic single quotes keeps its case.
pub fn prettify(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = text.trim();

    if is_single_quoted(text) {
        return text.to_string();
    }

    capitalize(text)
}

/// Normalize an example sentence and wrap it in quotation marks
pub fn quote_example(text: &str) -> String {
    let stripped = text.replace('"', "");
    format!("{EXAMPLE_QUOTE}{}{EXAMPLE_QUOTE}", prettify(&stripped))
}

fn is_single_quoted(text: &str) -> bool {
    text.chars().count() >= 2
        && text.starts_with(LEFT_SINGLE_QUOTE)
        && text.ends_with(RIGHT_SINGLE_QUOTE)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
