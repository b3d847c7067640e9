use std::sync::LazyLock;

use lexisync_core::{LexError, Result, prettify, quote_example};
use lexisync_types::{LexicalRecord, Sense};
use scraper::{ElementRef, Html, Selector};

/// Selectors for the dictionary card of the search result page
struct CardSelectors {
    headword: Selector,
    pos_group: Selector,
    pos_label: Selector,
    sense_list: Selector,
    sense: Selector,
    definition: Selector,
    example: Selector,
    synonym: Selector,
}

static SELECTORS: LazyLock<CardSelectors> = LazyLock::new(|| CardSelectors {
    headword: selector(r#"[data-dobid="hdw"]"#),
    pos_group: selector("div.lW8rQd"),
    pos_label: selector("span.YrbPuc"),
    sense_list: selector("ol.eQJLDd"),
    sense: selector("div.thODed"),
    definition: selector(r#"[data-dobid="dfn"]"#),
    example: selector("div.ubHt5c"),
    synonym: selector("div.EmSASc.gWUzU.MR2UAc.F5z5N.jEdCLc.LsYFnd.p9F8Cd.I6a0ee.rjpYgb.gjoUyf"),
});

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("card selectors are valid CSS")
}

/// Extract the lexical record from a dictionary result page.
///
/// Fails only when the page has no headword. A card without parts of
/// speech or senses yields an empty record.
pub fn parse_page(html: &str, word: &str, language: &str) -> Result<LexicalRecord> {
    tracing::debug!("Parsing web data for \"{}\"", word);
    let document = Html::parse_document(html);
    let selectors = &*SELECTORS;

    let headword = document
        .select(&selectors.headword)
        .next()
        .map(|node| prettify(&node_text(node)))
        .filter(|text| !text.is_empty())
        .ok_or_else(|| LexError::WordNotFound {
            word: word.to_string(),
            language: language.to_string(),
        })?;

    let mut record = LexicalRecord::new(headword);

    // The i-th sense list belongs to the i-th part of speech group
    let sense_lists: Vec<ElementRef> = document.select(&selectors.sense_list).collect();

    for (index, group) in document.select(&selectors.pos_group).enumerate() {
        let Some(label) = group
            .select(&selectors.pos_label)
            .next()
            .map(|node| prettify(&node_text(node)))
        else {
            tracing::warn!("Part of speech group {} of \"{}\" has no label", index, word);
            continue;
        };

        let pos = record.part_of_speech_mut(&label);

        if let Some(list) = sense_lists.get(index) {
            for node in list.select(&selectors.sense) {
                if let Some(sense) = parse_sense(node, selectors) {
                    pos.insert_sense(sense);
                }
            }
        }
    }

    tracing::debug!(
        "Parsed \"{}\": {} part(s) of speech, {} sense(s)",
        record.word,
        record.parts_of_speech.len(),
        record.sense_count()
    );

    Ok(record)
}

fn parse_sense(node: ElementRef, selectors: &CardSelectors) -> Option<Sense> {
    let definition = node
        .select(&selectors.definition)
        .next()
        .map(|d| prettify(&node_text(d)))?;

    let examples = node
        .select(&selectors.example)
        .map(|e| quote_example(&node_text(e)))
        .collect();

    let synonyms = node
        .select(&selectors.synonym)
        .map(|s| prettify(&node_text(s)))
        .collect();

    Some(Sense {
        definition,
        examples,
        synonyms,
    })
}

fn node_text(node: ElementRef) -> String {
    node.text().collect()
}
