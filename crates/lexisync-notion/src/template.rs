use std::collections::HashMap;

use lexisync_types::{LexicalRecord, PartOfSpeech, Sense};
use serde_json::{Map, Value, json};

use crate::store::{EntryProperties, RichText};

pub const WORD_PROPERTY: &str = "Word";
pub const POS_PROPERTY: &str = "Part Of Speech";
pub const INFORMATIONS_PROPERTY: &str = "Informations";

const DEFAULT_COLOR: &str = "default";
const SYNONYM_COLOR: &str = "gray";
const BLANK_LINE: &str = "\n";

/// Build the `Informations` rich text of a record.
///
/// `colors` maps each part of speech label to the color of its tag.
pub fn compose_informations(
    record: &LexicalRecord,
    colors: &HashMap<String, String>,
) -> Vec<RichText> {
    let mut segments = Vec::new();

    for pos in &record.parts_of_speech {
        let color = colors
            .get(&pos.label)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR);

        segments.extend(pos_segments(pos, color));
        segments.push(RichText::plain(BLANK_LINE));
    }

    if segments.last().is_some_and(|s| s.content == BLANK_LINE && !s.is_styled()) {
        segments.pop();
    }

    segments
}

fn pos_segments(pos: &PartOfSpeech, color: &str) -> Vec<RichText> {
    pos.senses
        .iter()
        .enumerate()
        .flat_map(|(index, sense)| sense_segments(index + 1, sense, color))
        .collect()
}

fn sense_segments(number: usize, sense: &Sense, color: &str) -> Vec<RichText> {
    let mut segments = vec![RichText::bold(
        format!("{}. {}\n", number, sense.definition),
        color,
    )];

    if let Some(examples) = sense.joined_examples() {
        segments.push(RichText::plain(format!("{examples}\n")));
    }

    if let Some(synonyms) = sense.joined_synonyms() {
        segments.push(RichText::italic(format!("{synonyms}\n"), SYNONYM_COLOR));
    }

    segments
}

/// Database query matching every entry whose word starts with `word`
pub fn query_payload(word: &str, page_size: u32, start_cursor: Option<&str>) -> Value {
    let mut payload = json!({
        "filter": {
            "and": [
                { "property": WORD_PROPERTY, "title": { "is_not_empty": true } },
                { "property": WORD_PROPERTY, "title": { "starts_with": word } }
            ]
        },
        "page_size": page_size
    });

    if let Some(cursor) = start_cursor {
        payload["start_cursor"] = json!(cursor);
    }

    payload
}

pub fn create_payload(database_id: &str, properties: &EntryProperties) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": properties_json(properties)
    })
}

pub fn update_payload(properties: &EntryProperties) -> Value {
    json!({ "properties": properties_json(properties) })
}

pub fn properties_json(properties: &EntryProperties) -> Value {
    let mut map = Map::new();
    map.insert(WORD_PROPERTY.to_string(), word_property(&properties.word));
    map.insert(
        POS_PROPERTY.to_string(),
        pos_property(&properties.parts_of_speech),
    );

    if let Some(informations) = &properties.informations {
        map.insert(
            INFORMATIONS_PROPERTY.to_string(),
            informations_property(informations),
        );
    }

    Value::Object(map)
}

fn word_property(word: &str) -> Value {
    json!({ "title": [{ "text": { "content": word } }] })
}

fn pos_property(labels: &[String]) -> Value {
    let options: Vec<Value> = labels.iter().map(|name| json!({ "name": name })).collect();
    json!({ "multi_select": options })
}

fn informations_property(segments: &[RichText]) -> Value {
    let rich_text: Vec<Value> = segments.iter().map(rich_text_json).collect();
    json!({ "rich_text": rich_text })
}

fn rich_text_json(segment: &RichText) -> Value {
    let mut value = json!({ "text": { "content": segment.content } });

    if segment.is_styled() {
        let mut annotations = Map::new();
        if segment.bold {
            annotations.insert("bold".to_string(), Value::Bool(true));
        }
        if segment.italic {
            annotations.insert("italic".to_string(), Value::Bool(true));
        }
        if let Some(color) = &segment.color {
            annotations.insert("color".to_string(), json!(color));
        }
        value["annotations"] = Value::Object(annotations);
    }

    value
}
