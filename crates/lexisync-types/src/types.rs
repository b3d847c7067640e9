use serde::{Deserialize, Serialize};

/// Lexical data extracted for one word
///
/// Parts of speech and senses keep the order in which they were first seen
/// on the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalRecord {
    pub word: String,
    pub parts_of_speech: Vec<PartOfSpeech>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    pub label: String,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl LexicalRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            parts_of_speech: Vec::new(),
        }
    }

    /// Get the part of speech with the given label, registering it at the end
    /// if it was not seen yet
    pub fn part_of_speech_mut(&mut self, label: &str) -> &mut PartOfSpeech {
        let index = match self.parts_of_speech.iter().position(|p| p.label == label) {
            Some(index) => index,
            None => {
                self.parts_of_speech.push(PartOfSpeech::new(label));
                self.parts_of_speech.len() - 1
            }
        };

        &mut self.parts_of_speech[index]
    }

    pub fn part_of_speech(&self, label: &str) -> Option<&PartOfSpeech> {
        self.parts_of_speech.iter().find(|p| p.label == label)
    }

    /// Part of speech labels in page order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.parts_of_speech.iter().map(|p| p.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.parts_of_speech.is_empty()
    }

    pub fn sense_count(&self) -> usize {
        self.parts_of_speech.iter().map(|p| p.senses.len()).sum()
    }
}

impl PartOfSpeech {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            senses: Vec::new(),
        }
    }

    /// Register a sense. A sense with the same definition text is replaced
    /// where it stands.
    pub fn insert_sense(&mut self, sense: Sense) {
        match self
            .senses
            .iter_mut()
            .find(|s| s.definition == sense.definition)
        {
            Some(existing) => *existing = sense,
            None => self.senses.push(sense),
        }
    }

    pub fn sense(&self, definition: &str) -> Option<&Sense> {
        self.senses.iter().find(|s| s.definition == definition)
    }
}

impl Sense {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            examples: Vec::new(),
            synonyms: Vec::new(),
        }
    }

    /// Examples joined the way they are displayed
    pub fn joined_examples(&self) -> Option<String> {
        join_non_empty(&self.examples)
    }

    pub fn joined_synonyms(&self) -> Option<String> {
        join_non_empty(&self.synonyms)
    }
}

fn join_non_empty(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_of_speech_keep_first_seen_order() {
        let mut record = LexicalRecord::new("Test");
        record.part_of_speech_mut("Noun");
        record.part_of_speech_mut("Verb");
        record.part_of_speech_mut("Noun");

        assert_eq!(record.labels().collect::<Vec<_>>(), vec!["Noun", "Verb"]);
    }

    #[test]
    fn duplicate_definition_is_replaced_in_place() {
        let mut pos = PartOfSpeech::new("Noun");
        pos.insert_sense(Sense::new("First."));
        pos.insert_sense(Sense::new("Second."));
        pos.insert_sense(Sense {
            definition: "First.".to_string(),
            examples: vec!["”An example”".to_string()],
            synonyms: vec![],
        });

        assert_eq!(pos.senses.len(), 2);
        assert_eq!(pos.senses[0].definition, "First.");
        assert_eq!(pos.senses[0].examples, vec!["”An example”"]);
        assert_eq!(pos.senses[1].definition, "Second.");
    }

    #[test]
    fn joined_lists_are_none_when_empty() {
        let mut sense = Sense::new("Short for test match.");
        assert_eq!(sense.joined_examples(), None);

        sense.synonyms = vec!["Trial".to_string(), "Check".to_string()];
        assert_eq!(sense.joined_synonyms().as_deref(), Some("Trial, Check"));
    }

    #[test]
    fn empty_record_reports_empty() {
        let record = LexicalRecord::new("Test");
        assert!(record.is_empty());
        assert_eq!(record.sense_count(), 0);
    }

    #[test]
    fn record_serializes_in_page_order() {
        let mut record = LexicalRecord::new("Test");
        record.part_of_speech_mut("Verb");
        record.part_of_speech_mut("Noun");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["parts_of_speech"][0]["label"], "Verb");
        assert_eq!(json["parts_of_speech"][1]["label"], "Noun");
    }
}
