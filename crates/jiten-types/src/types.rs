use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Base kanji collection, keyed by the character itself.
pub type KanjiBase = BTreeMap<String, Kanji>;
/// Base word collection, keyed by the primary written form.
pub type WordBase = BTreeMap<String, Word>;
/// Base radical collection: a flat list of characters, no attributes.
pub type RadicalBase = Vec<String>;
/// Readings are opaque to this tool, keyed by an external id.
pub type ReadingBase = BTreeMap<String, serde_json::Value>;

/// One translation collection per language code.
pub type LangMap<T> = BTreeMap<String, BTreeMap<String, T>>;

/// Single-character kanji entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kanji {
    pub kanji: String,
    /// Hex code point as it appears in the source data, e.g. "65e5"
    pub unicode: String,
    pub stroke_count: u32,
    #[serde(default)]
    pub jlpt: Option<u8>,
    #[serde(default)]
    pub grade: Option<u8>,
    /// Appears in the Mainichi Shinbun frequency list
    #[serde(default)]
    pub mainichi_shinbun: bool,
    #[serde(default)]
    pub main_on_reading: Option<String>,
    #[serde(default)]
    pub main_kun_reading: Option<String>,
    #[serde(default)]
    pub on_readings: Vec<String>,
    #[serde(default)]
    pub kun_readings: Vec<String>,
    #[serde(default)]
    pub name_readings: Vec<String>,
    #[serde(default)]
    pub radicals: Vec<String>,
    #[serde(default)]
    pub related_words: Vec<String>,
}

/// Vocabulary entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub main_writing: String,
    pub main_reading: String,
    #[serde(default)]
    pub main_kanjis: Vec<String>,
    #[serde(default)]
    pub variants: Vec<WordVariant>,
}

/// Alternate writing/reading pair for a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordVariant {
    pub writing: String,
    pub reading: String,
}

/// Language-specific annotation for one kanji
///
/// Source documents name the flag `auto_translated`; the snapshot
/// artifact uses `autoTranslated`. The alias accepts both on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanjiTranslation {
    pub keyword: String,
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, rename = "autoTranslated", alias = "auto_translated")]
    pub auto_translated: bool,
}

/// Language-specific annotation for one word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTranslation {
    pub main_meaning: String,
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, rename = "autoTranslated", alias = "auto_translated")]
    pub auto_translated: bool,
}

/// Kanji plus its per-language translations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedKanji {
    #[serde(flatten)]
    pub base: Kanji,
    /// Language code -> translation; only languages with an entry appear
    pub meaning: BTreeMap<String, KanjiTranslation>,
}

/// Word plus its per-language translations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedWord {
    #[serde(flatten)]
    pub base: Word,
    pub meaning: BTreeMap<String, WordTranslation>,
}

/// Radical plus its per-language keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRadical {
    pub radical: String,
    pub keyword: BTreeMap<String, String>,
}

/// The fully merged dataset, written as the snapshot artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub kanji: BTreeMap<String, MergedKanji>,
    pub word: BTreeMap<String, MergedWord>,
    pub radical: BTreeMap<String, MergedRadical>,
    pub reading: ReadingBase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kanji_deserializes_from_sparse_record() {
        let json = r#"{"kanji":"日","unicode":"65e5","stroke_count":4,"jlpt":5}"#;
        let kanji: Kanji = serde_json::from_str(json).unwrap();
        assert_eq!(kanji.kanji, "日");
        assert_eq!(kanji.stroke_count, 4);
        assert_eq!(kanji.jlpt, Some(5));
        assert_eq!(kanji.grade, None);
        assert!(kanji.on_readings.is_empty());
        assert!(!kanji.mainichi_shinbun);
    }

    #[test]
    fn translation_accepts_source_flag_name_and_emits_snapshot_name() {
        let json = r#"{"keyword":"sun","meanings":["sun","day"],"auto_translated":false}"#;
        let t: KanjiTranslation = serde_json::from_str(json).unwrap();
        assert!(!t.auto_translated);

        let out = serde_json::to_string(&t).unwrap();
        assert!(out.contains("\"autoTranslated\":false"));
        assert!(!out.contains("auto_translated"));
    }

    #[test]
    fn absent_notes_are_dropped_from_serialized_translations() {
        let t = KanjiTranslation {
            keyword: "sun".to_string(),
            meanings: vec![],
            notes: None,
            auto_translated: false,
        };
        let value = serde_json::to_value(&t).unwrap();
        assert!(value.get("notes").is_none());

        let w = WordTranslation {
            main_meaning: "Japan".to_string(),
            meanings: vec![],
            notes: Some("country name".to_string()),
            auto_translated: false,
        };
        let value = serde_json::to_value(&w).unwrap();
        assert_eq!(value["notes"], "country name");
    }

    #[test]
    fn merged_kanji_flattens_base_fields() {
        let kanji: Kanji =
            serde_json::from_str(r#"{"kanji":"日","unicode":"65e5","stroke_count":4}"#).unwrap();
        let merged = MergedKanji {
            base: kanji,
            meaning: BTreeMap::new(),
        };
        let value = serde_json::to_value(&merged).unwrap();
        assert_eq!(value["kanji"], "日");
        assert_eq!(value["stroke_count"], 4);
        assert!(value["meaning"].as_object().unwrap().is_empty());
    }
}
