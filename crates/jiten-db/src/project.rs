use jiten_core::load::BaseData;
use jiten_core::scan::Translations;
use jiten_types::WordVariant;

/// Normalized kanji row; sequence-valued fields become JSON text columns
#[derive(Debug, Clone)]
pub struct KanjiRow {
    pub kanji: String,
    pub unicode: String,
    pub stroke_count: u32,
    pub jlpt: Option<u8>,
    pub grade: Option<u8>,
    pub mainichi_shinbun: bool,
    pub main_on_reading: Option<String>,
    pub main_kun_reading: Option<String>,
    pub on_readings: Vec<String>,
    pub kun_readings: Vec<String>,
    pub name_readings: Vec<String>,
    pub radicals: Vec<String>,
    pub related_words: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct WordRow {
    pub main_writing: String,
    pub main_reading: String,
    pub main_kanjis: Vec<String>,
    pub variants: Vec<WordVariant>,
}

#[derive(Debug, Clone)]
pub struct RadicalRow {
    pub radical: String,
}

/// One row per (language, kanji) translation pair
#[derive(Debug, Clone)]
pub struct KanjiTranslationRow {
    pub kanji: String,
    pub language: String,
    pub keyword: String,
    pub meanings: Vec<String>,
    pub notes: Option<String>,
    pub auto_translated: bool,
}

#[derive(Debug, Clone)]
pub struct WordTranslationRow {
    pub writing: String,
    pub language: String,
    pub main_meaning: String,
    pub meanings: Vec<String>,
    pub notes: Option<String>,
    pub auto_translated: bool,
}

/// Keyword is a scalar here, unlike the kanji/word translation rows
#[derive(Debug, Clone)]
pub struct RadicalKeywordRow {
    pub radical: String,
    pub language: String,
    pub keyword: String,
}

#[derive(Debug, Clone)]
pub struct ReadingRow {
    pub reading_id: String,
    pub data: serde_json::Value,
}

/// Every collection reshaped into storage rows, in insert order
#[derive(Debug, Clone, Default)]
pub struct ProjectedRows {
    pub kanji: Vec<KanjiRow>,
    pub words: Vec<WordRow>,
    pub radicals: Vec<RadicalRow>,
    pub kanji_translations: Vec<KanjiTranslationRow>,
    pub word_translations: Vec<WordTranslationRow>,
    pub radical_keywords: Vec<RadicalKeywordRow>,
    pub readings: Vec<ReadingRow>,
}

/// Reshape the loaded collections into flat row sequences.
///
/// Pure renaming/flattening, no merge logic; values carry through
/// unchanged. Iteration over the keyed collections is sorted, so the
/// row order is deterministic.
pub fn project(base: &BaseData, translations: &Translations) -> ProjectedRows {
    let kanji = base
        .kanji
        .values()
        .map(|k| KanjiRow {
            kanji: k.kanji.clone(),
            unicode: k.unicode.clone(),
            stroke_count: k.stroke_count,
            jlpt: k.jlpt,
            grade: k.grade,
            mainichi_shinbun: k.mainichi_shinbun,
            main_on_reading: k.main_on_reading.clone(),
            main_kun_reading: k.main_kun_reading.clone(),
            on_readings: k.on_readings.clone(),
            kun_readings: k.kun_readings.clone(),
            name_readings: k.name_readings.clone(),
            radicals: k.radicals.clone(),
            related_words: k.related_words.clone(),
        })
        .collect();

    let words = base
        .word
        .values()
        .map(|w| WordRow {
            main_writing: w.main_writing.clone(),
            main_reading: w.main_reading.clone(),
            main_kanjis: w.main_kanjis.clone(),
            variants: w.variants.clone(),
        })
        .collect();

    let radicals = base
        .radical
        .iter()
        .map(|c| RadicalRow { radical: c.clone() })
        .collect();

    let kanji_translations = translations
        .kanji
        .iter()
        .flat_map(|(lang, set)| {
            set.iter().map(|(key, t)| KanjiTranslationRow {
                kanji: key.clone(),
                language: lang.clone(),
                keyword: t.keyword.clone(),
                meanings: t.meanings.clone(),
                notes: t.notes.clone(),
                auto_translated: t.auto_translated,
            })
        })
        .collect();

    let word_translations = translations
        .word
        .iter()
        .flat_map(|(lang, set)| {
            set.iter().map(|(key, t)| WordTranslationRow {
                writing: key.clone(),
                language: lang.clone(),
                main_meaning: t.main_meaning.clone(),
                meanings: t.meanings.clone(),
                notes: t.notes.clone(),
                auto_translated: t.auto_translated,
            })
        })
        .collect();

    let radical_keywords = translations
        .radical
        .iter()
        .flat_map(|(lang, set)| {
            set.iter().map(|(key, keyword)| RadicalKeywordRow {
                radical: key.clone(),
                language: lang.clone(),
                keyword: keyword.clone(),
            })
        })
        .collect();

    let readings = base
        .reading
        .iter()
        .map(|(id, value)| ReadingRow {
            reading_id: id.clone(),
            data: value.clone(),
        })
        .collect();

    ProjectedRows {
        kanji,
        words,
        radicals,
        kanji_translations,
        word_translations,
        radical_keywords,
        readings,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiten_types::{Kanji, KanjiTranslation, Word};

    use super::*;

    fn fixture() -> (BaseData, Translations) {
        let kanji: Kanji = serde_json::from_str(
            r#"{"kanji":"日","unicode":"65e5","stroke_count":4,"jlpt":5,
                "on_readings":["ニチ"],"related_words":["日本"]}"#,
        )
        .unwrap();
        let word: Word = serde_json::from_str(
            r#"{"main_writing":"日本","main_reading":"にほん","main_kanjis":["日","本"],
                "variants":[{"writing":"ニッポン","reading":"にっぽん"}]}"#,
        )
        .unwrap();
        let base = BaseData {
            kanji: BTreeMap::from([("日".to_string(), kanji)]),
            word: BTreeMap::from([("日本".to_string(), word)]),
            radical: vec!["一".to_string(), "二".to_string()],
            reading: BTreeMap::from([("r1".to_string(), serde_json::json!({"kana": "にち"}))]),
        };

        let translations = Translations {
            languages: vec!["en".to_string(), "fr".to_string()],
            kanji: BTreeMap::from([
                (
                    "en".to_string(),
                    BTreeMap::from([(
                        "日".to_string(),
                        KanjiTranslation {
                            keyword: "sun".to_string(),
                            meanings: vec!["sun".to_string(), "day".to_string()],
                            notes: None,
                            auto_translated: false,
                        },
                    )]),
                ),
                (
                    "fr".to_string(),
                    BTreeMap::from([(
                        "日".to_string(),
                        KanjiTranslation {
                            keyword: "soleil".to_string(),
                            meanings: vec![],
                            notes: None,
                            auto_translated: true,
                        },
                    )]),
                ),
            ]),
            word: BTreeMap::new(),
            radical: BTreeMap::from([(
                "en".to_string(),
                BTreeMap::from([("一".to_string(), "one".to_string())]),
            )]),
        };
        (base, translations)
    }

    #[test]
    fn projects_base_values_unchanged() {
        let (base, translations) = fixture();
        let rows = project(&base, &translations);

        assert_eq!(rows.kanji.len(), 1);
        let k = &rows.kanji[0];
        assert_eq!(k.unicode, "65e5");
        assert_eq!(k.stroke_count, 4);
        assert_eq!(k.jlpt, Some(5));
        assert_eq!(k.on_readings, vec!["ニチ"]);
        assert_eq!(k.related_words, vec!["日本"]);

        assert_eq!(rows.words[0].variants[0].writing, "ニッポン");
        assert_eq!(rows.radicals.len(), 2);
        assert_eq!(rows.readings[0].reading_id, "r1");
    }

    #[test]
    fn one_translation_row_per_language_key_pair() {
        let (base, translations) = fixture();
        let rows = project(&base, &translations);

        let pairs: Vec<(&str, &str)> = rows
            .kanji_translations
            .iter()
            .map(|r| (r.language.as_str(), r.kanji.as_str()))
            .collect();
        assert_eq!(pairs, vec![("en", "日"), ("fr", "日")]);

        assert_eq!(rows.radical_keywords.len(), 1);
        assert_eq!(rows.radical_keywords[0].keyword, "one");
        assert!(rows.word_translations.is_empty());
    }

    #[test]
    fn translation_rows_round_trip_to_merge_lookup_pairs() {
        let (base, translations) = fixture();
        let rows = project(&base, &translations);

        // Every projected (language, key) pair must point back at the
        // exact entry used during the merge lookup.
        for row in &rows.kanji_translations {
            let original = &translations.kanji[&row.language][&row.kanji];
            assert_eq!(row.keyword, original.keyword);
            assert_eq!(row.meanings, original.meanings);
            assert_eq!(row.auto_translated, original.auto_translated);
        }
    }
}
