use std::collections::BTreeMap;

use jiten_types::{MergedKanji, MergedRadical, MergedWord, Snapshot};

use crate::load::BaseData;
use crate::scan::Translations;

/// Join the translation overlays onto the base collections by key.
///
/// For every base entity, the meaning/keyword map is built in a single
/// pass over the language list and holds an entry for a language iff
/// that language's collection contains the entity's key. Absent
/// translations never produce placeholder entries. Readings pass
/// through untouched.
pub fn merge(base: &BaseData, translations: &Translations) -> Snapshot {
    let kanji = base
        .kanji
        .iter()
        .map(|(key, kanji)| {
            let merged = MergedKanji {
                base: kanji.clone(),
                meaning: collect_for_key(&translations.languages, &translations.kanji, key),
            };
            (key.clone(), merged)
        })
        .collect();

    let word = base
        .word
        .iter()
        .map(|(key, word)| {
            let merged = MergedWord {
                base: word.clone(),
                meaning: collect_for_key(&translations.languages, &translations.word, key),
            };
            (key.clone(), merged)
        })
        .collect();

    // Radical base records are bare characters; the merged form wraps
    // them so the keyword map has somewhere to live.
    let radical = base
        .radical
        .iter()
        .map(|c| {
            let merged = MergedRadical {
                radical: c.clone(),
                keyword: collect_for_key(&translations.languages, &translations.radical, c),
            };
            (c.clone(), merged)
        })
        .collect();

    Snapshot {
        kanji,
        word,
        radical,
        reading: base.reading.clone(),
    }
}

/// One entity's language map: `(lang, translation)` for every language
/// whose collection contains `key`
fn collect_for_key<T: Clone>(
    languages: &[String],
    per_lang: &BTreeMap<String, BTreeMap<String, T>>,
    key: &str,
) -> BTreeMap<String, T> {
    languages
        .iter()
        .filter_map(|lang| {
            per_lang
                .get(lang)
                .and_then(|set| set.get(key))
                .map(|t| (lang.clone(), t.clone()))
        })
        .collect()
}
