use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use jiten_types::{KanjiTranslation, LangMap, WordTranslation};

use crate::error::ScanError;

const KANJI_FILE: &str = "kanji.json";
const WORD_FILE: &str = "word.json";
const RADICAL_FILE: &str = "radical.json";

/// Discovery seam over the translation tree.
///
/// Existence checks go through the filesystem rather than string
/// matching against a raw directory listing, so the answer does not
/// depend on the listing's path-separator convention.
pub trait TranslationRoot {
    /// Language codes: the names of immediate subdirectories of the
    /// root. Plain files in the root are never languages.
    fn languages(&self) -> Result<Vec<String>, ScanError>;

    /// Path of `<root>/<lang>/<file_name>` iff it exists as a file
    fn locate(&self, lang: &str, file_name: &str) -> Option<PathBuf>;
}

/// Translation tree rooted at a real directory
pub struct FsTranslationRoot {
    root: PathBuf,
}

impl FsTranslationRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TranslationRoot for FsTranslationRoot {
    fn languages(&self) -> Result<Vec<String>, ScanError> {
        let entries = fs::read_dir(&self.root).map_err(|source| ScanError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut langs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::Io {
                path: self.root.clone(),
                source,
            })?;
            if entry.path().is_dir() {
                langs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        // Directory listing order is platform-dependent; sort for a
        // deterministic enumeration.
        langs.sort();
        Ok(langs)
    }

    fn locate(&self, lang: &str, file_name: &str) -> Option<PathBuf> {
        let path = self.root.join(lang).join(file_name);
        path.is_file().then_some(path)
    }
}

/// Per-language translation collections found under the root.
///
/// Each (language, entity-type) slot is optional: a language appears in
/// a map only if it carries the corresponding file.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    /// Every detected language, sorted, whether or not it carries files
    pub languages: Vec<String>,
    pub kanji: LangMap<KanjiTranslation>,
    pub word: LangMap<WordTranslation>,
    pub radical: LangMap<String>,
}

/// Probe every detected language for its three optional translation
/// files and load whatever is present.
pub async fn scan_translations(root: &impl TranslationRoot) -> Result<Translations, ScanError> {
    let languages = root.languages()?;
    tracing::info!("Found translation languages: {:?}", languages);

    let mut translations = Translations {
        languages: languages.clone(),
        ..Default::default()
    };

    for lang in &languages {
        if let Some(path) = root.locate(lang, KANJI_FILE) {
            translations.kanji.insert(lang.clone(), read_json(&path).await?);
        }
        if let Some(path) = root.locate(lang, WORD_FILE) {
            translations.word.insert(lang.clone(), read_json(&path).await?);
        }
        if let Some(path) = root.locate(lang, RADICAL_FILE) {
            translations
                .radical
                .insert(lang.clone(), read_json(&path).await?);
        }
    }

    Ok(translations)
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<String, T>, ScanError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
