use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use jiten_types::{KanjiBase, RadicalBase, ReadingBase, WordBase};

use crate::error::LoadError;

/// The four base datasets, loaded into keyed collections
#[derive(Debug, Clone)]
pub struct BaseData {
    pub kanji: KanjiBase,
    pub word: WordBase,
    pub radical: RadicalBase,
    pub reading: ReadingBase,
}

/// Load the four base dataset files from `dir`, concurrently.
///
/// The loads are independent reads, so they fan out; any single failure
/// fails the whole load.
pub async fn load_base(dir: &Path) -> Result<BaseData, LoadError> {
    let (kanji, word, radical, reading) = tokio::try_join!(
        load_json::<KanjiBase>(dir.join("kanji.json")),
        load_json::<WordBase>(dir.join("word.json")),
        load_json::<RadicalBase>(dir.join("radical.json")),
        load_json::<ReadingBase>(dir.join("reading.json")),
    )?;

    tracing::info!(
        "Loaded base datasets: {} kanji, {} words, {} radicals, {} readings",
        kanji.len(),
        word.len(),
        radical.len(),
        reading.len()
    );

    Ok(BaseData {
        kanji,
        word,
        radical,
        reading,
    })
}

async fn load_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, LoadError> {
    let bytes = tokio::fs::read(&path).await.map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse { path, source })
}
