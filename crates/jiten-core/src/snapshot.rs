use std::path::Path;

use jiten_types::Snapshot;

use crate::error::SnapshotError;

/// Write the merged dataset as a single compact JSON document.
///
/// Side artifact only; nothing in the pipeline reads it back.
pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let bytes = serde_json::to_vec(snapshot)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| SnapshotError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, &bytes)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Wrote snapshot to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[tokio::test]
    async fn writes_self_describing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("database.json");

        let snapshot = Snapshot {
            kanji: BTreeMap::new(),
            word: BTreeMap::new(),
            radical: BTreeMap::new(),
            reading: BTreeMap::from([("r1".to_string(), serde_json::json!({"kana": "にち"}))]),
        };
        write_snapshot(&path, &snapshot).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        for key in ["kanji", "word", "radical", "reading"] {
            assert!(written.get(key).is_some(), "missing top-level key {key}");
        }
        assert_eq!(written["reading"]["r1"]["kana"], "にち");
    }
}
