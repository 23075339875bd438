//! Table creation for the release target store.
//!
//! The store's schema is owned elsewhere; this carries just enough DDL
//! to run the job (and its tests) against an empty database.

use sqlx::SqlitePool;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS kanji (
        kanji TEXT PRIMARY KEY,
        unicode TEXT NOT NULL,
        stroke_count INTEGER NOT NULL,
        jlpt INTEGER,
        grade INTEGER,
        mainichi_shinbun INTEGER NOT NULL,
        main_on_reading TEXT,
        main_kun_reading TEXT,
        on_readings TEXT NOT NULL,
        kun_readings TEXT NOT NULL,
        name_readings TEXT NOT NULL,
        radicals TEXT NOT NULL,
        related_words TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS words (
        main_writing TEXT PRIMARY KEY,
        main_reading TEXT NOT NULL,
        main_kanjis TEXT NOT NULL,
        variants TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS radicals (
        radical TEXT PRIMARY KEY
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS kanji_translations (
        kanji TEXT NOT NULL,
        language TEXT NOT NULL,
        keyword TEXT NOT NULL,
        meanings TEXT NOT NULL,
        notes TEXT,
        auto_translated INTEGER NOT NULL,
        PRIMARY KEY (kanji, language)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS word_translations (
        writing TEXT NOT NULL,
        language TEXT NOT NULL,
        main_meaning TEXT NOT NULL,
        meanings TEXT NOT NULL,
        notes TEXT,
        auto_translated INTEGER NOT NULL,
        PRIMARY KEY (writing, language)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS radical_keywords (
        radical TEXT NOT NULL,
        language TEXT NOT NULL,
        keyword TEXT NOT NULL,
        PRIMARY KEY (radical, language)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS readings (
        reading_id TEXT PRIMARY KEY,
        data TEXT NOT NULL
    )
    "#,
];

/// Create any missing release tables
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
