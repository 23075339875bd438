use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use jiten_core::chunk::partition;

use crate::error::InsertError;
use crate::project::{
    KanjiRow, KanjiTranslationRow, ProjectedRows, RadicalKeywordRow, RadicalRow, ReadingRow,
    WordRow, WordTranslationRow,
};

/// Sequential chunked inserts into the release tables.
///
/// Chunks within a table are submitted one at a time, each awaited
/// before the next, and tables run in a fixed order so stores with
/// referential constraints see base entities before translations.
/// There is no retry and no transaction: a failed chunk aborts the run
/// and leaves earlier chunks persisted.
pub struct BatchLoader {
    pool: SqlitePool,
    chunk_size: usize,
}

impl BatchLoader {
    pub fn new(pool: SqlitePool, chunk_size: usize) -> Self {
        Self { pool, chunk_size }
    }

    /// Insert every projected collection, in the fixed table order:
    /// kanji, words, radicals, kanji_translations, word_translations,
    /// radical_keywords, readings.
    pub async fn load_all(&self, rows: &ProjectedRows) -> Result<(), InsertError> {
        self.insert_kanji(&rows.kanji).await?;
        self.insert_words(&rows.words).await?;
        self.insert_radicals(&rows.radicals).await?;
        self.insert_kanji_translations(&rows.kanji_translations).await?;
        self.insert_word_translations(&rows.word_translations).await?;
        self.insert_radical_keywords(&rows.radical_keywords).await?;
        self.insert_readings(&rows.readings).await?;
        Ok(())
    }

    async fn insert_kanji(&self, rows: &[KanjiRow]) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO kanji (kanji, unicode, stroke_count, jlpt, grade, \
                 mainichi_shinbun, main_on_reading, main_kun_reading, on_readings, \
                 kun_readings, name_readings, radicals, related_words) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.kanji)
                    .push_bind(&row.unicode)
                    .push_bind(row.stroke_count)
                    .push_bind(row.jlpt)
                    .push_bind(row.grade)
                    .push_bind(row.mainichi_shinbun)
                    .push_bind(&row.main_on_reading)
                    .push_bind(&row.main_kun_reading)
                    .push_bind(Json(&row.on_readings))
                    .push_bind(Json(&row.kun_readings))
                    .push_bind(Json(&row.name_readings))
                    .push_bind(Json(&row.radicals))
                    .push_bind(Json(&row.related_words));
            });
            self.execute(qb, "kanji").await?;
        }
        tracing::info!("Inserted {} kanji rows", rows.len());
        Ok(())
    }

    async fn insert_words(&self, rows: &[WordRow]) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO words (main_writing, main_reading, main_kanjis, variants) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.main_writing)
                    .push_bind(&row.main_reading)
                    .push_bind(Json(&row.main_kanjis))
                    .push_bind(Json(&row.variants));
            });
            self.execute(qb, "words").await?;
        }
        tracing::info!("Inserted {} word rows", rows.len());
        Ok(())
    }

    async fn insert_radicals(&self, rows: &[RadicalRow]) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO radicals (radical) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.radical);
            });
            self.execute(qb, "radicals").await?;
        }
        tracing::info!("Inserted {} radical rows", rows.len());
        Ok(())
    }

    async fn insert_kanji_translations(
        &self,
        rows: &[KanjiTranslationRow],
    ) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO kanji_translations (kanji, language, keyword, meanings, \
                 notes, auto_translated) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.kanji)
                    .push_bind(&row.language)
                    .push_bind(&row.keyword)
                    .push_bind(Json(&row.meanings))
                    .push_bind(&row.notes)
                    .push_bind(row.auto_translated);
            });
            self.execute(qb, "kanji_translations").await?;
        }
        tracing::info!("Inserted {} kanji translation rows", rows.len());
        Ok(())
    }

    async fn insert_word_translations(
        &self,
        rows: &[WordTranslationRow],
    ) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO word_translations (writing, language, main_meaning, \
                 meanings, notes, auto_translated) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.writing)
                    .push_bind(&row.language)
                    .push_bind(&row.main_meaning)
                    .push_bind(Json(&row.meanings))
                    .push_bind(&row.notes)
                    .push_bind(row.auto_translated);
            });
            self.execute(qb, "word_translations").await?;
        }
        tracing::info!("Inserted {} word translation rows", rows.len());
        Ok(())
    }

    async fn insert_radical_keywords(
        &self,
        rows: &[RadicalKeywordRow],
    ) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO radical_keywords (radical, language, keyword) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.radical)
                    .push_bind(&row.language)
                    .push_bind(&row.keyword);
            });
            self.execute(qb, "radical_keywords").await?;
        }
        tracing::info!("Inserted {} radical keyword rows", rows.len());
        Ok(())
    }

    async fn insert_readings(&self, rows: &[ReadingRow]) -> Result<(), InsertError> {
        for chunk in partition(rows, self.chunk_size) {
            let mut qb: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO readings (reading_id, data) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(&row.reading_id).push_bind(&row.data);
            });
            self.execute(qb, "readings").await?;
        }
        tracing::info!("Inserted {} reading rows", rows.len());
        Ok(())
    }

    async fn execute(
        &self,
        mut qb: QueryBuilder<'_, Sqlite>,
        table: &'static str,
    ) -> Result<(), InsertError> {
        qb.build()
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|source| InsertError { table, source })
    }
}
