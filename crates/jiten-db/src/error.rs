/// A chunk insert was rejected by the store. Fatal: no retry, no
/// rollback of previously submitted chunks.
#[derive(Debug, thiserror::Error)]
#[error("insert into {table} failed: {source}")]
pub struct InsertError {
    pub table: &'static str,
    #[source]
    pub source: sqlx::Error,
}
