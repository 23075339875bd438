use sqlx::SqlitePool;
use tracing_subscriber::EnvFilter;

use jiten_config::Config;
use jiten_core::load::load_base;
use jiten_core::merge::merge;
use jiten_core::scan::{scan_translations, FsTranslationRoot};
use jiten_core::snapshot::write_snapshot;
use jiten_db::{project, schema, BatchLoader};


#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::new();
    if let Err(e) = run(&config).await {
        tracing::error!("release failed: {e:#}");
        std::process::exit(1);
    }
}

/// The whole release pipeline, start to finish.
///
/// Base loads fan out; everything after runs sequentially. Any error
/// aborts the run.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let base = load_base(&config.base_dir).await?;

    let root = FsTranslationRoot::new(&config.translation_dir);
    let translations = scan_translations(&root).await?;

    let snapshot = merge(&base, &translations);
    write_snapshot(&config.snapshot_path, &snapshot).await?;

    let pool = SqlitePool::connect(&config.database_url).await?;
    schema::ensure_tables(&pool).await?;

    let rows = project(&base, &translations);
    let loader = BatchLoader::new(pool, config.chunk_size);
    loader.load_all(&rows).await?;

    tracing::info!("Release complete");
    Ok(())
}
