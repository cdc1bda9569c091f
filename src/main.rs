use mybatis_generator::{
    config::{GeneratorConfig, DEFAULT_CONFIG_PATH},
    customize::LayeredImports,
    database_schema::get_tables,
    toml_generator::write_table_manifest,
    Result,
};
use sqlx::SqlitePool;
use std::{env, path::PathBuf, process};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let arguments: Vec<String> = env::args().collect();
    let config_path: PathBuf = arguments
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());

    if let Err(err) = run(config_path).await {
        error!(error = %err, "generation failed");
        process::exit(1);
    }
}

async fn run(config_path: PathBuf) -> Result<()> {
    let config = GeneratorConfig::load(&config_path)?;
    let dialect = config.dialect()?;

    info!(config = %config_path.display(), %dialect, "starting generation");

    let connection = SqlitePool::connect(&config.database_url).await?;

    let tables = get_tables(connection, &config, dialect.dialect(), &LayeredImports).await?;

    for table in &tables {
        write_table_manifest(&config.output_dir, table)?;
    }

    info!(tables = tables.len(), output = %config.output_dir.display(), "generation finished");
    Ok(())
}
