use anyhow::Context;
use dotenvy::dotenv;
use mariadb_file_store::config::DbSettings;
use mariadb_file_store::infrastructure::database;
use mariadb_file_store::schema;
use mariadb_file_store::services::file_store::FileStore;
use serde_json::json;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // secret.env holds the TESTDB_* credentials; .env is the usual fallback.
    dotenvy::from_filename("secret.env").ok();
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mariadb_file_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = DbSettings::from_env_with_database("db_test")?;
    println!("{}", settings.connection_url());

    let pool = database::connect(&settings).await?;
    let store = FileStore::new(pool, schema::uploaded_files(), settings.max_packet_size);

    store.init().await?;

    let path = sample_file_path();
    let file_bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "test.pdf".to_string());

    let json_data = json!({
        "field1": ["a", "b", "c"],
        "field2": {
            "str": "123",
            "int": 123
        }
    });

    let id = store.upload(&filename, file_bytes, json_data).await?;
    info!("🆔 Upload complete, id: {}", id);

    Ok(())
}

/// The sample file sits next to the executable, like a script reading a
/// file from its own directory.
fn sample_file_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("test.pdf")))
        .unwrap_or_else(|| PathBuf::from("test.pdf"))
}
