use anyhow::Context;
use lyrics_api::db::Database;
use lyrics_api::secrets::SECRET_MANAGER;
use lyrics_api::seed::demo_songs;
use lyrics_api::store::SongStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let database = Database::new(
        &SECRET_MANAGER.get("DATABASE_URL"),
        SECRET_MANAGER.max_connections()?,
    )
    .await
    .context("failed to connect to database")?;
    database.migrate().await.context("failed to run migrations")?;

    for song in demo_songs() {
        if let Some(existing) = database.find_lyrics(&song.artist, &song.title).await? {
            info!("Skipping {} - {}: already stored as {}", song.artist, song.title, existing.id);
            continue;
        }

        let created = database.insert(song).await?;
        info!("Created song: {} ({} - {})", created.id, created.artist, created.title);
    }

    Ok(())
}
