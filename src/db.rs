use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewSong, Song, SongLyrics, SongSummary};
use crate::store::{SongStore, contains_pattern};

const SUMMARY_COLUMNS: &str = "id, title, artist, album, year, genre, duration";

/// Postgres-backed song store.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        debug!("Connecting to Postgres with max_connections={}", max_connections);

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool, e.g. one shared with other components.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SongStore for Database {
    async fn list(&self) -> Result<Vec<SongSummary>, StoreError> {
        let songs = sqlx::query_as::<_, SongSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM songs ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }

    async fn search(&self, needle: &str) -> Result<Vec<SongSummary>, StoreError> {
        let songs = sqlx::query_as::<_, SongSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM songs
             WHERE title ILIKE $1 ESCAPE '\\' OR artist ILIKE $1 ESCAPE '\\'
             ORDER BY created_at, id"
        ))
        .bind(contains_pattern(needle))
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Song>, StoreError> {
        let song = sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(song)
    }

    async fn find_lyrics(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<SongLyrics>, StoreError> {
        let song = sqlx::query_as::<_, SongLyrics>(
            "SELECT id, title, artist, album, year, lyrics FROM songs
             WHERE LOWER(artist) = LOWER($1) AND LOWER(title) = LOWER($2)
             ORDER BY created_at DESC, id DESC
             LIMIT 1",
        )
        .bind(artist)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(song)
    }

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError> {
        let song = song.into_song();

        let stored = sqlx::query_as::<_, Song>(
            "INSERT INTO songs (id, title, artist, album, year, genre, duration, lyrics, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(song.year)
        .bind(&song.genre)
        .bind(song.duration)
        .bind(&song.lyrics)
        .bind(song.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
