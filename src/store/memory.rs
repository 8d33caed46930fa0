use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::SongStore;
use crate::error::StoreError;
use crate::models::{NewSong, Song, SongLyrics, SongSummary};

/// In-process store. Songs are kept in insertion order, which doubles as
/// creation order.
#[derive(Default)]
pub struct MemoryStore {
    songs: RwLock<Vec<Song>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_songs(songs: impl IntoIterator<Item = NewSong>) -> Self {
        let songs = songs.into_iter().map(NewSong::into_song).collect();
        Self {
            songs: RwLock::new(songs),
        }
    }

    pub async fn len(&self) -> usize {
        self.songs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.songs.read().await.is_empty()
    }
}

#[async_trait]
impl SongStore for MemoryStore {
    async fn list(&self) -> Result<Vec<SongSummary>, StoreError> {
        let songs = self.songs.read().await;
        Ok(songs.iter().map(SongSummary::from).collect())
    }

    async fn search(&self, needle: &str) -> Result<Vec<SongSummary>, StoreError> {
        let needle = needle.to_lowercase();
        let songs = self.songs.read().await;
        Ok(songs
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&needle)
                    || s.artist.to_lowercase().contains(&needle)
            })
            .map(SongSummary::from)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Song>, StoreError> {
        let songs = self.songs.read().await;
        Ok(songs.iter().find(|s| s.id == id).cloned())
    }

    async fn find_lyrics(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<SongLyrics>, StoreError> {
        let artist = artist.to_lowercase();
        let title = title.to_lowercase();
        let songs = self.songs.read().await;
        // newest first
        Ok(songs
            .iter()
            .rev()
            .find(|s| s.artist.to_lowercase() == artist && s.title.to_lowercase() == title)
            .map(SongLyrics::from))
    }

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError> {
        let song = song.into_song();
        self.songs.write().await.push(song.clone());
        Ok(song)
    }
}
