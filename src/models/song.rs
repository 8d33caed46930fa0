use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;

/// A stored song, lyrics included.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>, // seconds
    pub lyrics: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

/// Song without lyrics, returned by list and search.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SongSummary {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
}

/// Projection returned by the artist + song lyrics lookup.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SongLyrics {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub lyrics: String,
}

impl From<&Song> for SongSummary {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            year: song.year,
            genre: song.genre.clone(),
            duration: song.duration,
        }
    }
}

impl From<&Song> for SongLyrics {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            year: song.year,
            lyrics: song.lyrics.clone(),
        }
    }
}

/// Body of `POST /api/songs`. Every field is optional at the wire level so
/// that missing required fields surface as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSongRequest {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub lyrics: Option<String>,
}

/// A validated song ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub lyrics: String,
}

impl CreateSongRequest {
    pub fn validate(self) -> Result<NewSong, ApiError> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        let title = present(self.title);
        let artist = present(self.artist);
        let lyrics = present(self.lyrics);

        match (title, artist, lyrics) {
            (Some(title), Some(artist), Some(lyrics)) => Ok(NewSong {
                title,
                artist,
                album: self.album,
                year: self.year,
                genre: self.genre,
                duration: self.duration,
                lyrics,
            }),
            (title, artist, lyrics) => {
                let missing: Vec<&str> = [
                    ("title", title.is_none()),
                    ("artist", artist.is_none()),
                    ("lyrics", lyrics.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name)
                .collect();

                Err(ApiError::Validation(format!(
                    "Title, artist, and lyrics are required (missing: {})",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl NewSong {
    /// Materialise a stored record with a fresh id and creation time.
    pub fn into_song(self) -> Song {
        Song {
            id: Uuid::new_v4(),
            title: self.title,
            artist: self.artist,
            album: self.album,
            year: self.year,
            genre: self.genre,
            duration: self.duration,
            lyrics: self.lyrics,
            created_at: Utc::now(),
        }
    }
}
