use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateSongRequest, Song, SongLyrics, SongSummary};
use crate::store::SongStore;

/// Song operations. Each one validates its input, performs a single store
/// call, and maps an absent record to [`ApiError::NotFound`].
#[derive(Clone)]
pub struct SongController {
    store: Arc<dyn SongStore>,
}

impl SongController {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        SongController { store }
    }

    pub async fn list_songs(&self) -> ApiResult<Vec<SongSummary>> {
        Ok(self.store.list().await?)
    }

    pub async fn search_songs(&self, q: Option<&str>) -> ApiResult<Vec<SongSummary>> {
        let q = match q {
            Some(q) if !q.is_empty() => q,
            _ => {
                return Err(ApiError::Validation(
                    "Query parameter \"q\" is required".to_string(),
                ));
            }
        };

        let songs = self.store.search(q).await?;
        debug!("search q={:?} hits={}", q, songs.len());
        Ok(songs)
    }

    /// Ids are opaque to callers, so one that is not a UUID is simply absent.
    pub async fn get_song(&self, id: &str) -> ApiResult<Song> {
        let Ok(id) = Uuid::parse_str(id) else {
            debug!("get_song with non-uuid id {:?}", id);
            return Err(ApiError::NotFound);
        };

        self.store.find_by_id(id).await?.ok_or(ApiError::NotFound)
    }

    /// `artist` and `song` must already be percent-decoded.
    pub async fn get_lyrics(&self, artist: &str, song: &str) -> ApiResult<SongLyrics> {
        self.store
            .find_lyrics(artist, song)
            .await?
            .ok_or(ApiError::NotFound)
    }

    pub async fn create_song(&self, request: CreateSongRequest) -> ApiResult<Song> {
        let new_song = request.validate()?;
        let song = self.store.insert(new_song).await?;
        info!("Created song {} ({} - {})", song.id, song.artist, song.title);
        Ok(song)
    }
}
