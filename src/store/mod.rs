//! Persistence seam for song records.
//!
//! Every operation the router performs is exactly one call on [`SongStore`].
//! Matching is case-insensitive in all implementations, and the artist + title
//! lookup resolves duplicates to the most recently created record.
//!
//! Case folding differs for non-ASCII text: [`MemoryStore`] uses Unicode
//! lowercasing, while the Postgres store's `LOWER`/`ILIKE` follow the database
//! collation. On a database created with the `C` locale only ASCII letters
//! fold, so e.g. `É` and `é` compare unequal there.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewSong, Song, SongLyrics, SongSummary};

#[async_trait]
pub trait SongStore: Send + Sync {
    /// All songs, oldest first.
    async fn list(&self) -> Result<Vec<SongSummary>, StoreError>;

    /// Songs whose title or artist contains `needle`, oldest first.
    async fn search(&self, needle: &str) -> Result<Vec<SongSummary>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Song>, StoreError>;

    /// Exact (case-insensitive) artist and title match.
    async fn find_lyrics(&self, artist: &str, title: &str)
    -> Result<Option<SongLyrics>, StoreError>;

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError>;
}

/// Build an `ILIKE` pattern that matches `needle` literally anywhere in a
/// column. Uses `\` as the escape character.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
