pub mod health;
pub mod song;

pub use health::{EnvPresence, HealthResponse};
pub use song::{CreateSongRequest, NewSong, Song, SongLyrics, SongSummary};
