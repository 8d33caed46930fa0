//! Demo catalogue used by the `seed` binary and by `SONG_STORE=memory`.

use crate::models::NewSong;

pub fn demo_songs() -> Vec<NewSong> {
    vec![NewSong {
        title: "Yellow".to_string(),
        artist: "Coldplay".to_string(),
        album: Some("Parachutes".to_string()),
        year: Some(2000),
        genre: Some("Alternative Rock".to_string()),
        duration: Some(269), // 4:29
        lyrics: "Look at the stars\nLook how they shine for you".to_string(),
    }]
}
