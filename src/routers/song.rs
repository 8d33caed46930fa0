use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::{CreateSongRequest, Song, SongLyrics, SongSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Path segments of `/api/lyrics/{artist}/{song}`, percent-decoded by the
/// extractor.
#[derive(Debug, Deserialize)]
pub struct LyricsPath {
    pub artist: String,
    pub song: String,
}

pub fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/api/songs", get(list_songs_route).post(create_song_route))
        .route("/api/songs/search", get(search_songs_route))
        .route("/api/songs/{id}", get(song_by_id_route))
        .route("/api/lyrics/{artist}/{song}", get(lyrics_route))
}

pub async fn list_songs_route(State(state): State<AppState>) -> ApiResult<Json<Vec<SongSummary>>> {
    state.songs.list_songs().await.map(Json)
}

pub async fn search_songs_route(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Json<Vec<SongSummary>>> {
    state.songs.search_songs(params.q.as_deref()).await.map(Json)
}

pub async fn song_by_id_route(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<Song>> {
    state.songs.get_song(&id).await.map(Json)
}

pub async fn lyrics_route(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<LyricsPath>,
) -> ApiResult<Json<SongLyrics>> {
    state
        .songs
        .get_lyrics(&path.artist, &path.song)
        .await
        .map(Json)
}

pub async fn create_song_route(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateSongRequest>,
) -> ApiResult<(StatusCode, Json<Song>)> {
    let song = state.songs.create_song(body).await?;
    Ok((StatusCode::CREATED, Json(song)))
}
