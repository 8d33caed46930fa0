//! Lyrics lookup and storage API.
//!
//! HTTP routes map onto a handful of [`store::SongStore`] queries: list,
//! substring search, lookup by id, lyrics by artist and title, and creation.

pub mod controllers;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routers;
pub mod secrets;
pub mod seed;
pub mod state;
pub mod store;

pub use error::{ApiError, ApiResult, StoreError};
pub use routers::build_router;
pub use state::AppState;
