//! HTTP surface of the Kinyarwanda speech service.
//!
//! Two endpoints do the work: `POST /generate` synthesizes speech from text
//! (running the numeral rewrite pipeline first) and `POST /transcribe`
//! recognizes speech from uploaded audio. Models are loaded once at startup
//! and shared through [`state::AppState`].

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
