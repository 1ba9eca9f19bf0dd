//! HTTP gateway for the tinylink shortener.
//!
//! Thin transport over [`Shortener`][tinylink_shortener::Shortener]: it parses
//! requests, calls the service and maps its errors onto status codes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
