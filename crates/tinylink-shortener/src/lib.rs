//! URL shortener service implementation.
//!
//! This crate turns URLs into deterministic base62 codes (CRC-32 fingerprint,
//! probing past collisions) on top of any [`Repository`][tinylink_core::Repository].

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use service::{ShortenerService, ShortenerSettings};
pub use shortener::Shortener;
