//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the pure building blocks (base62 encoding and CRC-32
//! fingerprints), the validated domain types, and the repository traits
//! shared by the store and the shortener service.

pub mod base62;
pub mod error;
pub mod fingerprint;
pub mod original_url;
pub mod repository;
pub mod shortcode;

pub use error::{CoreError, StorageError};
pub use original_url::OriginalUrl;
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
