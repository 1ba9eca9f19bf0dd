//! Storage backends for the tinylink shortener.
//!
//! Only the in-process backend exists: mappings live for the lifetime of the
//! process and are dropped with it.

pub mod memory;

pub use memory::InMemoryRepository;
pub use tinylink_core::repository::{ReadRepository, Repository, Result};
pub use tinylink_core::StorageError;
