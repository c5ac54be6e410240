//! `BucketStore` adapters for the TUI and CLI frontends.

mod memory_store;

pub use memory_store::MemoryBucketStore;

#[cfg(feature = "json-store")]
mod json_store;

#[cfg(feature = "json-store")]
pub use json_store::JsonBucketStore;
