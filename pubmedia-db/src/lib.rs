//! SQLite persistence layer for the publication metadata cache.
//!
//! Provides a generic partial-match table over any [`Record`] layout and the
//! [`CacheDatabase`] facade that binds the publication and translation tables
//! to one connection (via rusqlite with bundled feature).
//!
//! [`Record`]: pubmedia_core::Record

pub mod cache;
pub mod error;
pub mod table;

pub use cache::{clear_cache_file, CacheDatabase, CACHE_FILE_NAME};
pub use error::StoreError;
pub use table::Table;
