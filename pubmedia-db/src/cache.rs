//! The on-disk metadata cache.

use std::fs;
use std::path::{Path, PathBuf};

use pubmedia_core::{PublicationRecord, TranslationRecord};
use rusqlite::Connection;

use crate::error::StoreError;
use crate::table::Table;

/// File name of the cache inside the profile directory.
pub const CACHE_FILE_NAME: &str = "cache.db";

/// One connection, opened once per process, with the publication and
/// translation tables bound to it.
///
/// The connection runs in autocommit mode, so every statement is durable on
/// its own and the handle never needs an explicit close.
pub struct CacheDatabase {
    conn: Connection,
    path: Option<PathBuf>,
}

impl CacheDatabase {
    /// Open or create the cache at `path`, creating the parent directory and
    /// both tables if they are missing.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        log::debug!("cache database: {}", path.display());
        let conn = Connection::open(path)?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open an in-memory cache with both tables. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self, StoreError> {
        let db = Self { conn, path };
        db.publications().ensure()?;
        db.translations().ensure()?;
        Ok(db)
    }

    pub fn publications(&self) -> Table<'_, PublicationRecord> {
        Table::new(&self.conn)
    }

    pub fn translations(&self) -> Table<'_, TranslationRecord> {
        Table::new(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Location of the cache file, or `None` for an in-memory cache.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Delete the cache file. The next [`CacheDatabase::open`] recreates it.
///
/// The caller must hold the only handle to the cache; nothing here checks for
/// other open connections. Returns `true` if a file was removed.
pub fn clear_cache_file(path: &Path) -> Result<bool, StoreError> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::info!("removed cache {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
