//! `SQLite` storage implementation
//!
//! Synchronous methods over an r2d2 connection pool; the async store traits
//! are implemented on top of these in `sqlite_async.rs`.

mod items;
mod settings;

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use trash_cleaner_core::db_pool_size;

use crate::error::StorageError;
use crate::migrations;

pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// `SQLite` settings and item store. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Convert a `COUNT(*)` result to `u64`.
pub(crate) fn count_to_u64(count: i64) -> Result<u64, StorageError> {
    u64::try_from(count).map_err(|e| StorageError::corrupt(format!("negative count {count}"), e))
}

/// Per-connection pragmas: concurrency settings and foreign keys for cascades.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

impl Storage {
    /// Open (or create) the database at `db_path` and bring its schema up to date.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        migrations::run_migrations(&*pool.get()?)?;

        tracing::info!(pool_size = pool_size, path = %db_path.display(), "Storage initialized");

        Ok(Self { pool })
    }
}
