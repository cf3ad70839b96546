//! Shared helpers for integration tests.

use std::path::PathBuf;

use cosmos_menu::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// SQLite database in a temporary directory with every migration applied.
///
/// The directory and database files are removed when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create connection pool");
        run_migrations(&pool).expect("run migrations");
        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
