//! Persistent student record storage
//!
//! Provides:
//! - SQLite-backed `students` table keyed by student ID
//! - Insert that rejects duplicate IDs instead of upserting
//! - Full-scan retrieval and per-status counts

pub mod sqlite;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use sqlite::{SqliteStudentStore, StoreStats};

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// How long to wait on a lock held by another process (milliseconds)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Use WAL journaling
    #[serde(default = "default_true")]
    pub wal: bool,
}

fn default_database_path() -> PathBuf {
    crate::config::data_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("student_data.db")
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
            wal: true,
        }
    }
}

impl StoreConfig {
    /// Default settings pointed at a specific file
    pub fn at(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }
}
