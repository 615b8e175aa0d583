//! SQLite-based persistent storage for student records

use rusqlite::{params, Connection, ErrorCode};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::StoreConfig;
use crate::error::{StorageError, StoreError};
use crate::types::{FamilyIncome, Status, StudentAttributes, StudentRecord};

/// SQLite-backed student store
///
/// The connection sits behind a mutex so every statement from this process
/// runs one at a time. Clone the `Arc` around the store to share it.
pub struct SqliteStudentStore {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl SqliteStudentStore {
    /// Open (or create) the database described by `config` and ensure the schema exists
    pub async fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        let path = config.database_path.clone();

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let conn = Connection::open(&path)?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;

        if config.wal {
            conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        }

        Self::init_schema(&conn)?;
        info!("Opened student store at {}", path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Database file backing this store, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the `students` table if it does not exist. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        Self::init_schema(&conn)?;
        Ok(())
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                student_id INTEGER PRIMARY KEY,
                school_satisfaction REAL NOT NULL,
                attendance_rate REAL NOT NULL,
                failed_courses INTEGER NOT NULL,
                commute_time INTEGER NOT NULL,
                disciplinary_cases INTEGER NOT NULL,
                homework_completion REAL NOT NULL,
                family_income TEXT,
                status TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_students_status ON students(status);
        "#,
        )?;
        debug!("Student schema ready");
        Ok(())
    }

    /// Insert a classified record
    ///
    /// An existing row with the same ID is left untouched and
    /// `StoreError::DuplicateKey` is returned.
    pub async fn insert(&self, record: &StudentRecord) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        let a = record.attributes();

        let result = conn.execute(
            r#"INSERT INTO students
               (student_id, school_satisfaction, attendance_rate, failed_courses,
                commute_time, disciplinary_cases, homework_completion, family_income, status)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#,
            params![
                a.student_id,
                a.school_satisfaction,
                a.attendance_rate,
                a.failed_courses,
                a.commute_time_minutes,
                a.disciplinary_cases,
                a.homework_completion,
                a.family_income.map(|income| income.as_str()),
                record.status().as_str(),
            ],
        );

        match result {
            Ok(_) => {
                info!("Stored student {} as {}", a.student_id, record.status());
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                warn!("Rejected duplicate student ID {}", a.student_id);
                Err(StoreError::DuplicateKey {
                    student_id: a.student_id,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All stored records ordered by student ID
    pub async fn retrieve_all(&self) -> Result<Vec<StudentRecord>, StorageError> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare_cached(
            "SELECT student_id, school_satisfaction, attendance_rate, failed_courses,
                    commute_time, disciplinary_cases, homework_completion, family_income, status
             FROM students
             ORDER BY student_id ASC",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredRow {
                    student_id: row.get(0)?,
                    school_satisfaction: row.get(1)?,
                    attendance_rate: row.get(2)?,
                    failed_courses: row.get(3)?,
                    commute_time: row.get(4)?,
                    disciplinary_cases: row.get(5)?,
                    homework_completion: row.get(6)?,
                    family_income: row.get(7)?,
                    status: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(StudentRecord::try_from).collect()
    }

    /// Row counts, total and per status
    pub async fn stats(&self) -> Result<StoreStats, StorageError> {
        let conn = self.conn.lock().await;

        let (total, promoted): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(CASE WHEN status = ?1 THEN 1 ELSE 0 END), 0)
             FROM students",
            params![Status::Promoted.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(StoreStats {
            total: total as usize,
            promoted: promoted as usize,
            dropped_out: (total - promoted) as usize,
        })
    }
}

/// Raw column values before parsing the text columns
struct StoredRow {
    student_id: i64,
    school_satisfaction: f64,
    attendance_rate: f64,
    failed_courses: i64,
    commute_time: i64,
    disciplinary_cases: i64,
    homework_completion: f64,
    family_income: Option<String>,
    status: String,
}

impl TryFrom<StoredRow> for StudentRecord {
    type Error = StorageError;

    fn try_from(row: StoredRow) -> Result<Self, Self::Error> {
        let student_id = row.student_id;
        let corrupt = move |reason: String| StorageError::CorruptRow { student_id, reason };

        let family_income = row
            .family_income
            .as_deref()
            .map(str::parse::<FamilyIncome>)
            .transpose()
            .map_err(corrupt)?;
        let status = row.status.parse::<Status>().map_err(corrupt)?;

        let attributes = StudentAttributes {
            student_id: row.student_id,
            school_satisfaction: row.school_satisfaction,
            attendance_rate: row.attendance_rate,
            failed_courses: row.failed_courses,
            commute_time_minutes: row.commute_time,
            disciplinary_cases: row.disciplinary_cases,
            homework_completion: row.homework_completion,
            family_income,
        };

        Ok(StudentRecord::from_stored(attributes, status))
    }
}

/// Student table statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    pub promoted: usize,
    pub dropped_out: usize,
}
