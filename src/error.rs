//! Error types for validation, storage, and the predictor facade

use std::path::PathBuf;
use thiserror::Error;

/// Input field checked by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StudentId,
    SchoolSatisfaction,
    AttendanceRate,
    FailedCourses,
    CommuteTime,
    DisciplinaryCases,
    HomeworkCompletion,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::StudentId => "student_id",
            Field::SchoolSatisfaction => "school_satisfaction",
            Field::AttendanceRate => "attendance_rate",
            Field::FailedCourses => "failed_courses",
            Field::CommuteTime => "commute_time_minutes",
            Field::DisciplinaryCases => "disciplinary_cases",
            Field::HomeworkCompletion => "homework_completion",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The side of a field's domain that was violated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Min(f64),
    Max(f64),
    /// Value is not a number at all, so neither side can be compared
    NotANumber,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Min(min) => write!(f, "must be at least {}", min),
            Bound::Max(max) => write!(f, "must be at most {}", max),
            Bound::NotANumber => write!(f, "must be a number"),
        }
    }
}

/// A field outside its declared domain
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} {bound} (got {actual})")]
pub struct ValidationError {
    pub field: Field,
    pub bound: Bound,
    pub actual: f64,
}

/// Infrastructure failure in the SQLite layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to prepare database directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored row for student {student_id} is unreadable: {reason}")]
    CorruptRow { student_id: i64, reason: String },
}

/// Outcome of a failed insert
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Student ID {student_id} already exists")]
    DuplicateKey { student_id: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Storage(StorageError::Sqlite(e))
    }
}

/// Errors surfaced by [`crate::predictor::Predictor`]
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Student ID {student_id} already exists")]
    DuplicateKey { student_id: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<StoreError> for PredictorError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey { student_id } => PredictorError::DuplicateKey { student_id },
            StoreError::Storage(inner) => PredictorError::Storage(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_names_field_and_bound() {
        let err = ValidationError {
            field: Field::AttendanceRate,
            bound: Bound::Max(100.0),
            actual: 120.0,
        };
        assert_eq!(err.to_string(), "attendance_rate must be at most 100 (got 120)");
    }

    #[test]
    fn test_store_duplicate_maps_to_predictor_duplicate() {
        let err: PredictorError = StoreError::DuplicateKey { student_id: 7 }.into();
        assert!(matches!(err, PredictorError::DuplicateKey { student_id: 7 }));
    }
}
