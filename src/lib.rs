//! Dropout Predictor Library
//!
//! Classifies a student as "Promoted" or "Dropped Out" from a handful of
//! attributes and persists each classified record to SQLite:
//! - Two selectable rule sets (threshold checks with reasons, or a single
//!   conjunctive promotion rule)
//! - Domain validation before anything is classified or stored
//! - Append-only student table that rejects duplicate IDs
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dropout_predictor::{Predictor, RuleSet, SqliteStudentStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStudentStore::open(&StoreConfig::at("students.db")).await?;
//!     let predictor = Predictor::new(RuleSet::Reasons, Arc::new(store));
//!     let evaluation = predictor.submit(&attributes).await?;
//!     println!("{}", evaluation.status);
//!     Ok(())
//! }
//! ```

// Core modules (order matters for cross-module dependencies)
pub mod types;
pub mod error;
pub mod validation;
pub mod classifier;
pub mod store;
pub mod predictor;
pub mod config;
pub mod cli;

// Re-export commonly used types for convenience
pub use types::{Evaluation, FamilyIncome, Status, StudentAttributes, StudentRecord};

pub use error::{Bound, Field, PredictorError, StorageError, StoreError, ValidationError};

pub use validation::{validate, ValidatedAttributes};

pub use classifier::{Classifier, ConjunctiveRules, RuleSet, ThresholdRules};

pub use store::{SqliteStudentStore, StoreConfig, StoreStats};

pub use predictor::Predictor;

pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Student Dropout Predictor", NAME, VERSION)
}
