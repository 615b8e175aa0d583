//! Shared types used across modules
//!
//! Student attributes, the derived promotion status, and the stored record
//! live here so the classifier, validator and store can all depend on them
//! without depending on each other.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Family income bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FamilyIncome {
    Low,
    Medium,
    High,
}

impl FamilyIncome {
    /// Column value used in the `students` table
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyIncome::Low => "low",
            FamilyIncome::Medium => "medium",
            FamilyIncome::High => "high",
        }
    }
}

impl std::fmt::Display for FamilyIncome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyIncome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(FamilyIncome::Low),
            "medium" => Ok(FamilyIncome::Medium),
            "high" => Ok(FamilyIncome::High),
            other => Err(format!("unknown family income '{}'", other)),
        }
    }
}

/// Classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Promoted")]
    Promoted,
    #[serde(rename = "Dropped Out")]
    DroppedOut,
}

impl Status {
    /// Label shown to users and persisted in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Promoted => "Promoted",
            Status::DroppedOut => "Dropped Out",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Promoted" => Ok(Status::Promoted),
            "Dropped Out" => Ok(Status::DroppedOut),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Raw attributes supplied by a caller, not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAttributes {
    pub student_id: i64,
    /// 1 to 5
    pub school_satisfaction: f64,
    /// Percentage, 0 to 100
    pub attendance_rate: f64,
    pub failed_courses: i64,
    pub commute_time_minutes: i64,
    pub disciplinary_cases: i64,
    /// Percentage, 0 to 100
    pub homework_completion: f64,
    #[serde(default)]
    pub family_income: Option<FamilyIncome>,
}

/// Result of running a rule set over a student's attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub status: Status,
    /// Human-readable explanations. Empty for rule sets that don't produce them.
    pub reasons: Vec<&'static str>,
}

impl Evaluation {
    pub fn is_promoted(&self) -> bool {
        self.status == Status::Promoted
    }
}

/// A persisted student row: attributes plus the status computed at insert time
///
/// There is no public constructor taking a status. Records come either from
/// [`StudentRecord::classify`] over validated attributes, or back out of the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    #[serde(flatten)]
    attributes: StudentAttributes,
    status: Status,
}

impl StudentRecord {
    /// Build a record by classifying validated attributes
    pub fn classify<C>(attributes: crate::validation::ValidatedAttributes, classifier: &C) -> Self
    where
        C: crate::classifier::Classifier + ?Sized,
    {
        let status = classifier.classify(&attributes).status;
        Self {
            attributes: attributes.into_inner(),
            status,
        }
    }

    /// Rehydrate a row read from the store
    pub(crate) fn from_stored(attributes: StudentAttributes, status: Status) -> Self {
        Self { attributes, status }
    }

    pub fn student_id(&self) -> i64 {
        self.attributes.student_id
    }

    pub fn attributes(&self) -> &StudentAttributes {
        &self.attributes
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip() {
        for status in [Status::Promoted, Status::DroppedOut] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert!("dropped".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&Status::DroppedOut).unwrap();
        assert_eq!(json, "\"Dropped Out\"");
    }

    #[test]
    fn test_family_income_parse_is_case_insensitive() {
        assert_eq!("Medium".parse::<FamilyIncome>().unwrap(), FamilyIncome::Medium);
        assert!("unknown".parse::<FamilyIncome>().is_err());
    }
}
