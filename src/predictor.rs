//! Predictor - validate, classify, and persist student records
//!
//! This is the surface a front end talks to. It owns no state of its own
//! beyond the active rule set and a handle to the store it was given.

use std::sync::Arc;
use tracing::debug;

use crate::classifier::{Classifier, RuleSet};
use crate::error::PredictorError;
use crate::store::{SqliteStudentStore, StoreStats};
use crate::types::{Evaluation, StudentAttributes, StudentRecord};
use crate::validation::validate;

/// Composes the validator, a rule set, and a store
#[derive(Clone)]
pub struct Predictor {
    rule_set: RuleSet,
    store: Arc<SqliteStudentStore>,
}

impl Predictor {
    pub fn new(rule_set: RuleSet, store: Arc<SqliteStudentStore>) -> Self {
        Self { rule_set, store }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Validate and classify without touching the store
    pub fn evaluate(&self, attributes: &StudentAttributes) -> Result<Evaluation, PredictorError> {
        let validated = validate(attributes.clone())?;
        let evaluation = self.rule_set.classify(&validated);
        debug!(
            "Student {} evaluated as {} ({} rules)",
            attributes.student_id, evaluation.status, self.rule_set
        );
        Ok(evaluation)
    }

    /// Validate, classify, and insert
    ///
    /// The status is always recomputed here; callers cannot supply one. Input
    /// that fails validation never reaches the store.
    pub async fn save(&self, attributes: &StudentAttributes) -> Result<StudentRecord, PredictorError> {
        let validated = validate(attributes.clone())?;
        let record = StudentRecord::classify(validated, &self.rule_set);
        self.store.insert(&record).await?;
        Ok(record)
    }

    /// Evaluate and save in one step, returning the full evaluation with reasons
    pub async fn submit(&self, attributes: &StudentAttributes) -> Result<Evaluation, PredictorError> {
        let evaluation = self.evaluate(attributes)?;
        self.save(attributes).await?;
        Ok(evaluation)
    }

    /// Every stored record, ordered by student ID
    pub async fn list_all(&self) -> Result<Vec<StudentRecord>, PredictorError> {
        Ok(self.store.retrieve_all().await?)
    }

    pub async fn stats(&self) -> Result<StoreStats, PredictorError> {
        Ok(self.store.stats().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::types::{FamilyIncome, Status};

    fn predictor(rule_set: RuleSet) -> Predictor {
        let store = Arc::new(SqliteStudentStore::open_in_memory().unwrap());
        Predictor::new(rule_set, store)
    }

    fn student(student_id: i64) -> StudentAttributes {
        StudentAttributes {
            student_id,
            school_satisfaction: 4.0,
            attendance_rate: 75.0,
            failed_courses: 1,
            commute_time_minutes: 30,
            disciplinary_cases: 1,
            homework_completion: 85.0,
            family_income: Some(FamilyIncome::Low),
        }
    }

    #[test]
    fn test_evaluate_rejects_out_of_domain_input() {
        let p = predictor(RuleSet::Reasons);
        let err = p
            .evaluate(&StudentAttributes { commute_time_minutes: 500, ..student(1) })
            .unwrap_err();
        assert!(matches!(err, PredictorError::Validation(ref e) if e.field == Field::CommuteTime));
    }

    #[tokio::test]
    async fn test_invalid_input_is_never_stored() {
        let p = predictor(RuleSet::Reasons);
        let result = p.save(&StudentAttributes { homework_completion: 140.0, ..student(1) }).await;
        assert!(matches!(result, Err(PredictorError::Validation(_))));
        assert!(p.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_stores_status_from_active_rule_set() {
        // Homework of exactly 85 passes both rule sets
        let p = predictor(RuleSet::Conjunctive);
        let record = p.save(&student(3)).await.unwrap();
        assert_eq!(record.status(), Status::Promoted);

        let p = predictor(RuleSet::Conjunctive);
        let record = p
            .save(&StudentAttributes { family_income: None, ..student(3) })
            .await
            .unwrap();
        assert_eq!(record.status(), Status::DroppedOut);
    }

    #[tokio::test]
    async fn test_submit_returns_reasons_and_persists() {
        let p = predictor(RuleSet::Reasons);
        let eval = p
            .submit(&StudentAttributes { attendance_rate: 60.0, ..student(9) })
            .await
            .unwrap();
        assert_eq!(eval.status, Status::DroppedOut);
        assert_eq!(eval.reasons, vec!["Low attendance rate"]);

        let stored = p.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status(), Status::DroppedOut);
    }

    #[tokio::test]
    async fn test_duplicate_save_surfaces_named_error() {
        let p = predictor(RuleSet::Reasons);
        p.save(&student(5)).await.unwrap();

        let err = p.save(&student(5)).await.unwrap_err();
        assert!(matches!(err, PredictorError::DuplicateKey { student_id: 5 }));
        assert_eq!(p.stats().await.unwrap().total, 1);
    }
}
