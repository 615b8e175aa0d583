//! Conjunctive rule: promoted only when every condition holds

use super::Classifier;
use crate::types::{Evaluation, Status, StudentAttributes};

/// Promoted iff satisfaction > 3, attendance > 70, failed <= 2, commute <= 40,
/// disciplinary <= 2, homework > 80 and a family income bracket is known.
/// Produces no reasons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConjunctiveRules;

impl Classifier for ConjunctiveRules {
    fn classify(&self, a: &StudentAttributes) -> Evaluation {
        let promoted = a.school_satisfaction > 3.0
            && a.attendance_rate > 70.0
            && a.failed_courses <= 2
            && a.commute_time_minutes <= 40
            && a.disciplinary_cases <= 2
            && a.homework_completion > 80.0
            && a.family_income.is_some();

        Evaluation {
            status: if promoted { Status::Promoted } else { Status::DroppedOut },
            reasons: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FamilyIncome;

    fn promoted_example() -> StudentAttributes {
        StudentAttributes {
            student_id: 1,
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
    fn test_example_is_promoted_without_reasons() {
        let eval = ConjunctiveRules.classify(&promoted_example());
        assert_eq!(eval.status, Status::Promoted);
        assert!(eval.reasons.is_empty());
    }

    #[test]
    fn test_strict_bounds_fail_at_equality() {
        let base = promoted_example();
        let failing = [
            StudentAttributes { school_satisfaction: 3.0, ..base.clone() },
            StudentAttributes { attendance_rate: 70.0, ..base.clone() },
            StudentAttributes { homework_completion: 80.0, ..base.clone() },
        ];
        for input in failing {
            assert_eq!(ConjunctiveRules.classify(&input).status, Status::DroppedOut, "{:?}", input);
        }
    }

    #[test]
    fn test_inclusive_bounds_pass_at_equality() {
        let input = StudentAttributes {
            failed_courses: 2,
            commute_time_minutes: 40,
            disciplinary_cases: 2,
            homework_completion: 80.5,
            ..promoted_example()
        };
        assert_eq!(ConjunctiveRules.classify(&input).status, Status::Promoted);
    }

    #[test]
    fn test_one_over_inclusive_bound_drops() {
        let base = promoted_example();
        let failing = [
            StudentAttributes { failed_courses: 3, ..base.clone() },
            StudentAttributes { commute_time_minutes: 41, ..base.clone() },
            StudentAttributes { disciplinary_cases: 3, ..base.clone() },
        ];
        for input in failing {
            assert_eq!(ConjunctiveRules.classify(&input).status, Status::DroppedOut, "{:?}", input);
        }
    }

    #[test]
    fn test_missing_income_drops() {
        let input = StudentAttributes { family_income: None, ..promoted_example() };
        assert_eq!(ConjunctiveRules.classify(&input).status, Status::DroppedOut);
    }

    #[test]
    fn test_any_income_bracket_qualifies() {
        for income in [FamilyIncome::Low, FamilyIncome::Medium, FamilyIncome::High] {
            let input = StudentAttributes { family_income: Some(income), ..promoted_example() };
            assert!(ConjunctiveRules.classify(&input).is_promoted());
        }
    }
}
