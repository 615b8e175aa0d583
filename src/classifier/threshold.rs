//! Threshold rules: each failed check contributes a dropout reason

use super::Classifier;
use crate::types::{Evaluation, Status, StudentAttributes};

pub const LOW_SATISFACTION: &str = "Low school satisfaction";
pub const LOW_ATTENDANCE: &str = "Low attendance rate";
pub const TOO_MANY_FAILED: &str = "Too many failed courses";
pub const LONG_COMMUTE: &str = "Long commute time";
pub const HIGH_DISCIPLINARY: &str = "High disciplinary cases";
pub const LOW_HOMEWORK: &str = "Low homework completion";

/// Reason list reported for a promoted student
pub const NOT_APPLICABLE: &str = "N/A";

/// Dropped Out if any check fires, with one reason per fired check in a fixed order
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdRules;

impl Classifier for ThresholdRules {
    fn classify(&self, a: &StudentAttributes) -> Evaluation {
        let checks = [
            (a.school_satisfaction < 3.0, LOW_SATISFACTION),
            (a.attendance_rate < 70.0, LOW_ATTENDANCE),
            (a.failed_courses > 2, TOO_MANY_FAILED),
            (a.commute_time_minutes > 40, LONG_COMMUTE),
            (a.disciplinary_cases > 2, HIGH_DISCIPLINARY),
            (a.homework_completion < 85.0, LOW_HOMEWORK),
        ];

        let reasons: Vec<&'static str> = checks
            .into_iter()
            .filter_map(|(fired, reason)| fired.then_some(reason))
            .collect();

        if reasons.is_empty() {
            Evaluation {
                status: Status::Promoted,
                reasons: vec![NOT_APPLICABLE],
            }
        } else {
            Evaluation {
                status: Status::DroppedOut,
                reasons,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every check sits exactly on its boundary, none fire
    fn on_boundaries() -> StudentAttributes {
        StudentAttributes {
            student_id: 1,
            school_satisfaction: 3.0,
            attendance_rate: 70.0,
            failed_courses: 2,
            commute_time_minutes: 40,
            disciplinary_cases: 2,
            homework_completion: 85.0,
            family_income: None,
        }
    }

    #[test]
    fn test_boundary_values_promote() {
        let eval = ThresholdRules.classify(&on_boundaries());
        assert_eq!(eval.status, Status::Promoted);
        assert_eq!(eval.reasons, vec![NOT_APPLICABLE]);
    }

    #[test]
    fn test_single_check_yields_single_reason() {
        let base = on_boundaries();
        let cases = [
            (StudentAttributes { school_satisfaction: 2.9, ..base.clone() }, LOW_SATISFACTION),
            (StudentAttributes { attendance_rate: 69.9, ..base.clone() }, LOW_ATTENDANCE),
            (StudentAttributes { failed_courses: 3, ..base.clone() }, TOO_MANY_FAILED),
            (StudentAttributes { commute_time_minutes: 41, ..base.clone() }, LONG_COMMUTE),
            (StudentAttributes { disciplinary_cases: 3, ..base.clone() }, HIGH_DISCIPLINARY),
            (StudentAttributes { homework_completion: 84.9, ..base.clone() }, LOW_HOMEWORK),
        ];

        for (input, expected) in cases {
            let eval = ThresholdRules.classify(&input);
            assert_eq!(eval.status, Status::DroppedOut, "{}", expected);
            assert_eq!(eval.reasons, vec![expected]);
        }
    }

    #[test]
    fn test_low_satisfaction_example() {
        let input = StudentAttributes {
            student_id: 10,
            school_satisfaction: 2.0,
            attendance_rate: 80.0,
            failed_courses: 1,
            commute_time_minutes: 20,
            disciplinary_cases: 0,
            homework_completion: 90.0,
            family_income: None,
        };
        let eval = ThresholdRules.classify(&input);
        assert_eq!(eval.status, Status::DroppedOut);
        assert_eq!(eval.reasons, vec![LOW_SATISFACTION]);
    }

    #[test]
    fn test_reasons_accumulate_in_check_order() {
        let input = StudentAttributes {
            student_id: 2,
            school_satisfaction: 1.0,
            attendance_rate: 10.0,
            failed_courses: 10,
            commute_time_minutes: 120,
            disciplinary_cases: 10,
            homework_completion: 0.0,
            family_income: None,
        };
        let eval = ThresholdRules.classify(&input);
        assert_eq!(
            eval.reasons,
            vec![
                LOW_SATISFACTION,
                LOW_ATTENDANCE,
                TOO_MANY_FAILED,
                LONG_COMMUTE,
                HIGH_DISCIPLINARY,
                LOW_HOMEWORK,
            ]
        );
    }
}
