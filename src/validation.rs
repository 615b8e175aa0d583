//! Input validation
//!
//! Every field is checked against its domain before anything is classified or
//! stored. Out-of-range values are rejected, never clamped.

use std::ops::Deref;

use crate::error::{Bound, Field, ValidationError};
use crate::types::StudentAttributes;

pub const SATISFACTION_RANGE: (f64, f64) = (1.0, 5.0);
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);
pub const FAILED_COURSES_RANGE: (i64, i64) = (0, 10);
pub const COMMUTE_MINUTES_RANGE: (i64, i64) = (0, 120);
pub const DISCIPLINARY_RANGE: (i64, i64) = (0, 10);

/// Attributes that passed [`validate`]
///
/// Only this module can construct one, so holding a `ValidatedAttributes` is
/// proof every bound was checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAttributes(StudentAttributes);

impl ValidatedAttributes {
    pub fn into_inner(self) -> StudentAttributes {
        self.0
    }
}

impl Deref for ValidatedAttributes {
    type Target = StudentAttributes;

    fn deref(&self) -> &StudentAttributes {
        &self.0
    }
}

/// Check every field and report the first violation
pub fn validate(attributes: StudentAttributes) -> Result<ValidatedAttributes, ValidationError> {
    if attributes.student_id < 1 {
        return Err(ValidationError {
            field: Field::StudentId,
            bound: Bound::Min(1.0),
            actual: attributes.student_id as f64,
        });
    }

    check_real(Field::SchoolSatisfaction, attributes.school_satisfaction, SATISFACTION_RANGE)?;
    check_real(Field::AttendanceRate, attributes.attendance_rate, PERCENT_RANGE)?;
    check_int(Field::FailedCourses, attributes.failed_courses, FAILED_COURSES_RANGE)?;
    check_int(Field::CommuteTime, attributes.commute_time_minutes, COMMUTE_MINUTES_RANGE)?;
    check_int(Field::DisciplinaryCases, attributes.disciplinary_cases, DISCIPLINARY_RANGE)?;
    check_real(Field::HomeworkCompletion, attributes.homework_completion, PERCENT_RANGE)?;

    Ok(ValidatedAttributes(attributes))
}

fn check_real(field: Field, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    let bound = if value.is_nan() {
        Bound::NotANumber
    } else if value < min {
        Bound::Min(min)
    } else if value > max {
        Bound::Max(max)
    } else {
        return Ok(());
    };

    Err(ValidationError { field, bound, actual: value })
}

fn check_int(field: Field, value: i64, (min, max): (i64, i64)) -> Result<(), ValidationError> {
    let bound = if value < min {
        Bound::Min(min as f64)
    } else if value > max {
        Bound::Max(max as f64)
    } else {
        return Ok(());
    };

    Err(ValidationError { field, bound, actual: value as f64 })
}
