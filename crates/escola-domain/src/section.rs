//! Class sections and the enrollment link between students and sections.

use chrono::{NaiveDate, NaiveTime};

use crate::id::{EmployeeId, EnrollmentId, SectionId, StudentId};
use crate::student::SchoolPeriod;
use crate::validate::{ValidationError, check_chars};

/// A taught offering of a subject for a school period, run by one teacher
/// over a date window with a fixed daily time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSection {
    pub id: SectionId,
    pub teacher_id: EmployeeId,
    pub subject: String,
    pub period: SchoolPeriod,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub class_starts_at: NaiveTime,
    pub class_ends_at: NaiveTime,
}

impl ClassSection {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_chars("subject", &self.subject, 3, 50)?;
        if self.starts_on > self.ends_on {
            return Err(ValidationError::new(
                "starts_on",
                "must not be after ends_on",
            ));
        }
        if self.class_starts_at >= self.class_ends_at {
            return Err(ValidationError::new(
                "class_starts_at",
                "must be before class_ends_at",
            ));
        }
        Ok(())
    }
}

/// The record that a student attends a class section, carrying the grade.
/// At most one enrollment may exist per (student, section) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub section_id: SectionId,
    pub grade: f64,
}

impl Enrollment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.grade >= 0.0) {
            return Err(ValidationError::new("grade", "must be non-negative"));
        }
        Ok(())
    }
}

/// Mean grade over a student's enrollments; `None` when there are none.
pub fn average_grade(enrollments: &[Enrollment]) -> Option<f64> {
    if enrollments.is_empty() {
        return None;
    }
    let sum: f64 = enrollments.iter().map(|e| e.grade).sum();
    Some(sum / enrollments.len() as f64)
}
