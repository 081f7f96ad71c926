//! Student entity and its school-life value enums.

use serde::{Deserialize, Serialize};

use crate::id::StudentId;
use crate::member::MemberFields;
use crate::validate::ValidationError;

/// School year the student attends.
///
/// Wire format: `u8` 1-12 — years 1-9 of ensino fundamental, then years
/// 1-3 of ensino médio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolPeriod {
    Fundamental1 = 1,
    Fundamental2 = 2,
    Fundamental3 = 3,
    Fundamental4 = 4,
    Fundamental5 = 5,
    Fundamental6 = 6,
    Fundamental7 = 7,
    Fundamental8 = 8,
    Fundamental9 = 9,
    Medio1 = 10,
    Medio2 = 11,
    Medio3 = 12,
}

impl SchoolPeriod {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            1 => Self::Fundamental1,
            2 => Self::Fundamental2,
            3 => Self::Fundamental3,
            4 => Self::Fundamental4,
            5 => Self::Fundamental5,
            6 => Self::Fundamental6,
            7 => Self::Fundamental7,
            8 => Self::Fundamental8,
            9 => Self::Fundamental9,
            10 => Self::Medio1,
            11 => Self::Medio2,
            12 => Self::Medio3,
            _ => return None,
        })
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Daily shift a student attends classes in.
///
/// Wire format: `u8` (0 = Morning, 1 = Afternoon, 2 = Night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassShift {
    Morning = 0,
    Afternoon = 1,
    Night = 2,
}

impl ClassShift {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Morning),
            1 => Some(Self::Afternoon),
            2 => Some(Self::Night),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Standing of a student's registration at the school.
///
/// Wire format: `u8` (0 = Active, 1 = OnHold, 2 = Graduated, 3 = Dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Active = 0,
    OnHold = 1,
    Graduated = 2,
    Dropped = 3,
}

impl EnrollmentStatus {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Active),
            1 => Some(Self::OnHold),
            2 => Some(Self::Graduated),
            3 => Some(Self::Dropped),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A student. The average grade is never stored on the record; it is
/// derived from the student's enrollments on demand (see
/// [`crate::section::average_grade`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Registration id ("matrícula").
    pub id: StudentId,
    pub member: MemberFields,
    pub period: SchoolPeriod,
    pub status: EnrollmentStatus,
    pub shift: ClassShift,
}

impl Student {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.member.validate()
    }
}
