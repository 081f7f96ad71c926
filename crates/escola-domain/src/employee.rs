//! Employment fields and the two employed member types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::id::EmployeeId;
use crate::member::MemberFields;
use crate::validate::{ValidationError, check_chars};

/// Standing of an employment contract.
///
/// Wire format: `u8` (0 = Active, 1 = OnLeave, 2 = Terminated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active = 0,
    OnLeave = 1,
    Terminated = 2,
}

impl EmploymentStatus {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Active),
            1 => Some(Self::OnLeave),
            2 => Some(Self::Terminated),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Contract attributes common to teachers and administrative staff.
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentFields {
    pub job_title: String,
    pub salary: f64,
    pub bank_name: String,
    pub bank_account: String,
    pub status: EmploymentStatus,
    /// Required when `status` is [`EmploymentStatus::Terminated`].
    pub terminated_on: Option<NaiveDate>,
    pub work_starts_at: NaiveTime,
    pub work_ends_at: NaiveTime,
}

impl EmploymentFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_chars("job_title", &self.job_title, 3, 50)?;
        if !(self.salary >= 0.0) {
            return Err(ValidationError::new("salary", "must be non-negative"));
        }
        check_chars("bank_name", &self.bank_name, 1, 50)?;
        check_chars("bank_account", &self.bank_account, 1, 255)?;
        if self.status == EmploymentStatus::Terminated && self.terminated_on.is_none() {
            return Err(ValidationError::new(
                "terminated_on",
                "required when status is terminated",
            ));
        }
        Ok(())
    }
}

/// A teacher; class sections reference exactly one teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: EmployeeId,
    pub member: MemberFields,
    pub employment: EmploymentFields,
}

impl Teacher {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.member.validate()?;
        self.employment.validate()
    }
}

/// Administrative staff; carries no fields beyond the shared groups.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStaff {
    pub id: EmployeeId,
    pub member: MemberFields,
    pub employment: EmploymentFields,
}

impl AdminStaff {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.member.validate()?;
        self.employment.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employment() -> EmploymentFields {
        EmploymentFields {
            job_title: "Professor de Matemática".into(),
            salary: 4800.0,
            bank_name: "Banco do Brasil".into(),
            bank_account: "12345-6".into(),
            status: EmploymentStatus::Active,
            terminated_on: None,
            work_starts_at: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            work_ends_at: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        }
    }

    #[test]
    fn should_accept_valid_employment() {
        assert!(employment().validate().is_ok());
    }

    #[test]
    fn should_reject_negative_salary() {
        let mut e = employment();
        e.salary = -1.0;
        assert_eq!(e.validate().unwrap_err().field, "salary");
    }

    #[test]
    fn should_reject_nan_salary() {
        let mut e = employment();
        e.salary = f64::NAN;
        assert_eq!(e.validate().unwrap_err().field, "salary");
    }

    #[test]
    fn should_require_termination_date_when_terminated() {
        let mut e = employment();
        e.status = EmploymentStatus::Terminated;
        assert_eq!(e.validate().unwrap_err().field, "terminated_on");
        e.terminated_on = NaiveDate::from_ymd_opt(2025, 12, 1);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn should_reject_short_job_title() {
        let mut e = employment();
        e.job_title = "TI".into();
        assert_eq!(e.validate().unwrap_err().field, "job_title");
    }

    #[test]
    fn should_convert_employment_status_wire_values() {
        for v in 0..=2u8 {
            assert_eq!(EmploymentStatus::from_u8(v).unwrap().as_u8(), v);
        }
        assert_eq!(EmploymentStatus::from_u8(3), None);
    }
}
