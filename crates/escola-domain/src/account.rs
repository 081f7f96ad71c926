//! Login accounts, one concrete type per member role.
//!
//! Accounts are deactivated rather than deleted; no account repository
//! exposes a delete operation.

use crate::id::{AccountId, EmployeeId, StudentId};
use crate::validate::{ValidationError, check_email};

/// Credential fields shared by every account type. Password hashing itself
/// happens in the authentication layer; this model only stores the result.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFields {
    pub id: AccountId,
    /// Unique within the account's role type.
    pub email: String,
    pub password_hash: String,
    pub salt: String,
}

impl AccountFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_email("email", &self.email)?;
        if self.password_hash.is_empty() {
            return Err(ValidationError::new("password_hash", "must not be empty"));
        }
        if self.salt.is_empty() {
            return Err(ValidationError::new("salt", "must not be empty"));
        }
        Ok(())
    }
}

/// Login account of a student; 1:1 with the student record.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAccount {
    pub account: AccountFields,
    pub student_id: StudentId,
}

impl StudentAccount {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.account.validate()
    }
}

/// Login account of a teacher; 1:1 with the teacher record.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherAccount {
    pub account: AccountFields,
    pub teacher_id: EmployeeId,
}

impl TeacherAccount {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.account.validate()
    }
}

/// Login account of an administrative staff member; 1:1 with the record.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStaffAccount {
    pub account: AccountFields,
    pub staff_id: EmployeeId,
}

impl AdminStaffAccount {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.account.validate()
    }
}

/// System administrator account with no member backing.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    pub account: AccountFields,
}

impl AdminAccount {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.account.validate()
    }
}
