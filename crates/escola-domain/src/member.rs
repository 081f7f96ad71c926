//! Fields shared by every natural person tracked by the system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::id::AddressId;
use crate::validate::{ValidationError, check_chars, check_digits, check_email};

/// Registered sex of a member.
///
/// Wire format: `u8` (0 = Female, 1 = Male).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female = 0,
    Male = 1,
}

impl Sex {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Female),
            1 => Some(Self::Male),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Person attributes common to students, teachers, and administrative
/// staff. Concrete member types embed this group; natural-key uniqueness
/// (cpf, rg, email, phone) applies per concrete type, not globally.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberFields {
    /// National id (CPF), exactly 11 characters.
    pub cpf: String,
    /// Secondary id (RG), 8-9 characters.
    pub rg: String,
    pub full_name: String,
    pub email: String,
    /// Exactly 11 digits, DDD + number.
    pub phone: String,
    pub birth_date: NaiveDate,
    /// Date the member joined the school.
    pub joined_at: NaiveDate,
    pub sex: Sex,
    /// Required reference to the member's address.
    pub address_id: AddressId,
    /// The referenced address when eagerly loaded; `None` means not loaded.
    pub address: Option<Address>,
}

impl MemberFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_chars("cpf", &self.cpf, 11, 11)?;
        check_chars("rg", &self.rg, 8, 9)?;
        check_chars("full_name", &self.full_name, 3, 255)?;
        check_email("email", &self.email)?;
        check_digits("phone", &self.phone, 11)?;
        Ok(())
    }
}
