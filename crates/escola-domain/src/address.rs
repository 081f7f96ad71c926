//! Postal address entity and the Brazilian federal-unit code.

use serde::{Deserialize, Serialize};

use crate::id::AddressId;
use crate::validate::{ValidationError, check_chars, check_digits};

/// Brazilian federal unit (state / district).
///
/// Wire format: the official two-letter code, uppercase (e.g. `"RJ"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

impl Uf {
    /// The two-letter code used in storage and on the wire.
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Parse an uppercase two-letter code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "AC" => Self::Ac,
            "AL" => Self::Al,
            "AP" => Self::Ap,
            "AM" => Self::Am,
            "BA" => Self::Ba,
            "CE" => Self::Ce,
            "DF" => Self::Df,
            "ES" => Self::Es,
            "GO" => Self::Go,
            "MA" => Self::Ma,
            "MT" => Self::Mt,
            "MS" => Self::Ms,
            "MG" => Self::Mg,
            "PA" => Self::Pa,
            "PB" => Self::Pb,
            "PR" => Self::Pr,
            "PE" => Self::Pe,
            "PI" => Self::Pi,
            "RJ" => Self::Rj,
            "RN" => Self::Rn,
            "RS" => Self::Rs,
            "RO" => Self::Ro,
            "RR" => Self::Rr,
            "SC" => Self::Sc,
            "SP" => Self::Sp,
            "SE" => Self::Se,
            "TO" => Self::To,
            _ => return None,
        })
    }
}

/// A postal address, referenced by every member through a required
/// `address_id`. Deleting an address still referenced by a member is
/// rejected at the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: AddressId,
    pub city: String,
    pub state: Uf,
    /// CEP, exactly 8 digits, no separator.
    pub postal_code: String,
    pub street: String,
    pub number: i32,
    pub complement: Option<String>,
}

impl Address {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_chars("city", &self.city, 1, 100)?;
        check_digits("postal_code", &self.postal_code, 8)?;
        check_chars("street", &self.street, 3, 300)?;
        if self.number <= 0 {
            return Err(ValidationError::new("number", "must be positive"));
        }
        if let Some(complement) = &self.complement {
            check_chars("complement", complement, 0, 50)?;
        }
        Ok(())
    }
}
