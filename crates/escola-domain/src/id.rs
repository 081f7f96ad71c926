//! Newtype wrappers for domain identifiers.
//!
//! All identifiers are client-generated UUIDv4, assigned when the domain
//! value is constructed. The caller therefore always knows the key of a
//! record it staged, before the unit of work commits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Mint a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

entity_id! {
    /// Identifies a postal address.
    AddressId
}

entity_id! {
    /// Identifies a student (the registration id, "matrícula"). Distinct
    /// from the student's natural keys (cpf, rg, email, phone).
    StudentId
}

entity_id! {
    /// Identifies an employee (teacher or administrative staff).
    EmployeeId
}

entity_id! {
    /// Identifies a class section.
    SectionId
}

entity_id! {
    /// Identifies a student's enrollment in a class section.
    EnrollmentId
}

entity_id! {
    /// Identifies a login account.
    AccountId
}
