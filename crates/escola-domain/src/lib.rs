//! Domain types for the school roster service.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `domain/` layers and test fixtures; never in `infra/`.

pub mod account;
pub mod address;
pub mod employee;
pub mod id;
pub mod member;
pub mod options;
pub mod section;
pub mod student;
pub mod validate;
