//! Roster service core: school members, addresses, class sections,
//! enrollments, and login accounts behind staged, transactional
//! repositories.

pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
