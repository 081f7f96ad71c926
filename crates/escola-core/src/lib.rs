//! Shared infrastructure helpers for the escola services.

pub mod sea_ext;
pub mod tracing;
