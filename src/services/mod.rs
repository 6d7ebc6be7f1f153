//! Business logic services.

pub mod backend;
pub mod dashboard;
