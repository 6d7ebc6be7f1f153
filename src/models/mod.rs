//! Backend payloads and the dashboard view model.

pub mod dashboard;
pub mod location;
pub mod pagination;
pub mod stats;
pub mod user;
