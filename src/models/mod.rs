//! Row models and request DTOs
//!
//! Responses are the rows themselves; there is no envelope.

pub mod activity;
pub mod customer;
pub mod gallery;

// Re-export commonly used types
pub use activity::*;
pub use customer::*;
pub use gallery::*;
