//! Customer listing and status DTOs
//!
//! Customer rows come from tables shared with the storefront, so they are
//! passed through as JSON objects rather than mapped onto a fixed struct.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListCustomersQuery {
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerStatusRequest {
    pub is_active: bool,
}
