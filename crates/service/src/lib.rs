//! Service layer for the enrollment API.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Framework independent: the HTTP layer only maps results to responses.

pub mod errors;
pub mod auth;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
