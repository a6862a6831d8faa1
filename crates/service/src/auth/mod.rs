//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration writes a user and its pending enrollment atomically; login
//! only succeeds for approved enrollments and always issues a bearer token.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;
pub mod token;

pub use service::AuthService;
