//! Read-only academic catalog: divisions and the majors offered by each.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CatalogService;
