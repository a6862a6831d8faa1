//! SeaORM entities for the enrollment schema (`divisiones`, `carreras`,
//! `usuarios`, `inscripciones`) plus connection helpers.

pub mod errors;
pub mod db;
pub mod division;
pub mod major;
pub mod user;
pub mod enrollment;
