//! Pieces shared by the HTTP layer and the binary: log initialization and
//! small response types.

pub mod types;
pub mod utils;
