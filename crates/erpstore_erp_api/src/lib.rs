//! Clients for the ERP gateway services.
//!
//! `runtime` is written by hand; everything under `generated` is rendered
//! from `contracts/*.swagger.json` by `cargo xtask codegen`.

pub mod generated;
pub mod runtime;

pub use generated::*;
pub use runtime::{ApiBody, ApiClient, ApiError, ApiRequest, ApiResponse};
