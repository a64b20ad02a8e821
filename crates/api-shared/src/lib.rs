//! # API Shared
//!
//! Shared definitions for the NAMASTE lookup APIs.
//!
//! Contains:
//! - Wire response types with OpenAPI schemas (`wire` module)
//! - Shared services like `HealthService`

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
