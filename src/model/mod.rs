//! Domain models, operation parameters, and API DTOs.
//!
//! Repositories accept the `New*`/`Update*` parameter types and return SeaORM
//! entity models; controllers convert entity models into the `*Dto` types,
//! which define the JSON wire format (camelCase, matching the public API).

pub mod api;
pub mod chapter;
pub mod comic;
