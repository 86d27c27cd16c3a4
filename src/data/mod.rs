//! Database repository layer.
//!
//! Repositories own all SeaORM queries for their entity. They take `New*` /
//! `Update*` parameter models, return entity models, and surface absence as
//! `Ok(None)` so the service layer decides what absence means.

pub mod chapter;
pub mod comic;
