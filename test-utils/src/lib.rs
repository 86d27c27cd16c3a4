//! Comicshelf Test Utils
//!
//! Shared testing utilities for the comicshelf backend. Provides a builder for
//! test contexts backed by in-memory SQLite and factories for creating comic
//! and chapter rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_comic_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_comic_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let comic = test_utils::factory::comic::create_comic(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
