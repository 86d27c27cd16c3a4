//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Factories handle foreign
//! key relationships so tests stay concise.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let comic = factory::comic::create_comic(&db).await?;
//! let chapter = factory::chapter::ChapterFactory::new(&db, comic.id)
//!     .slug("chapter-1")
//!     .pages(vec!["1.png".into(), "2.png".into()])
//!     .build()
//!     .await?;
//! ```

pub mod chapter;
pub mod comic;
pub mod helpers;
