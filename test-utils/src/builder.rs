use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_comic_tables().build().await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to the test database schema, created after all tables.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the comic and chapter tables in dependency order.
    ///
    /// Entity-derived schemas carry no composite indexes, so the unique
    /// (comic_id, slug) index from the chapter migration is added explicitly;
    /// tests run against the same uniqueness constraint as production.
    pub fn with_comic_tables(self) -> Self {
        self.with_table(Comic).with_table(Chapter).with_index(
            Index::create()
                .name("idx_chapter_comic_id_slug")
                .table(Chapter)
                .col(entity::chapter::Column::ComicId)
                .col(entity::chapter::Column::Slug)
                .unique()
                .to_owned(),
        )
    }

    /// Builds the test context, creating all configured tables and indexes
    /// against a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
