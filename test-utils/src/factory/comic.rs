//! Comic factory for creating test comic entities.

use chrono::{DateTime, Utc};
use entity::comic::ComicStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test comics with customizable fields.
///
/// Defaults give every comic a unique title and slug, so multiple comics can
/// be created in one test without colliding on the unique slug column.
pub struct ComicFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    synopsis: String,
    author: String,
    status: ComicStatus,
    cover_image_url: String,
    created_at: DateTime<Utc>,
}

impl<'a> ComicFactory<'a> {
    /// Creates a new ComicFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Comic {id}"`, slug: `"comic-{id}"` (id auto-incremented)
    /// - synopsis: `"Test synopsis"`, author: `"Test Author"`
    /// - status: `Ongoing`
    /// - cover_image_url: a placeholder locator
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Comic {}", id),
            slug: format!("comic-{}", id),
            synopsis: "Test synopsis".to_string(),
            author: "Test Author".to_string(),
            status: ComicStatus::Ongoing,
            cover_image_url: format!("comics/comic-{}/cover/cover.png", id),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn status(mut self, status: ComicStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, useful for testing newest-first ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::comic::Model, DbErr> {
        entity::comic::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            synopsis: ActiveValue::Set(self.synopsis),
            author: ActiveValue::Set(self.author),
            status: ActiveValue::Set(self.status),
            cover_image_url: ActiveValue::Set(self.cover_image_url),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comic with default values.
pub async fn create_comic(db: &DatabaseConnection) -> Result<entity::comic::Model, DbErr> {
    ComicFactory::new(db).build().await
}
