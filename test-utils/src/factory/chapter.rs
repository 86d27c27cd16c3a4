//! Chapter factory for creating test chapter entities.

use chrono::{DateTime, Utc};
use entity::chapter::Pages;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test chapters with customizable fields.
pub struct ChapterFactory<'a> {
    db: &'a DatabaseConnection,
    comic_id: Uuid,
    title: String,
    slug: String,
    pages: Vec<String>,
    chapter_number: i32,
    release_date: DateTime<Utc>,
}

impl<'a> ChapterFactory<'a> {
    /// Creates a new ChapterFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Chapter {id}"`, slug: `"chapter-{id}"` (id auto-incremented)
    /// - pages: two placeholder locators
    /// - chapter_number: 1
    /// - release_date: now
    pub fn new(db: &'a DatabaseConnection, comic_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            comic_id,
            title: format!("Chapter {}", id),
            slug: format!("chapter-{}", id),
            pages: vec![
                format!("chapters/chapter-{}/1.png", id),
                format!("chapters/chapter-{}/2.png", id),
            ],
            chapter_number: 1,
            release_date: Utc::now(),
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

    pub fn pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn chapter_number(mut self, chapter_number: i32) -> Self {
        self.chapter_number = chapter_number;
        self
    }

    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub async fn build(self) -> Result<entity::chapter::Model, DbErr> {
        entity::chapter::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            comic_id: ActiveValue::Set(self.comic_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            pages: ActiveValue::Set(Pages(self.pages)),
            chapter_number: ActiveValue::Set(self.chapter_number),
            release_date: ActiveValue::Set(self.release_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chapter with default values for the given comic.
pub async fn create_chapter(
    db: &DatabaseConnection,
    comic_id: Uuid,
) -> Result<entity::chapter::Model, DbErr> {
    ChapterFactory::new(db, comic_id).build().await
}
