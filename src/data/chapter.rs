use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::chapter::NewChapter;

pub struct ChapterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new chapter row with its ordered page-locator list.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created chapter
    /// - `Err(DbErr)`: Database error (including (comic_id, slug) uniqueness
    ///   violation)
    pub async fn create(&self, chapter: NewChapter) -> Result<entity::chapter::Model, DbErr> {
        entity::chapter::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            comic_id: ActiveValue::Set(chapter.comic_id),
            title: ActiveValue::Set(chapter.title),
            slug: ActiveValue::Set(chapter.slug),
            pages: ActiveValue::Set(entity::chapter::Pages(chapter.pages)),
            chapter_number: ActiveValue::Set(chapter.chapter_number),
            release_date: ActiveValue::Set(chapter.release_date),
        }
        .insert(self.db)
        .await
    }

    /// Finds a chapter by slug within one comic.
    pub async fn find_by_slug_and_comic(
        &self,
        slug: &str,
        comic_id: Uuid,
    ) -> Result<Option<entity::chapter::Model>, DbErr> {
        entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::Slug.eq(slug))
            .filter(entity::chapter::Column::ComicId.eq(comic_id))
            .one(self.db)
            .await
    }

    /// Gets paginated chapters across all comics, newest release first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::chapter::Model>, u64), DbErr> {
        let paginator = entity::prelude::Chapter::find()
            .order_by_desc(entity::chapter::Column::ReleaseDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let chapters = paginator.fetch_page(page).await?;

        Ok((chapters, total))
    }

    /// Gets paginated chapters of one comic in chapter-number order.
    ///
    /// # Arguments
    /// - `comic_id`: Parent comic ID
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((chapters, total))`: Vector of chapters and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_comic_paginated(
        &self,
        comic_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::chapter::Model>, u64), DbErr> {
        let paginator = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::ComicId.eq(comic_id))
            .order_by_asc(entity::chapter::Column::ChapterNumber)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let chapters = paginator.fetch_page(page).await?;

        Ok((chapters, total))
    }

    /// Counts the chapters of a comic. Used to assign the next sequential
    /// chapter number at creation time.
    pub async fn count_by_comic(&self, comic_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::ComicId.eq(comic_id))
            .count(self.db)
            .await
    }

    /// Deletes every chapter of a comic, returning the number removed.
    pub async fn delete_by_comic(&self, comic_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Chapter::delete_many()
            .filter(entity::chapter::Column::ComicId.eq(comic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
