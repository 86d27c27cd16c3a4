use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::comic::{NewComic, UpdateComicFields};

pub struct ComicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comic with a generated ID and current timestamps.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created comic
    /// - `Err(DbErr)`: Database error (including unique-slug violation)
    pub async fn create(&self, comic: NewComic) -> Result<entity::comic::Model, DbErr> {
        let now = Utc::now();

        entity::comic::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(comic.title),
            slug: ActiveValue::Set(comic.slug),
            synopsis: ActiveValue::Set(comic.synopsis),
            author: ActiveValue::Set(comic.author),
            status: ActiveValue::Set(comic.status),
            cover_image_url: ActiveValue::Set(comic.cover_image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds a comic by its catalog-unique slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::comic::Model>, DbErr> {
        entity::prelude::Comic::find()
            .filter(entity::comic::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets paginated comics, newest first.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((comics, total))`: Vector of comics and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::comic::Model>, u64), DbErr> {
        let paginator = entity::prelude::Comic::find()
            .order_by_desc(entity::comic::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let comics = paginator.fetch_page(page).await?;

        Ok((comics, total))
    }

    /// Applies the provided field updates to an existing comic.
    ///
    /// Unset fields are left untouched; `updated_at` is always refreshed.
    pub async fn update(
        &self,
        comic: entity::comic::Model,
        update: UpdateComicFields,
    ) -> Result<entity::comic::Model, DbErr> {
        let mut active_model: entity::comic::ActiveModel = comic.into();

        if let Some(title) = update.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = update.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(synopsis) = update.synopsis {
            active_model.synopsis = ActiveValue::Set(synopsis);
        }
        if let Some(author) = update.author {
            active_model.author = ActiveValue::Set(author);
        }
        if let Some(status) = update.status {
            active_model.status = ActiveValue::Set(status);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a comic by ID. Chapters are deleted separately by the service
    /// before this runs.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Comic::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
