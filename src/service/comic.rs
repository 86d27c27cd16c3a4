use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    blob::BlobStore,
    data::{chapter::ChapterRepository, comic::ComicRepository},
    error::AppError,
    ingest::UploadOrchestrator,
    model::comic::{parse_status, CreateComicParams, NewComic, UpdateComicDto, UpdateComicFields},
};

pub struct ComicService<'a> {
    db: &'a DatabaseConnection,
    store: Arc<dyn BlobStore>,
}

impl<'a> ComicService<'a> {
    pub fn new(db: &'a DatabaseConnection, store: Arc<dyn BlobStore>) -> Self {
        Self { db, store }
    }

    /// Gets paginated comics, newest first.
    ///
    /// # Arguments
    /// - `page`: 1-based page number as supplied by the client
    /// - `per_page`: Number of items per page
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::comic::Model>, u64), AppError> {
        let repo = ComicRepository::new(self.db);

        let (comics, total) = repo.get_paginated(page.saturating_sub(1), per_page).await?;

        Ok((comics, total))
    }

    /// Gets a comic by slug, or 404.
    pub async fn get_by_slug(&self, slug: &str) -> Result<entity::comic::Model, AppError> {
        ComicRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Comic not found".to_string()))
    }

    /// Creates a comic, uploading its cover image first.
    ///
    /// The slug-conflict check runs before the cover touches the blob store so
    /// a duplicate request wastes no upload. The cover goes through the same
    /// retrying orchestrator as chapter pages.
    pub async fn create(&self, params: CreateComicParams) -> Result<entity::comic::Model, AppError> {
        let repo = ComicRepository::new(self.db);

        if repo.find_by_slug(&params.slug).await?.is_some() {
            return Err(AppError::Conflict(
                "A comic with that slug already exists".to_string(),
            ));
        }

        let namespace = format!("comics/{}/cover", params.slug);
        let locators = UploadOrchestrator::new(Arc::clone(&self.store))
            .upload_batch(&namespace, std::slice::from_ref(&params.cover))
            .await?;

        let comic = repo
            .create(NewComic {
                title: params.title,
                slug: params.slug,
                synopsis: params.synopsis,
                author: params.author,
                status: params.status,
                cover_image_url: locators.into_iter().next().unwrap_or_default(),
            })
            .await?;

        info!(slug = comic.slug, "created comic");

        Ok(comic)
    }

    /// Updates a comic found by slug.
    ///
    /// A slug change is checked for conflicts against the rest of the catalog;
    /// an unknown status string is a validation error.
    pub async fn update(
        &self,
        slug: &str,
        update: UpdateComicDto,
    ) -> Result<entity::comic::Model, AppError> {
        let repo = ComicRepository::new(self.db);

        let comic = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Comic not found".to_string()))?;

        if let Some(new_slug) = update.slug.as_deref() {
            if new_slug != slug && repo.find_by_slug(new_slug).await?.is_some() {
                return Err(AppError::Conflict(
                    "Slug is already used by another comic".to_string(),
                ));
            }
        }

        let status = update
            .status
            .map(|s| {
                parse_status(&s)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown comic status '{s}'")))
            })
            .transpose()?;

        let comic = repo
            .update(
                comic,
                UpdateComicFields {
                    title: update.title,
                    slug: update.slug,
                    synopsis: update.synopsis,
                    author: update.author,
                    status,
                },
            )
            .await?;

        Ok(comic)
    }

    /// Deletes a comic and all of its chapters.
    ///
    /// The chapter delete is explicit rather than relying on the FK cascade,
    /// matching the documented lifecycle: chapters go first, then the comic.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        let comic = self.get_by_slug(slug).await?;

        let removed = ChapterRepository::new(self.db)
            .delete_by_comic(comic.id)
            .await?;
        ComicRepository::new(self.db).delete(comic.id).await?;

        info!(slug, chapters = removed, "deleted comic");

        Ok(())
    }
}
