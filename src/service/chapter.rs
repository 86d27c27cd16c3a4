use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    blob::BlobStore,
    data::{chapter::ChapterRepository, comic::ComicRepository},
    error::AppError,
    ingest::{page_order, UploadOrchestrator},
    model::chapter::{CreateChapterParams, NewChapter},
};

pub struct ChapterService<'a> {
    db: &'a DatabaseConnection,
    store: Arc<dyn BlobStore>,
}

impl<'a> ChapterService<'a> {
    pub fn new(db: &'a DatabaseConnection, store: Arc<dyn BlobStore>) -> Self {
        Self { db, store }
    }

    /// Gets paginated chapters across all comics, newest release first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::chapter::Model>, u64), AppError> {
        let (chapters, total) = ChapterRepository::new(self.db)
            .get_paginated(page.saturating_sub(1), per_page)
            .await?;

        Ok((chapters, total))
    }

    /// Gets paginated chapters of one comic, identified by slug.
    pub async fn get_by_comic_slug(
        &self,
        comic_slug: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::chapter::Model>, u64), AppError> {
        let comic = self.find_comic(comic_slug).await?;

        let (chapters, total) = ChapterRepository::new(self.db)
            .get_by_comic_paginated(comic.id, page.saturating_sub(1), per_page)
            .await?;

        Ok((chapters, total))
    }

    /// Gets a chapter by slug within a comic, returning the parent comic too
    /// so the response can embed its title and slug.
    pub async fn get_by_slug(
        &self,
        comic_slug: &str,
        chapter_slug: &str,
    ) -> Result<(entity::chapter::Model, entity::comic::Model), AppError> {
        let comic = self.find_comic(comic_slug).await?;

        let chapter = ChapterRepository::new(self.db)
            .find_by_slug_and_comic(chapter_slug, comic.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

        Ok((chapter, comic))
    }

    /// Creates a chapter by running the ingestion pipeline.
    ///
    /// Preconditions are checked before any blob I/O: the parent comic must
    /// exist and the chapter slug must be free within it, so a duplicate or
    /// misaddressed request never uploads anything. Then the batch is sorted
    /// into reading order, uploaded atomically from the caller's point of
    /// view, and persisted with the next sequential chapter number.
    ///
    /// The count-then-insert chapter numbering can race with a concurrent
    /// creation for the same comic; the unique (comic_id, slug) index keeps
    /// duplicate slugs out regardless.
    pub async fn create(
        &self,
        comic_slug: &str,
        params: CreateChapterParams,
    ) -> Result<entity::chapter::Model, AppError> {
        if params.files.is_empty() {
            return Err(AppError::BadRequest("No images were uploaded".to_string()));
        }

        let comic = self.find_comic(comic_slug).await?;

        let repo = ChapterRepository::new(self.db);
        if repo
            .find_by_slug_and_comic(&params.slug, comic.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A chapter with that slug already exists".to_string(),
            ));
        }

        let mut files = params.files;
        page_order::sort_into_reading_order(&mut files);

        let namespace = format!("comics/{}/chapters/{}", comic.slug, params.slug);
        let pages = UploadOrchestrator::new(Arc::clone(&self.store))
            .upload_batch(&namespace, &files)
            .await?;

        let chapter_number = repo.count_by_comic(comic.id).await? as i32 + 1;

        let chapter = repo
            .create(NewChapter {
                comic_id: comic.id,
                title: params.title,
                slug: params.slug,
                pages,
                chapter_number,
                release_date: Utc::now(),
            })
            .await?;

        info!(
            comic = comic.slug,
            chapter = chapter.slug,
            pages = chapter.pages.0.len(),
            "created chapter"
        );

        Ok(chapter)
    }

    async fn find_comic(&self, slug: &str) -> Result<entity::comic::Model, AppError> {
        ComicRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Comic not found".to_string()))
    }
}
