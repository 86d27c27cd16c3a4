use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{ingest::PageFile, model::api::PaginationDto};

/// Chapter as exposed by the API.
///
/// `pages` is the reading-order list of page-image locators produced by the
/// ingestion pipeline. `comic` is populated on single-chapter lookups.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub id: Uuid,
    pub comic_id: Uuid,
    pub title: String,
    pub slug: String,
    pub pages: Vec<String>,
    pub chapter_number: i32,
    pub release_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comic: Option<ComicSummaryDto>,
}

/// Parent-comic summary embedded in single-chapter responses.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComicSummaryDto {
    pub title: String,
    pub slug: String,
}

impl ChapterDto {
    pub fn from_entity(chapter: entity::chapter::Model) -> Self {
        Self {
            id: chapter.id,
            comic_id: chapter.comic_id,
            title: chapter.title,
            slug: chapter.slug,
            pages: chapter.pages.0,
            chapter_number: chapter.chapter_number,
            release_date: chapter.release_date,
            comic: None,
        }
    }

    pub fn with_comic(mut self, comic: &entity::comic::Model) -> Self {
        self.comic = Some(ComicSummaryDto {
            title: comic.title.clone(),
            slug: comic.slug.clone(),
        });
        self
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedChaptersDto {
    pub data: Vec<ChapterDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChapterCreatedDto {
    pub message: String,
    pub data: ChapterDto,
}

/// Service-level input for chapter creation, extracted from the multipart
/// request before the ingestion pipeline runs.
pub struct CreateChapterParams {
    pub title: String,
    pub slug: String,
    pub files: Vec<PageFile>,
}

/// Repository-level insert parameters once all pages are uploaded.
pub struct NewChapter {
    pub comic_id: Uuid,
    pub title: String,
    pub slug: String,
    pub pages: Vec<String>,
    pub chapter_number: i32,
    pub release_date: DateTime<Utc>,
}
