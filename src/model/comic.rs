use chrono::{DateTime, Utc};
use entity::comic::ComicStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{ingest::PageFile, model::api::PaginationDto};

/// Comic as exposed by the API.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComicDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub synopsis: String,
    pub author: String,
    /// `"Ongoing"` or `"Completed"`.
    pub status: String,
    pub cover_image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ComicDto {
    pub fn from_entity(comic: entity::comic::Model) -> Self {
        Self {
            id: comic.id,
            title: comic.title,
            slug: comic.slug,
            synopsis: comic.synopsis,
            author: comic.author,
            status: status_to_string(comic.status),
            cover_image_url: comic.cover_image_url,
            created_at: comic.created_at,
            updated_at: comic.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedComicsDto {
    pub data: Vec<ComicDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComicCreatedDto {
    pub message: String,
    pub data: ComicDto,
}

/// Service-level input for creating a comic, extracted from the multipart
/// request (metadata fields plus the cover image file).
pub struct CreateComicParams {
    pub title: String,
    pub slug: String,
    pub synopsis: String,
    pub author: String,
    pub status: ComicStatus,
    pub cover: PageFile,
}

/// Repository-level insert parameters once the cover has been uploaded.
pub struct NewComic {
    pub title: String,
    pub slug: String,
    pub synopsis: String,
    pub author: String,
    pub status: ComicStatus,
    pub cover_image_url: String,
}

/// Partial update; `None` fields are left untouched.
#[derive(Deserialize, ToSchema)]
pub struct UpdateComicDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    /// `"Ongoing"` or `"Completed"`.
    pub status: Option<String>,
}

/// Validated partial update handed to the repository.
pub struct UpdateComicFields {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub status: Option<ComicStatus>,
}

pub fn status_to_string(status: ComicStatus) -> String {
    match status {
        ComicStatus::Ongoing => "Ongoing".to_string(),
        ComicStatus::Completed => "Completed".to_string(),
    }
}

/// Parses a client-supplied status string; anything other than the two known
/// values is a validation error.
pub fn parse_status(value: &str) -> Option<ComicStatus> {
    match value {
        "Ongoing" => Some(ComicStatus::Ongoing),
        "Completed" => Some(ComicStatus::Completed),
        _ => None,
    }
}
