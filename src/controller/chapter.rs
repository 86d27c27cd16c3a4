use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::{read_file_field, read_text_field, require_field, PaginationParams},
    error::AppError,
    model::{
        api::{ErrorDto, PaginationDto},
        chapter::{ChapterCreatedDto, ChapterDto, CreateChapterParams, PaginatedChaptersDto},
    },
    service::chapter::ChapterService,
    state::AppState,
};

/// Tag for grouping chapter endpoints in OpenAPI documentation
pub static CHAPTER_TAG: &str = "chapter";

/// Get paginated chapters across all comics, newest release first.
///
/// # Returns
/// - `200 OK` - Paginated list of chapters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/chapters",
    tag = CHAPTER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved chapters", body = PaginatedChaptersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapters(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ChapterService::new(&state.db, state.blob.clone());

    let (chapters, total) = service.get_paginated(params.page, params.limit).await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedChaptersDto {
            data: chapters.into_iter().map(ChapterDto::from_entity).collect(),
            pagination: PaginationDto::new(total, params.page, params.limit),
        }),
    ))
}

/// Get paginated chapters of one comic in chapter-number order.
///
/// # Returns
/// - `200 OK` - Paginated list of the comic's chapters
/// - `404 Not Found` - No comic with that slug
#[utoipa::path(
    get,
    path = "/api/comics/{comic_slug}/chapters",
    tag = CHAPTER_TAG,
    params(
        ("comic_slug" = String, Path, description = "Comic slug"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved chapters", body = PaginatedChaptersDto),
        (status = 404, description = "Comic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comic_chapters(
    State(state): State<AppState>,
    Path(comic_slug): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ChapterService::new(&state.db, state.blob.clone());

    let (chapters, total) = service
        .get_by_comic_slug(&comic_slug, params.page, params.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedChaptersDto {
            data: chapters.into_iter().map(ChapterDto::from_entity).collect(),
            pagination: PaginationDto::new(total, params.page, params.limit),
        }),
    ))
}

/// Get a chapter by slug within a comic.
///
/// The response embeds the parent comic's title and slug.
///
/// # Returns
/// - `200 OK` - The chapter
/// - `404 Not Found` - Comic or chapter not found
#[utoipa::path(
    get,
    path = "/api/comics/{comic_slug}/chapters/{chapter_slug}",
    tag = CHAPTER_TAG,
    params(
        ("comic_slug" = String, Path, description = "Comic slug"),
        ("chapter_slug" = String, Path, description = "Chapter slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved chapter", body = ChapterDto),
        (status = 404, description = "Comic or chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapter_by_slug(
    State(state): State<AppState>,
    Path((comic_slug, chapter_slug)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ChapterService::new(&state.db, state.blob.clone());

    let (chapter, comic) = service.get_by_slug(&comic_slug, &chapter_slug).await?;

    Ok((
        StatusCode::OK,
        Json(ChapterDto::from_entity(chapter).with_comic(&comic)),
    ))
}

/// Create a chapter from a multipart form by running the ingestion pipeline.
///
/// Expects text fields `title` and `slug` plus one or more page image files.
/// Files are sorted into reading order by the number embedded in their
/// filenames, uploaded concurrently with retry, and persisted as the
/// chapter's ordered page list. Partial uploads are rolled back on failure.
///
/// # Returns
/// - `201 Created` - The created chapter
/// - `400 Bad Request` - Missing field or no image files
/// - `404 Not Found` - No comic with that slug
/// - `409 Conflict` - Chapter slug already used within the comic
/// - `500 Internal Server Error` - Upload or database error
#[utoipa::path(
    post,
    path = "/api/comics/{comic_slug}/chapters",
    tag = CHAPTER_TAG,
    params(("comic_slug" = String, Path, description = "Comic slug")),
    responses(
        (status = 201, description = "Successfully created chapter", body = ChapterCreatedDto),
        (status = 400, description = "Invalid chapter data", body = ErrorDto),
        (status = 404, description = "Comic not found", body = ErrorDto),
        (status = 409, description = "Chapter slug already in use", body = ErrorDto),
        (status = 500, description = "Upload or internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    Path(comic_slug): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut title = None;
    let mut slug = None;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            files.push(read_file_field(field).await?);
            continue;
        }

        match name.as_str() {
            "title" => title = Some(read_text_field(field, "title").await?),
            "slug" => slug = Some(read_text_field(field, "slug").await?),
            _ => {}
        }
    }

    let params = CreateChapterParams {
        title: require_field(title, "title")?,
        slug: require_field(slug, "slug")?,
        files,
    };

    let service = ChapterService::new(&state.db, state.blob.clone());
    let chapter = service.create(&comic_slug, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ChapterCreatedDto {
            message: "Chapter created".to_string(),
            data: ChapterDto::from_entity(chapter),
        }),
    ))
}
