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
        api::{ErrorDto, MessageDto, PaginationDto},
        comic::{
            parse_status, ComicCreatedDto, ComicDto, CreateComicParams, PaginatedComicsDto,
            UpdateComicDto,
        },
    },
    service::comic::ComicService,
    state::AppState,
};

/// Tag for grouping comic endpoints in OpenAPI documentation
pub static COMIC_TAG: &str = "comic";

/// Get paginated comics, newest first.
///
/// # Returns
/// - `200 OK` - Paginated list of comics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/comics",
    tag = COMIC_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comics", body = PaginatedComicsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comics(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(&state.db, state.blob.clone());

    let (comics, total) = service.get_paginated(params.page, params.limit).await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedComicsDto {
            data: comics.into_iter().map(ComicDto::from_entity).collect(),
            pagination: PaginationDto::new(total, params.page, params.limit),
        }),
    ))
}

/// Get a comic by slug.
///
/// # Returns
/// - `200 OK` - The comic
/// - `404 Not Found` - No comic with that slug
#[utoipa::path(
    get,
    path = "/api/comics/{slug}",
    tag = COMIC_TAG,
    params(("slug" = String, Path, description = "Comic slug")),
    responses(
        (status = 200, description = "Successfully retrieved comic", body = ComicDto),
        (status = 404, description = "Comic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comic_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(&state.db, state.blob.clone());

    let comic = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(ComicDto::from_entity(comic))))
}

/// Create a comic from a multipart form.
///
/// Expects text fields `title`, `slug`, `author`, optional `synopsis` and
/// `status`, plus one cover image file. The cover is uploaded to the blob
/// store before the comic row is written.
///
/// # Returns
/// - `201 Created` - The created comic
/// - `400 Bad Request` - Missing field, missing cover, or invalid status
/// - `409 Conflict` - Comic slug already in use
/// - `500 Internal Server Error` - Upload or database error
#[utoipa::path(
    post,
    path = "/api/comics",
    tag = COMIC_TAG,
    responses(
        (status = 201, description = "Successfully created comic", body = ComicCreatedDto),
        (status = 400, description = "Invalid comic data", body = ErrorDto),
        (status = 409, description = "Comic slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comic(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut title = None;
    let mut slug = None;
    let mut synopsis = None;
    let mut author = None;
    let mut status = None;
    let mut cover = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            cover = Some(read_file_field(field).await?);
            continue;
        }

        match name.as_str() {
            "title" => title = Some(read_text_field(field, "title").await?),
            "slug" => slug = Some(read_text_field(field, "slug").await?),
            "synopsis" => synopsis = Some(read_text_field(field, "synopsis").await?),
            "author" => author = Some(read_text_field(field, "author").await?),
            "status" => status = Some(read_text_field(field, "status").await?),
            _ => {}
        }
    }

    let status = match status.as_deref() {
        None | Some("") => entity::comic::ComicStatus::Ongoing,
        Some(value) => parse_status(value)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown comic status '{value}'")))?,
    };

    let params = CreateComicParams {
        title: require_field(title, "title")?,
        slug: require_field(slug, "slug")?,
        synopsis: synopsis.unwrap_or_default(),
        author: require_field(author, "author")?,
        status,
        cover: cover.ok_or_else(|| AppError::BadRequest("Cover image is required".to_string()))?,
    };

    let service = ComicService::new(&state.db, state.blob.clone());
    let comic = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ComicCreatedDto {
            message: "Comic created".to_string(),
            data: ComicDto::from_entity(comic),
        }),
    ))
}

/// Update a comic found by slug.
///
/// # Returns
/// - `200 OK` - The updated comic
/// - `400 Bad Request` - Invalid status value
/// - `404 Not Found` - No comic with that slug
/// - `409 Conflict` - New slug already in use
#[utoipa::path(
    put,
    path = "/api/comics/{slug}",
    tag = COMIC_TAG,
    params(("slug" = String, Path, description = "Comic slug")),
    request_body = UpdateComicDto,
    responses(
        (status = 200, description = "Successfully updated comic", body = ComicCreatedDto),
        (status = 400, description = "Invalid comic data", body = ErrorDto),
        (status = 404, description = "Comic not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comic(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateComicDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(&state.db, state.blob.clone());

    let comic = service.update(&slug, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ComicCreatedDto {
            message: "Comic updated".to_string(),
            data: ComicDto::from_entity(comic),
        }),
    ))
}

/// Delete a comic and all of its chapters.
///
/// # Returns
/// - `200 OK` - Comic deleted
/// - `404 Not Found` - No comic with that slug
#[utoipa::path(
    delete,
    path = "/api/comics/{slug}",
    tag = COMIC_TAG,
    params(("slug" = String, Path, description = "Comic slug")),
    responses(
        (status = 200, description = "Successfully deleted comic", body = MessageDto),
        (status = 404, description = "Comic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comic(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(&state.db, state.blob.clone());

    service.delete(&slug).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Comic deleted".to_string(),
        }),
    ))
}
