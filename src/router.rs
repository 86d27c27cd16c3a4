use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{chapter, comic},
    model::{
        api::{ErrorDto, MessageDto, PaginationDto},
        chapter::{
            ChapterCreatedDto, ChapterDto, ComicSummaryDto, PaginatedChaptersDto,
        },
        comic::{ComicCreatedDto, ComicDto, PaginatedComicsDto, UpdateComicDto},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "comicshelf", description = "REST backend for a comic reading platform"),
    paths(
        comic::get_comics,
        comic::get_comic_by_slug,
        comic::create_comic,
        comic::update_comic,
        comic::delete_comic,
        chapter::get_chapters,
        chapter::get_comic_chapters,
        chapter::get_chapter_by_slug,
        chapter::create_chapter,
    ),
    components(schemas(
        ComicDto,
        PaginatedComicsDto,
        ComicCreatedDto,
        UpdateComicDto,
        ChapterDto,
        ComicSummaryDto,
        PaginatedChaptersDto,
        ChapterCreatedDto,
        PaginationDto,
        MessageDto,
        ErrorDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/comics", get(comic::get_comics).post(comic::create_comic))
        .route(
            "/api/comics/{slug}",
            get(comic::get_comic_by_slug)
                .put(comic::update_comic)
                .delete(comic::delete_comic),
        )
        .route(
            "/api/comics/{comic_slug}/chapters",
            get(chapter::get_comic_chapters).post(chapter::create_chapter),
        )
        .route(
            "/api/comics/{comic_slug}/chapters/{chapter_slug}",
            get(chapter::get_chapter_by_slug),
        )
        .route("/api/chapters", get(chapter::get_chapters))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
