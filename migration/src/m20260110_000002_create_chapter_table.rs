use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_comic_table::Comic;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_uuid(Chapter::Id))
                    .col(uuid(Chapter::ComicId))
                    .col(string(Chapter::Title))
                    .col(string(Chapter::Slug))
                    .col(json(Chapter::Pages))
                    .col(integer(Chapter::ChapterNumber))
                    .col(
                        timestamp_with_time_zone(Chapter::ReleaseDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_comic_id")
                            .from(Chapter::Table, Chapter::ComicId)
                            .to(Comic::Table, Comic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Chapter identity is (comic_id, slug); duplicate creation requests that
        // slip past the application-level check hit this constraint instead of
        // silently inserting a second row.
        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_comic_id_slug")
                    .table(Chapter::Table)
                    .col(Chapter::ComicId)
                    .col(Chapter::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapter {
    Table,
    Id,
    ComicId,
    Title,
    Slug,
    Pages,
    ChapterNumber,
    ReleaseDate,
}
