use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comic::Table)
                    .if_not_exists()
                    .col(pk_uuid(Comic::Id))
                    .col(string(Comic::Title))
                    .col(string_uniq(Comic::Slug))
                    .col(text(Comic::Synopsis).default(""))
                    .col(string(Comic::Author))
                    .col(string(Comic::Status).default("Ongoing"))
                    .col(text(Comic::CoverImageUrl))
                    .col(
                        timestamp_with_time_zone(Comic::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Comic::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comic {
    Table,
    Id,
    Title,
    Slug,
    Synopsis,
    Author,
    Status,
    CoverImageUrl,
    CreatedAt,
    UpdatedAt,
}
