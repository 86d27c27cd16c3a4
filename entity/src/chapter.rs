use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered list of page-image locators, stored as a JSON array.
///
/// The order of the entries is the reading order of the chapter and must be
/// preserved exactly as produced by the ingestion pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Pages(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chapter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub comic_id: Uuid,
    pub title: String,
    pub slug: String,
    #[sea_orm(column_type = "Json")]
    pub pages: Pages,
    pub chapter_number: i32,
    pub release_date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::comic::Entity",
        from = "Column::ComicId",
        to = "super::comic::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Comic,
}

impl Related<super::comic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
