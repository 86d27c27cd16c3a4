use super::*;

/// Tests finding a comic by its slug.
///
/// Expected: Ok(Some) with the matching comic
#[tokio::test]
async fn finds_existing_comic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await?;

    let found = ComicRepository::new(db).find_by_slug("naruto").await?;

    assert_eq!(found.map(|c| c.id), Some(comic.id));

    Ok(())
}

/// Tests lookup of a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ComicRepository::new(db).find_by_slug("missing").await?;

    assert!(found.is_none());

    Ok(())
}
