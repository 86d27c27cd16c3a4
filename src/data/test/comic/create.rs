use super::*;

/// Tests creating a new comic.
///
/// Verifies that the repository inserts a row with the provided fields, a
/// generated ID, and matching created/updated timestamps.
///
/// Expected: Ok with comic created
#[tokio::test]
async fn creates_comic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepository::new(db);
    let comic = repo.create(new_comic("one-piece")).await?;

    assert_eq!(comic.title, "One Piece");
    assert_eq!(comic.slug, "one-piece");
    assert_eq!(comic.author, "Eiichiro Oda");
    assert_eq!(comic.status, ComicStatus::Ongoing);
    assert_eq!(comic.created_at, comic.updated_at);

    Ok(())
}

/// Tests the unique constraint on the slug column.
///
/// Expected: Err(DbErr) for a second comic with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepository::new(db);
    repo.create(new_comic("one-piece")).await?;
    let result = repo.create(new_comic("one-piece")).await;

    assert!(result.is_err());

    Ok(())
}
