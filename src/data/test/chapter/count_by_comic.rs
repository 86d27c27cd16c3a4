use super::*;

/// Tests the chapter count used for sequential numbering.
#[tokio::test]
async fn counts_only_the_requested_comic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::create_comic(db).await?;
    let other = factory::comic::create_comic(db).await?;

    let repo = ChapterRepository::new(db);
    assert_eq!(repo.count_by_comic(comic.id).await?, 0);

    repo.create(new_chapter(comic.id, "chapter-1", 1)).await?;
    repo.create(new_chapter(comic.id, "chapter-2", 2)).await?;
    repo.create(new_chapter(other.id, "chapter-1", 1)).await?;

    assert_eq!(repo.count_by_comic(comic.id).await?, 2);

    Ok(())
}
