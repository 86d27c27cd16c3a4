use super::*;

/// Tests chapter-number ordering and scoping to the requested comic.
#[tokio::test]
async fn orders_by_chapter_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::create_comic(db).await?;
    let other = factory::comic::create_comic(db).await?;

    let repo = ChapterRepository::new(db);
    let third = repo.create(new_chapter(comic.id, "chapter-3", 3)).await?;
    let first = repo.create(new_chapter(comic.id, "chapter-1", 1)).await?;
    let second = repo.create(new_chapter(comic.id, "chapter-2", 2)).await?;
    repo.create(new_chapter(other.id, "chapter-1", 1)).await?;

    let (chapters, total) = repo.get_by_comic_paginated(comic.id, 0, 10).await?;

    assert_eq!(total, 3);
    assert_eq!(
        chapters.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id, third.id]
    );

    Ok(())
}

/// Tests page slicing for a comic with more chapters than the page size.
#[tokio::test]
async fn slices_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::create_comic(db).await?;

    let repo = ChapterRepository::new(db);
    for n in 1..=5 {
        repo.create(new_chapter(comic.id, &format!("chapter-{n}"), n))
            .await?;
    }

    let (page, total) = repo.get_by_comic_paginated(comic.id, 1, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(
        page.iter().map(|c| c.chapter_number).collect::<Vec<_>>(),
        vec![3, 4]
    );

    Ok(())
}
