use chrono::{Duration, Utc};

use super::*;

/// Tests the global chapter feed ordering, newest release first.
///
/// Chapters from different comics interleave by release date; with page size
/// two the first page holds the two newest releases, the second page the
/// oldest, and the total counts all rows.
#[tokio::test]
async fn paginates_newest_release_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic_a = factory::comic::create_comic(db).await?;
    let comic_b = factory::comic::create_comic(db).await?;

    let now = Utc::now();
    let oldest = factory::chapter::ChapterFactory::new(db, comic_a.id)
        .release_date(now - Duration::days(2))
        .build()
        .await?;
    let middle = factory::chapter::ChapterFactory::new(db, comic_b.id)
        .release_date(now - Duration::days(1))
        .build()
        .await?;
    let newest = factory::chapter::ChapterFactory::new(db, comic_a.id)
        .release_date(now)
        .build()
        .await?;

    let repo = ChapterRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );

    let (second_page, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(
        second_page.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![oldest.id]
    );

    Ok(())
}

/// Tests the feed when no chapters exist.
///
/// Expected: empty page, total 0
#[tokio::test]
async fn empty_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (chapters, total) = ChapterRepository::new(db).get_paginated(0, 10).await?;

    assert!(chapters.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
