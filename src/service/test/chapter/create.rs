use super::*;

/// End-to-end creation: files uploaded out of filename order come back as a
/// persisted chapter whose pages follow the numeric reading order, numbered
/// as the comic's first chapter.
#[tokio::test]
async fn creates_chapter_with_pages_in_reading_order() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();

    let (_mock, store) = store();
    let service = ChapterService::new(db, store);

    let chapter = service
        .create("naruto", create_params("chapter-1", &["3.png", "1.png", "2.png"]))
        .await
        .unwrap();

    assert_eq!(chapter.comic_id, comic.id);
    assert_eq!(chapter.chapter_number, 1);
    assert_eq!(
        chapter.pages.0,
        vec![
            MockBlobStore::locator_for("comics/naruto/chapters/chapter-1/1.png"),
            MockBlobStore::locator_for("comics/naruto/chapters/chapter-1/2.png"),
            MockBlobStore::locator_for("comics/naruto/chapters/chapter-1/3.png"),
        ]
    );

    let stored = ChapterRepository::new(db)
        .find_by_slug_and_comic("chapter-1", comic.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.pages, chapter.pages);
}

/// Chapter numbers increase with the comic's existing chapter count.
#[tokio::test]
async fn assigns_next_sequential_number() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();
    factory::chapter::create_chapter(db, comic.id).await.unwrap();

    let (_mock, store) = store();
    let service = ChapterService::new(db, store);

    let chapter = service
        .create("naruto", create_params("chapter-2", &["1.png"]))
        .await
        .unwrap();

    assert_eq!(chapter.chapter_number, 2);
}

/// A duplicate chapter slug is rejected before the blob store sees a single
/// byte.
#[tokio::test]
async fn rejects_duplicate_slug_without_uploading() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();
    factory::chapter::ChapterFactory::new(db, comic.id)
        .slug("chapter-1")
        .build()
        .await
        .unwrap();

    let (mock, store) = store();
    let service = ChapterService::new(db, store);

    let err = service
        .create("naruto", create_params("chapter-1", &["1.png"]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(mock.put_attempt_count(), 0);
}

/// An unknown comic slug is rejected before the blob store sees a single
/// byte.
#[tokio::test]
async fn rejects_unknown_comic_without_uploading() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mock, store) = store();
    let service = ChapterService::new(db, store);

    let err = service
        .create("missing", create_params("chapter-1", &["1.png"]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(mock.put_attempt_count(), 0);
}

/// An empty file batch is a validation error.
#[tokio::test]
async fn rejects_empty_batch() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();

    let (_mock, store) = store();
    let service = ChapterService::new(db, store);

    let err = service
        .create("naruto", create_params("chapter-1", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
}

/// When an upload fails permanently the successful pages are rolled back and
/// no chapter row is persisted.
#[tokio::test]
async fn upload_failure_rolls_back_and_persists_nothing() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comic = factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();

    let (mock, store) = store();
    mock.fail_permanent("2.png");

    let service = ChapterService::new(db, store);
    let err = service
        .create("naruto", create_params("chapter-1", &["1.png", "2.png", "3.png"]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upload(_)));
    assert_eq!(mock.deleted().len(), 2);

    let stored = ChapterRepository::new(db)
        .find_by_slug_and_comic("chapter-1", comic.id)
        .await
        .unwrap();
    assert!(stored.is_none());
}
