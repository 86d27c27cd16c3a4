use super::*;

/// A slug change to a value owned by another comic is a conflict.
#[tokio::test]
async fn rejects_slug_taken_by_another_comic() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();
    factory::comic::ComicFactory::new(db)
        .slug("bleach")
        .build()
        .await
        .unwrap();

    let (_mock, store) = store();
    let service = ComicService::new(db, store);

    let err = service
        .update(
            "naruto",
            UpdateComicDto {
                slug: Some("bleach".to_string()),
                ..empty_update()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

/// Re-submitting the comic's own slug is not a conflict.
#[tokio::test]
async fn allows_unchanged_slug() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();

    let (_mock, store) = store();
    let service = ComicService::new(db, store);

    let comic = service
        .update(
            "naruto",
            UpdateComicDto {
                slug: Some("naruto".to_string()),
                title: Some("Naruto Shippuden".to_string()),
                ..empty_update()
            },
        )
        .await
        .unwrap();

    assert_eq!(comic.title, "Naruto Shippuden");
}

/// An unknown status string is a validation error.
#[tokio::test]
async fn rejects_unknown_status() {
    let test = TestBuilder::new().with_comic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::comic::ComicFactory::new(db)
        .slug("naruto")
        .build()
        .await
        .unwrap();

    let (_mock, store) = store();
    let service = ComicService::new(db, store);

    let err = service
        .update(
            "naruto",
            UpdateComicDto {
                status: Some("Hiatus".to_string()),
                ..empty_update()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
}
