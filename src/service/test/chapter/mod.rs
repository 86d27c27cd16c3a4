use test_utils::{builder::TestBuilder, factory};

use crate::{
    blob::mock::MockBlobStore,
    data::chapter::ChapterRepository,
    error::AppError,
    model::chapter::CreateChapterParams,
    service::{
        chapter::ChapterService,
        test::{page_file, store},
    },
};

mod create;

fn create_params(slug: &str, filenames: &[&str]) -> CreateChapterParams {
    CreateChapterParams {
        title: format!("Chapter {slug}"),
        slug: slug.to_string(),
        files: filenames.iter().map(|name| page_file(name)).collect(),
    }
}
