use std::sync::Arc;

use crate::{
    blob::{BlobStore, ObjectStoreBlobStore},
    config::Config,
    error::AppError,
};

/// Connects to the database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the blob-store client from the configured URL.
pub fn setup_blob_store(config: &Config) -> Result<Arc<dyn BlobStore>, AppError> {
    let store = ObjectStoreBlobStore::new(&config.blob_store_url)
        .map_err(|e| AppError::InternalError(format!("failed to initialize blob store: {e}")))?;

    Ok(Arc::new(store))
}
