use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{CatalogService, LocalImageStore};
use crate::utils::AppError;

/// Server state — shared handles for every request handler
///
/// Cheap to clone: the database handle and the catalog service both share
/// their inner connections through `Arc`.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Catalog CRUD service
    pub catalog: CatalogService,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, catalog: CatalogService) -> Self {
        Self {
            config,
            db,
            catalog,
        }
    }

    /// Initialize the server state:
    ///
    /// 1. work directory structure (database, uploads, logs)
    /// 2. embedded database at `work_dir/database/catalog.db`
    /// 3. local image store at `work_dir/uploads/images`
    /// 4. catalog service wired to both
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("catalog.db");
        let db_service = DbService::open(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        let image_store = Arc::new(LocalImageStore::new(
            config.images_dir(),
            config.max_upload_bytes,
        ));
        let catalog = CatalogService::new(db.clone(), image_store);

        Ok(Self::new(config.clone(), db, catalog))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.config.images_dir()
    }
}
