//! Workshop Catalog Server - service-marketplace catalog backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): RESTful routes for items, providers and images
//! - **Database** (`db`): embedded SurrealDB storage with the dual-location
//!   item store (standalone table + provider-embedded lists)
//! - **Services** (`services`): catalog CRUD orchestration and image storage
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! ├── services/      # catalog service, image store
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::{CatalogService, ImageStore, LocalImageStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Prepare the process environment: load `.env` and initialize logging.
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _       __           __        __
| |     / /___  _____/ /_______/ /_  ____  ____
| | /| / / __ \/ ___/ //_/ ___/ __ \/ __ \/ __ \
| |/ |/ / /_/ / /  / ,< (__  ) / / / /_/ / /_/ /
|__/|__/\____/_/  /_/|_/____/_/ /_/\____/ .___/
                                       /_/
        Workshop Catalog Server
"#
    );
}
