//! User Service Library
//!
//! Store abstraction, PostgreSQL persistence and the user use cases. The HTTP
//! layer embeds this crate through [`connect_user_service`].

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

use common::DatabaseConfig;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Connect to the database, apply migrations and build the user service.
pub async fn connect_user_service(config: &DatabaseConfig) -> Result<Arc<dyn UserService>, DbErr> {
    let db = Database::connect(config).await?;

    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Ok(Arc::new(UserManager::with_system_clock(user_repo)))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
