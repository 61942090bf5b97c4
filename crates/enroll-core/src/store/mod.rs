//! Plan storage: where a run reads its plan from.
//!
//! [`PlanStore`] keeps the plan as a single JSON entry in the SQLite-backed
//! storage area (see [`crate::db`]). Every operation opens its own connection
//! on a blocking thread, so the store is cheap to clone and hand around.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PlanSource    │    │    PlanStore    │    │    Database     │
//! │  (load a plan)  │───▶│  (plan_ops)     │───▶│  (storage rows) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use enroll_core::{models::Action, PlanSource, PlanStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlanStoreBuilder::new()
//!     .with_database_path(Some("enroll.db"))
//!     .build()
//!     .await?;
//!
//! store.set_item("10001", Action::Register).await?;
//! store.set_auto_submit(true).await?;
//!
//! let plan = store.load().await?;
//! assert_eq!(plan.items.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{EnrollError, Result},
    models::Plan,
};

pub mod builder;
pub mod plan_ops;

pub use builder::PlanStoreBuilder;
pub use plan_ops::StoredPlan;

/// Storage key the plan lives under.
pub const PLAN_KEY: &str = "plan";

/// Supplies the plan a run reconciles against.
#[allow(async_fn_in_trait)]
pub trait PlanSource {
    /// Loads the plan. A source with nothing stored yields the empty default
    /// plan rather than an error.
    async fn load(&self) -> Result<Plan>;
}

impl PlanSource for Plan {
    async fn load(&self) -> Result<Plan> {
        Ok(self.clone())
    }
}

/// Plan storage backed by a SQLite database file.
#[derive(Debug, Clone)]
pub struct PlanStore {
    pub(crate) db_path: PathBuf,
}

impl PlanStore {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            f(&db)
        })
        .await
        .map_err(|e| EnrollError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

impl PlanSource for PlanStore {
    async fn load(&self) -> Result<Plan> {
        Ok(self.stored_plan().await?.plan)
    }
}
