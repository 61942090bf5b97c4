//! Core library for the enroll course registration tool.
//!
//! A registration *plan* lists course reference numbers (CRNs) with the
//! action wanted for each: register, drop, or waitlist. This crate stores
//! that plan and reconciles an enrollment page's registration summary with
//! it: entering missing CRNs, choosing the action of every entry, and
//! optionally submitting the form.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PlanSource    │    │   Reconciler    │    │    UiSurface    │
//! │  (PlanStore)    │───▶│ (classify, add, │───▶│ (SimulatedPage) │
//! │                 │    │  act, submit)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`store`]: plan storage in a SQLite key-value area
//! - [`page`]: the page capability interface and an in-memory page
//! - [`reconciler`]: the reconciliation procedure and its wait policy
//! - [`models`]: plans, summary entries and outcomes
//! - [`display`]: markdown formatting of plans and reports
//!
//! Progress is reported through the [`log`] facade; callers choose the
//! logger.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use enroll_core::{
//!     page::{PageFixture, SimulatedPage},
//!     run, PlanStoreBuilder, Reconciler,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlanStoreBuilder::new()
//!     .with_database_path(Some("enroll.db"))
//!     .build()
//!     .await?;
//!
//! let fixture = PageFixture::from_file("page.json".as_ref())?;
//! let mut page = SimulatedPage::new(fixture)?;
//!
//! let report = run(&store, &mut page, &Reconciler::default()).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod page;
pub mod reconciler;
pub mod store;

// Re-export commonly used types
pub use error::{EnrollError, Result};
pub use models::{Action, ItemOutcome, Outcome, Plan, PlannedItem, RunReport, SummaryEntry};
pub use page::{PageFixture, SimulatedPage, UiSurface};
pub use reconciler::{run, Reconciler, WaitPolicy};
pub use store::{PlanSource, PlanStore, PlanStoreBuilder, StoredPlan};
