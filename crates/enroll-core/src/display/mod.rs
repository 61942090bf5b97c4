//! Display formatting for plans and run results.
//!
//! Domain models implement [`std::fmt::Display`] here rather than next to
//! their definitions. All output is markdown so that the CLI can render it
//! richly or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Plan, Report)  │───▶│ result wrappers │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for plans, outcomes and reports
//! - [`status`]: Confirmation messages ([`OperationStatus`])
//! - [`datetime`]: Timestamp formatting
//!
//! # Examples
//!
//! ```rust
//! use enroll_core::models::{Action, Plan, PlannedItem};
//!
//! let plan = Plan {
//!     items: vec![PlannedItem::new("10001", Action::Register).unwrap()],
//!     auto_submit: false,
//! };
//! let output = plan.to_string();
//! assert!(output.contains("1. 10001: Register (RW)"));
//! assert!(output.contains("- Auto submit: off"));
//! ```

pub mod datetime;
pub mod models;
pub mod status;

pub use datetime::LocalDateTime;
pub use status::OperationStatus;
