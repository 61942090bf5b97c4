//! Data models for plans, page summary entries and run outcomes.
//!
//! Display implementations for these models live in
//! [`crate::display`] so that formatting stays apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use enroll_core::models::{Action, Plan};
//!
//! let plan = Plan::from_json(
//!     r#"{"items":[{"CRN":"10001","action":"RW"}],"autoSubmit":true}"#,
//! )
//! .unwrap();
//! assert_eq!(plan.items[0].action, Action::Register);
//! assert!(plan.auto_submit);
//! ```

pub mod action;
pub mod outcome;
pub mod plan;
pub mod summary;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use outcome::{ItemOutcome, Outcome, RunReport};
pub use plan::{Plan, PlannedItem};
pub use summary::SummaryEntry;
