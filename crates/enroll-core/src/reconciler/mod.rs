//! Reconciles the registration summary on the page with a plan.
//!
//! A run is a single linear procedure:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Classify   │   │  Add missing │   │   Execute    │   │    Submit    │
//! │ (read once)  │──▶│ (tab, fill,  │──▶│   actions    │──▶│ (autoSubmit) │
//! │              │   │  add, poll)  │   │ (new items)  │   │              │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Items already in the summary are executed while classifying. Planned
//! drops of CRNs that are not in the summary need nothing. The remaining
//! CRNs are entered through the CRN tab, after which the summary is polled
//! under a [`WaitPolicy`] until they all show up. Any error ends the run.
//!
//! # Examples
//!
//! ```rust
//! use enroll_core::{
//!     models::{Action, Outcome, Plan, PlannedItem},
//!     page::{PageFixture, SimulatedPage},
//!     Reconciler,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = SimulatedPage::new(PageFixture::from_json(
//!     r#"{"summary":[{"crn":"10002","current":"","available":["","DW"]}]}"#,
//! )?)?;
//! let plan = Plan {
//!     items: vec![PlannedItem::new("10002", Action::Drop)?],
//!     auto_submit: true,
//! };
//!
//! let report = Reconciler::default().reconcile(&plan, &mut page).await?;
//! assert_eq!(report.outcome_for("10002"), Some(Outcome::Updated));
//! assert!(report.submitted);
//! # Ok(())
//! # }
//! ```

use log::{debug, error, info, warn};

pub mod policy;
pub mod wait;

pub use policy::{decide, execute_action};
pub use wait::{poll_until, WaitPolicy, Waited};

use crate::{
    error::{EnrollError, Result},
    models::{summary::find_entry, Action, ItemOutcome, Outcome, Plan, PlannedItem, RunReport},
    page::UiSurface,
    store::PlanSource,
};

/// Drives a [`UiSurface`] towards the state a [`Plan`] describes.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    wait: WaitPolicy,
}

impl Reconciler {
    pub fn new(wait: WaitPolicy) -> Self {
        Self { wait }
    }

    pub fn wait_policy(&self) -> &WaitPolicy {
        &self.wait
    }

    /// Reconciles the page with `plan`.
    ///
    /// # Errors
    ///
    /// Returns `EnrollError::ElementNotFound` when the page does not match
    /// the page contract and `EnrollError::AddTimeout` when entered CRNs do
    /// not show up in the summary within the wait policy.
    pub async fn reconcile<S>(&self, plan: &Plan, surface: &mut S) -> Result<RunReport>
    where
        S: UiSurface + ?Sized,
    {
        surface.ensure_ready()?;

        let duplicates = plan.duplicate_crns();
        if !duplicates.is_empty() {
            warn!(
                "Plan lists CRNs more than once, each item is applied in order: {}",
                duplicates.join(", ")
            );
        }

        let mut report = RunReport::default();
        let initial = surface.list_summary_entries()?;
        let mut missing: Vec<&PlannedItem> = Vec::new();

        for item in &plan.items {
            if find_entry(&initial, &item.crn).is_some() {
                let outcome = execute_action(surface, item)?;
                report.outcomes.push(item_outcome(item, outcome));
            } else if item.action != Action::Drop {
                missing.push(item);
            } else {
                debug!("CRN {} is not in the summary, already dropped", item.crn);
            }
        }

        if !missing.is_empty() {
            let crns: Vec<String> = missing.iter().map(|item| item.crn.clone()).collect();
            self.add_to_summary(surface, &crns).await?;

            let updated = surface.list_summary_entries()?;
            for item in missing {
                if find_entry(&updated, &item.crn).is_none() {
                    return Err(EnrollError::SummaryEntryMissing {
                        crn: item.crn.clone(),
                    });
                }
                let outcome = execute_action(surface, item)?;
                report.outcomes.push(item_outcome(item, outcome));
            }
            report.added = crns;
        }

        if plan.auto_submit {
            info!("Submitting");
            surface.submit_form()?;
            report.submitted = true;
        }

        Ok(report)
    }

    /// Enters `crns` through the CRN tab and waits for them to appear in
    /// the summary.
    async fn add_to_summary<S>(&self, surface: &mut S, crns: &[String]) -> Result<()>
    where
        S: UiSurface + ?Sized,
    {
        surface.switch_to_input_tab()?;
        surface.set_input_fields(crns)?;
        surface.submit_add_to_summary()?;
        info!("Added missing items to summary: {}", crns.join(", "));

        let surface = &*surface;
        let waited = poll_until(
            &self.wait,
            || {
                let entries = surface.list_summary_entries()?;
                Ok(crns
                    .iter()
                    .filter(|crn| find_entry(&entries, crn).is_none())
                    .cloned()
                    .collect::<Vec<_>>())
            },
            Vec::is_empty,
        )
        .await?;

        match waited {
            Waited::Ready(_) => Ok(()),
            Waited::TimedOut(missing) => Err(EnrollError::AddTimeout { missing }),
        }
    }
}

fn item_outcome(item: &PlannedItem, outcome: Outcome) -> ItemOutcome {
    ItemOutcome {
        crn: item.crn.clone(),
        planned: item.action,
        outcome,
    }
}

/// Loads the plan from `source` and reconciles `surface` with it, logging
/// how the run ended.
pub async fn run<P, S>(source: &P, surface: &mut S, reconciler: &Reconciler) -> Result<RunReport>
where
    P: PlanSource + ?Sized,
    S: UiSurface + ?Sized,
{
    let result = match source.load().await {
        Ok(plan) => reconciler.reconcile(&plan, surface).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(report) => info!(
            "Exit: {} item(s) processed, {} changed, submitted: {}",
            report.outcomes.len(),
            report.changes(),
            report.submitted
        ),
        Err(e) => error!("Run aborted: {e}"),
    }

    result
}
