//! Per-item outcomes and the report of a reconciliation run.

use serde::{Deserialize, Serialize};

use super::Action;

/// What the action policy did with a single summary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The entry already had the planned action selected
    AlreadySet,

    /// The planned action was selected
    Updated,

    /// The section is full; waitlist was selected instead of the planned action
    FellBackToWaitlist,

    /// The planned action is not offered for this entry; nothing changed
    Skipped,
}

impl Outcome {
    /// Whether the outcome deserves a warning rather than an info line.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Outcome::FellBackToWaitlist | Outcome::Skipped)
    }

    /// Whether the policy changed the entry's selection.
    pub fn changed_page(&self) -> bool {
        matches!(self, Outcome::Updated | Outcome::FellBackToWaitlist)
    }
}

/// Outcome of executing one planned item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemOutcome {
    pub crn: String,
    pub planned: Action,
    pub outcome: Outcome,
}

/// Result of a completed reconciliation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    /// Outcomes in execution order: entries already present first, then the
    /// entries that had to be added
    pub outcomes: Vec<ItemOutcome>,

    /// CRNs that were added to the summary during the run
    pub added: Vec<String>,

    /// Whether the submit control was pressed
    pub submitted: bool,
}

impl RunReport {
    /// Number of items whose selection the run changed.
    pub fn changes(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|item| item.outcome.changed_page())
            .count()
    }

    pub fn outcome_for(&self, crn: &str) -> Option<Outcome> {
        self.outcomes
            .iter()
            .find(|item| item.crn == crn)
            .map(|item| item.outcome)
    }

    /// True when the run neither added entries nor changed a selection.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.changes() == 0
    }
}
