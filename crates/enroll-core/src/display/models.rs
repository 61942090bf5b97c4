//! Display implementations for domain models.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalDateTime;
use crate::{
    models::{Action, ItemOutcome, Outcome, Plan, RunReport},
    page::{selectors, Interaction},
    store::StoredPlan,
};

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::AlreadySet => "already set",
            Outcome::Updated => "updated",
            Outcome::FellBackToWaitlist => "waitlisted instead (section full)",
            Outcome::Skipped => "skipped (not offered)",
        };
        write!(f, "{text}")
    }
}

fn fmt_plan(plan: &Plan, updated_at: Option<&Timestamp>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# Registration Plan")?;
    writeln!(f)?;
    writeln!(
        f,
        "- Auto submit: {}",
        if plan.auto_submit { "on" } else { "off" }
    )?;
    if let Some(updated_at) = updated_at {
        writeln!(f, "- Updated: {}", LocalDateTime(updated_at))?;
    }

    if plan.items.is_empty() {
        writeln!(f, "\nNo courses planned.")?;
        return Ok(());
    }

    writeln!(f, "\n## Courses")?;
    writeln!(f)?;
    for (position, item) in plan.items.iter().enumerate() {
        writeln!(
            f,
            "{}. {}: {} ({})",
            position + 1,
            item.crn,
            item.action,
            item.action.code()
        )?;
    }
    Ok(())
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan(self, None, f)
    }
}

impl fmt::Display for StoredPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan(&self.plan, self.updated_at.as_ref(), f)
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.outcome.is_unexpected() { "!" } else { "✓" };
        write!(
            f,
            "{icon} CRN {} ({} planned): {}",
            self.crn, self.planned, self.outcome
        )
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Run Report")?;
        writeln!(f)?;
        if self.added.is_empty() {
            writeln!(f, "- Added to summary: none")?;
        } else {
            writeln!(f, "- Added to summary: {}", self.added.join(", "))?;
        }
        writeln!(
            f,
            "- Changed: {} of {}",
            self.changes(),
            self.outcomes.len()
        )?;
        writeln!(
            f,
            "- Submitted: {}",
            if self.submitted { "yes" } else { "no" }
        )?;

        if self.outcomes.is_empty() {
            writeln!(f, "\nNo planned items were processed.")?;
            return Ok(());
        }

        writeln!(f, "\n## Outcomes")?;
        writeln!(f)?;
        for outcome in &self.outcomes {
            writeln!(f, "- {outcome}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::SwitchedToInputTab => write!(f, "click {}", selectors::ENTER_CRNS_TAB),
            Interaction::AddedInputField => write!(f, "click {}", selectors::ADD_ANOTHER_CRN),
            Interaction::FilledInputs { values } => {
                write!(f, "fill {} inputs with {}", selectors::CRN_INPUTS, values.join(", "))
            }
            Interaction::ClickedAddToSummary => write!(f, "click {}", selectors::ADD_TO_SUMMARY),
            Interaction::PressedToggle { crn } => {
                write!(f, "mousedown {}", selectors::action_toggle(crn))
            }
            Interaction::ReleasedOption { index, .. } => write!(
                f,
                "mouseup {}:nth-child({})",
                selectors::DROPDOWN_RESULTS,
                index + 1
            ),
            Interaction::ClickedSubmit => write!(f, "click {}", selectors::SUBMIT),
        }
    }
}
