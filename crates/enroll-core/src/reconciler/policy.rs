//! Per-entry action policy.

use log::{info, warn};

use crate::{
    error::Result,
    models::{Action, Outcome, PlannedItem, SummaryEntry},
    page::UiSurface,
};

/// Decides what to do with `entry` given the `planned` action.
///
/// An entry that offers the waitlist belongs to a full section; waitlisting
/// is the only thing that can succeed there, whatever was planned.
pub fn decide(entry: &SummaryEntry, planned: Action) -> Outcome {
    if entry.offers(Action::Waitlist) {
        Outcome::FellBackToWaitlist
    } else if entry.is_set_to(planned) {
        Outcome::AlreadySet
    } else if entry.offers(planned) {
        Outcome::Updated
    } else {
        Outcome::Skipped
    }
}

/// Applies the action policy to the summary entry of `item`, reading the
/// entry's dropdown fresh from the page.
pub fn execute_action<S>(surface: &mut S, item: &PlannedItem) -> Result<Outcome>
where
    S: UiSurface + ?Sized,
{
    let entry = SummaryEntry {
        crn: item.crn.clone(),
        available: surface.available_actions(&item.crn)?,
        current: surface.current_action(&item.crn)?,
    };
    let outcome = decide(&entry, item.action);

    match outcome {
        Outcome::FellBackToWaitlist => {
            surface.set_action(&item.crn, Action::Waitlist.code())?;
            warn!(
                "CRN {} updated to \"{}\" instead of \"{}\" (full)",
                item.crn,
                Action::Waitlist.label(),
                item.action.label()
            );
        }
        Outcome::AlreadySet => {
            info!(
                "CRN {} is already set to \"{}\", continue",
                item.crn,
                item.action.label()
            );
        }
        Outcome::Updated => {
            surface.set_action(&item.crn, item.action.code())?;
            info!("CRN {} updated to \"{}\"", item.crn, item.action.label());
        }
        Outcome::Skipped => {
            warn!(
                "CRN {} is skipped: \"{}\" is not offered",
                item.crn,
                item.action.label()
            );
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(current: &str, available: &[&str]) -> SummaryEntry {
        SummaryEntry {
            crn: "10001".to_string(),
            current: current.to_string(),
            available: available.iter().map(|code| code.to_string()).collect(),
        }
    }

    #[test]
    fn test_waitlist_takes_precedence() {
        let available = ["", "WL"];
        assert_eq!(decide(&entry("", &available), Action::Register), Outcome::FellBackToWaitlist);
        assert_eq!(decide(&entry("", &available), Action::Drop), Outcome::FellBackToWaitlist);
        // Even an entry already on the waitlist goes through the fallback.
        assert_eq!(
            decide(&entry("WL", &available), Action::Waitlist),
            Outcome::FellBackToWaitlist
        );
    }

    #[test]
    fn test_already_set() {
        assert_eq!(
            decide(&entry("DW", &["RW", "DW"]), Action::Drop),
            Outcome::AlreadySet
        );
    }

    #[test]
    fn test_already_set_even_if_not_offered() {
        assert_eq!(
            decide(&entry("RW", &["", "DW"]), Action::Register),
            Outcome::AlreadySet
        );
    }

    #[test]
    fn test_updated_when_offered() {
        assert_eq!(
            decide(&entry("", &["", "RW"]), Action::Register),
            Outcome::Updated
        );
    }

    #[test]
    fn test_skipped_when_not_offered() {
        assert_eq!(
            decide(&entry("", &["", "RW"]), Action::Drop),
            Outcome::Skipped
        );
        assert_eq!(decide(&entry("", &[]), Action::Waitlist), Outcome::Skipped);
    }
}
