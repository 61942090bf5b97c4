//! Summary entries as read from the enrollment page.

use serde::{Deserialize, Serialize};

use super::Action;

/// One row of the page's registration summary table.
///
/// Option codes are kept as strings because the page can expose codes that
/// are not registration actions (a blank "None" option, for instance).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Course reference number read from the entry's select element
    pub crn: String,

    /// Currently selected option code
    pub current: String,

    /// Option codes the dropdown offers, in page order
    pub available: Vec<String>,
}

impl SummaryEntry {
    pub fn offers(&self, action: Action) -> bool {
        self.available.iter().any(|code| code == action.code())
    }

    pub fn is_set_to(&self, action: Action) -> bool {
        self.current == action.code()
    }
}

/// Looks up the entry for a CRN in a summary listing.
pub fn find_entry<'a>(entries: &'a [SummaryEntry], crn: &str) -> Option<&'a SummaryEntry> {
    entries.iter().find(|entry| entry.crn == crn)
}
