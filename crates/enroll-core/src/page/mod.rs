//! The enrollment page as seen by the reconciler.
//!
//! [`UiSurface`] is the capability interface the reconciler drives: it can
//! read the registration summary and perform the handful of interactions the
//! page contract allows. [`SimulatedPage`] implements it over an in-memory
//! model of the page, loaded from a [`PageFixture`].

pub mod fixture;
pub mod selectors;
pub mod simulated;

pub use fixture::PageFixture;
pub use simulated::{Interaction, SimulatedPage};

use crate::{error::Result, models::SummaryEntry};

/// Operations the reconciler needs from the enrollment page.
///
/// Lookups of elements the page contract requires fail with
/// [`EnrollError::ElementNotFound`](crate::EnrollError::ElementNotFound).
pub trait UiSurface {
    /// Resolves every fixed control of the page contract.
    fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    /// Reads every summary entry from the page. Never cached.
    fn list_summary_entries(&self) -> Result<Vec<SummaryEntry>>;

    /// Option codes the entry's action dropdown offers, in page order.
    fn available_actions(&self, crn: &str) -> Result<Vec<String>>;

    /// Option code currently selected for the entry.
    fn current_action(&self, crn: &str) -> Result<String>;

    /// Selects `code` in the entry's action dropdown.
    ///
    /// The dropdown is a custom widget: selection is a press on the entry's
    /// toggle followed by a release on the matching result. On success the
    /// entry's current action is `code`.
    ///
    /// # Errors
    ///
    /// Returns `EnrollError::OptionNotFound` if `code` is not offered.
    fn set_action(&mut self, crn: &str, code: &str) -> Result<()>;

    /// Switches to the tab where CRNs are typed in.
    fn switch_to_input_tab(&mut self) -> Result<()>;

    /// Fills the CRN input fields with `crns`, adding fields as needed.
    /// Surplus existing fields are left untouched.
    fn set_input_fields(&mut self, crns: &[String]) -> Result<()>;

    /// Presses the control that adds the entered CRNs to the summary.
    fn submit_add_to_summary(&mut self) -> Result<()>;

    /// Presses the submit control of the registration form.
    fn submit_form(&mut self) -> Result<()>;
}
