//! Selectors of the page contract.

/// Tab holding the CRN input fields
pub const ENTER_CRNS_TAB: &str = "#enterCRNs-tab";
/// Control that appends another CRN input field
pub const ADD_ANOTHER_CRN: &str = "#addAnotherCRN";
/// Container of the CRN `input` fields
pub const CRN_INPUTS: &str = "#crns";
/// Control that adds the entered CRNs to the summary
pub const ADD_TO_SUMMARY: &str = "#addCRNbutton";
/// Form submit control
pub const SUBMIT: &str = "#saveButton";
/// Result items of an opened action dropdown
pub const DROPDOWN_RESULTS: &str = "li.select2-result";

/// Controls that must be on the page before a run touches anything.
pub const FIXED_CONTROLS: [&str; 5] = [
    ENTER_CRNS_TAB,
    ADD_ANOTHER_CRN,
    CRN_INPUTS,
    ADD_TO_SUMMARY,
    SUBMIT,
];

/// Toggle of the action dropdown paired with the entry for `crn`.
pub fn action_toggle(crn: &str) -> String {
    format!("#s2id_action-{crn}-ddl > a")
}

/// Select element of the summary entry for `crn`.
pub fn summary_select(crn: &str) -> String {
    format!("select[data-coursereferencenumber=\"{crn}\"]")
}
