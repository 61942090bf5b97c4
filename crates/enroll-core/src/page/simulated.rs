//! In-memory enrollment page.

use std::cell::Cell;

use log::debug;

use super::{
    fixture::PageFixture,
    selectors::{self, FIXED_CONTROLS},
    UiSurface,
};
use crate::{
    error::{EnrollError, Result},
    models::SummaryEntry,
};

/// A user-level interaction performed on the simulated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    SwitchedToInputTab,
    AddedInputField,
    FilledInputs { values: Vec<String> },
    ClickedAddToSummary,
    /// Mouse press on an entry's dropdown toggle, opening its results
    PressedToggle { crn: String },
    /// Mouse release on the `index`-th result of the open dropdown
    ReleasedOption { crn: String, index: usize },
    ClickedSubmit,
}

#[derive(Debug, Clone)]
struct Row {
    entry: SummaryEntry,
    /// Summary read count from which the row is rendered
    visible_from: u32,
    has_toggle: bool,
}

/// Enrollment page model implementing [`UiSurface`].
///
/// Entries added through the CRN tab come from the fixture's catalog and only
/// become visible after `add_latency` further summary reads, the way the real
/// page renders them after its own round trip. A visible entry whose dropdown
/// toggle is missing makes every summary read fail. Every interaction is
/// recorded.
#[derive(Debug)]
pub struct SimulatedPage {
    controls: Vec<String>,
    inputs: Vec<String>,
    rows: Vec<Row>,
    catalog: Vec<SummaryEntry>,
    add_latency: u32,
    missing_toggles: Vec<String>,
    reads: Cell<u32>,
    open_dropdown: Option<String>,
    interactions: Vec<Interaction>,
}

impl SimulatedPage {
    /// Builds a page from a validated fixture.
    pub fn new(fixture: PageFixture) -> Result<Self> {
        fixture.validate()?;

        let missing_toggles = fixture.missing_toggles;
        let rows = fixture
            .summary
            .into_iter()
            .map(|entry| Row {
                has_toggle: !missing_toggles.contains(&entry.crn),
                entry,
                visible_from: 0,
            })
            .collect();

        Ok(Self {
            controls: fixture.controls,
            inputs: vec![String::new(); fixture.input_fields],
            rows,
            catalog: fixture.catalog,
            add_latency: fixture.add_latency,
            missing_toggles,
            reads: Cell::new(0),
            open_dropdown: None,
            interactions: Vec::new(),
        })
    }

    /// Interactions performed so far, in order.
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn clear_interactions(&mut self) {
        self.interactions.clear();
    }

    /// Number of times the submit control was pressed.
    pub fn submissions(&self) -> usize {
        self.interactions
            .iter()
            .filter(|i| matches!(i, Interaction::ClickedSubmit))
            .count()
    }

    /// Current values of the CRN input fields.
    pub fn input_values(&self) -> &[String] {
        &self.inputs
    }

    /// Snapshot of the page as a fixture. Entries still being rendered are
    /// included as if they had appeared.
    pub fn to_fixture(&self) -> PageFixture {
        PageFixture {
            controls: self.controls.clone(),
            input_fields: self.inputs.len(),
            summary: self.rows.iter().map(|row| row.entry.clone()).collect(),
            catalog: self.catalog.clone(),
            add_latency: self.add_latency,
            missing_toggles: self.missing_toggles.clone(),
        }
    }

    fn require(&self, selector: &str) -> Result<()> {
        if self.controls.iter().any(|control| control == selector) {
            Ok(())
        } else {
            Err(EnrollError::element_not_found(selector))
        }
    }

    fn is_visible(&self, row: &Row) -> bool {
        row.visible_from <= self.reads.get()
    }

    fn visible_row(&self, crn: &str) -> Result<&Row> {
        self.rows
            .iter()
            .find(|row| row.entry.crn == crn && self.is_visible(row))
            .ok_or_else(|| EnrollError::element_not_found(selectors::summary_select(crn)))
    }

    fn toggle(&self, row: &Row) -> Result<()> {
        if row.has_toggle {
            Ok(())
        } else {
            Err(EnrollError::element_not_found(selectors::action_toggle(
                &row.entry.crn,
            )))
        }
    }

    fn press(&mut self, crn: &str) -> Result<()> {
        self.toggle(self.visible_row(crn)?)?;
        self.open_dropdown = Some(crn.to_string());
        self.interactions.push(Interaction::PressedToggle {
            crn: crn.to_string(),
        });
        Ok(())
    }

    fn release(&mut self, index: usize) -> Result<()> {
        let crn = self
            .open_dropdown
            .take()
            .ok_or_else(|| EnrollError::element_not_found(selectors::DROPDOWN_RESULTS))?;

        let row = self
            .rows
            .iter_mut()
            .find(|row| row.entry.crn == crn)
            .ok_or_else(|| EnrollError::element_not_found(selectors::summary_select(&crn)))?;
        let code = row.entry.available.get(index).cloned().ok_or_else(|| {
            EnrollError::element_not_found(format!(
                "{}:nth-child({})",
                selectors::DROPDOWN_RESULTS,
                index + 1
            ))
        })?;
        row.entry.current = code;

        self.interactions
            .push(Interaction::ReleasedOption { crn, index });
        Ok(())
    }
}

impl UiSurface for SimulatedPage {
    fn ensure_ready(&self) -> Result<()> {
        FIXED_CONTROLS
            .iter()
            .try_for_each(|selector| self.require(selector))
    }

    fn list_summary_entries(&self) -> Result<Vec<SummaryEntry>> {
        self.reads.set(self.reads.get() + 1);
        self.rows
            .iter()
            .filter(|row| self.is_visible(row))
            .map(|row| -> Result<SummaryEntry> {
                self.toggle(row)?;
                Ok(row.entry.clone())
            })
            .collect()
    }

    fn available_actions(&self, crn: &str) -> Result<Vec<String>> {
        Ok(self.visible_row(crn)?.entry.available.clone())
    }

    fn current_action(&self, crn: &str) -> Result<String> {
        Ok(self.visible_row(crn)?.entry.current.clone())
    }

    fn set_action(&mut self, crn: &str, code: &str) -> Result<()> {
        self.press(crn)?;

        let index = self
            .visible_row(crn)?
            .entry
            .available
            .iter()
            .position(|option| option == code)
            .ok_or_else(|| EnrollError::OptionNotFound {
                crn: crn.to_string(),
                action: code.to_string(),
            })?;

        self.release(index)
    }

    fn switch_to_input_tab(&mut self) -> Result<()> {
        self.require(selectors::ENTER_CRNS_TAB)?;
        self.interactions.push(Interaction::SwitchedToInputTab);
        Ok(())
    }

    fn set_input_fields(&mut self, crns: &[String]) -> Result<()> {
        self.require(selectors::CRN_INPUTS)?;

        while self.inputs.len() < crns.len() {
            self.require(selectors::ADD_ANOTHER_CRN)?;
            self.inputs.push(String::new());
            self.interactions.push(Interaction::AddedInputField);
        }

        for (input, crn) in self.inputs.iter_mut().zip(crns) {
            input.clone_from(crn);
        }

        self.interactions.push(Interaction::FilledInputs {
            values: crns.to_vec(),
        });
        Ok(())
    }

    fn submit_add_to_summary(&mut self) -> Result<()> {
        self.require(selectors::ADD_TO_SUMMARY)?;
        self.interactions.push(Interaction::ClickedAddToSummary);

        let visible_from = self.reads.get() + self.add_latency;
        for value in &self.inputs {
            let crn = value.trim();
            if crn.is_empty() || self.rows.iter().any(|row| row.entry.crn == crn) {
                continue;
            }
            match self.catalog.iter().find(|section| section.crn == crn) {
                Some(section) => self.rows.push(Row {
                    entry: section.clone(),
                    visible_from,
                    has_toggle: !self.missing_toggles.iter().any(|missing| missing == crn),
                }),
                None => debug!("No section for CRN {crn}, nothing added"),
            }
        }
        Ok(())
    }

    fn submit_form(&mut self) -> Result<()> {
        self.require(selectors::SUBMIT)?;
        self.interactions.push(Interaction::ClickedSubmit);
        Ok(())
    }
}
