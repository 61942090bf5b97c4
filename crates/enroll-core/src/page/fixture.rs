//! Serialized description of an enrollment page.
//!
//! A fixture captures what a run can observe on the page: which contract
//! controls exist, how many CRN input fields are shown, the summary table,
//! the sections the registrar adds to the summary when their CRN is
//! entered, and the entries whose action dropdown failed to render.
//!
//! ```json
//! {
//!   "inputFields": 1,
//!   "summary": [
//!     { "crn": "10002", "current": "DW", "available": ["DW", "RW"] }
//!   ],
//!   "catalog": [
//!     { "crn": "10001", "current": "", "available": ["", "RW"] }
//!   ],
//!   "addLatency": 3,
//!   "missingToggles": []
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::selectors::FIXED_CONTROLS;
use crate::{
    error::{EnrollError, Result},
    models::SummaryEntry,
};

fn default_controls() -> Vec<String> {
    FIXED_CONTROLS.iter().map(|s| s.to_string()).collect()
}

fn default_input_fields() -> usize {
    1
}

/// Serialized page state the simulated page is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFixture {
    /// Selectors of the fixed contract controls present on the page
    #[serde(default = "default_controls")]
    pub controls: Vec<String>,

    /// Number of CRN input fields initially shown
    #[serde(default = "default_input_fields")]
    pub input_fields: usize,

    /// Entries of the registration summary table
    #[serde(default)]
    pub summary: Vec<SummaryEntry>,

    /// Sections that appear in the summary once their CRN is added
    #[serde(default)]
    pub catalog: Vec<SummaryEntry>,

    /// Number of summary reads after an add before the new entries show up
    #[serde(default)]
    pub add_latency: u32,

    /// CRNs of entries rendered without their action dropdown toggle
    #[serde(default)]
    pub missing_toggles: Vec<String>,
}

impl Default for PageFixture {
    fn default() -> Self {
        Self {
            controls: default_controls(),
            input_fields: default_input_fields(),
            summary: Vec::new(),
            catalog: Vec::new(),
            add_latency: 0,
            missing_toggles: Vec::new(),
        }
    }
}

impl PageFixture {
    pub fn from_json(value: &str) -> Result<Self> {
        let fixture: PageFixture = serde_json::from_str(value)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Reads and validates a fixture file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let value = std::fs::read_to_string(path).map_err(|e| EnrollError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&value)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the fixture describes a page that could exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(unknown) = self
            .controls
            .iter()
            .find(|control| !FIXED_CONTROLS.contains(&control.as_str()))
        {
            return Err(EnrollError::invalid_input(
                "controls",
                format!("unknown control selector '{unknown}'"),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.summary {
            if !seen.insert(entry.crn.as_str()) {
                return Err(EnrollError::invalid_input(
                    "summary",
                    format!("CRN {} appears more than once", entry.crn),
                ));
            }
        }

        for entry in self.summary.iter().chain(&self.catalog) {
            if entry.crn.is_empty() {
                return Err(EnrollError::invalid_input("crn", "CRN cannot be empty"));
            }
            if !entry.available.contains(&entry.current) {
                return Err(EnrollError::invalid_input(
                    "current",
                    format!(
                        "CRN {} selects '{}' which its dropdown does not offer",
                        entry.crn, entry.current
                    ),
                ));
            }
        }

        if let Some(unknown) = self.missing_toggles.iter().find(|crn| {
            !self
                .summary
                .iter()
                .chain(&self.catalog)
                .any(|entry| &entry.crn == *crn)
        }) {
            return Err(EnrollError::invalid_input(
                "missingToggles",
                format!("CRN {unknown} is neither in the summary nor in the catalog"),
            ));
        }

        Ok(())
    }
}
