//! Plan model: the desired end state of the registration summary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Action;
use crate::error::{EnrollError, Result};

/// A single course the plan wants in a given state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedItem {
    /// Course reference number
    #[serde(rename = "CRN")]
    pub crn: String,

    /// Desired action for the course
    pub action: Action,
}

impl PlannedItem {
    /// Creates a validated planned item.
    pub fn new(crn: impl Into<String>, action: Action) -> Result<Self> {
        let crn = crn.into();
        validate_crn(&crn)?;
        Ok(Self { crn, action })
    }
}

/// Ordered registration plan, stored under a single storage key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Planned items, processed in this order
    #[serde(default)]
    pub items: Vec<PlannedItem>,

    /// Whether to press the submit control once the summary is reconciled
    #[serde(default)]
    pub auto_submit: bool,
}

impl Plan {
    /// Parses and validates a stored plan record.
    pub fn from_json(value: &str) -> Result<Self> {
        let plan: Plan = serde_json::from_str(value)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Serializes the plan into its storage record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks every item's CRN.
    pub fn validate(&self) -> Result<()> {
        self.items.iter().try_for_each(|item| validate_crn(&item.crn))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sets the action for a CRN, keeping its position when it is already
    /// planned and appending it otherwise. Returns true when the CRN was new.
    pub fn upsert(&mut self, item: PlannedItem) -> bool {
        match self.items.iter_mut().find(|existing| existing.crn == item.crn) {
            Some(existing) => {
                existing.action = item.action;
                false
            }
            None => {
                self.items.push(item);
                true
            }
        }
    }

    /// Removes every item for a CRN. Returns how many were removed.
    pub fn remove(&mut self, crn: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.crn != crn);
        before - self.items.len()
    }

    /// CRNs that appear more than once, in first-seen order.
    pub fn duplicate_crns(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for item in &self.items {
            if !seen.insert(item.crn.as_str()) && !duplicates.contains(&item.crn.as_str()) {
                duplicates.push(item.crn.as_str());
            }
        }
        duplicates
    }
}

/// A CRN must be non-empty and contain no whitespace.
pub fn validate_crn(crn: &str) -> Result<()> {
    if crn.is_empty() {
        return Err(EnrollError::invalid_input("CRN", "CRN cannot be empty"));
    }
    if crn.chars().any(char::is_whitespace) {
        return Err(EnrollError::invalid_input(
            "CRN",
            format!("CRN '{crn}' cannot contain whitespace"),
        ));
    }
    Ok(())
}
