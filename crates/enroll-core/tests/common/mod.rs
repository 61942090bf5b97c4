#![allow(dead_code)]

use std::time::Duration;

use enroll_core::{
    page::{PageFixture, SimulatedPage},
    Action, Plan, PlanStore, PlanStoreBuilder, PlannedItem, Reconciler, SummaryEntry, WaitPolicy,
};
use tempfile::TempDir;

/// Helper function to create a store backed by a temporary database
pub async fn create_test_store() -> (TempDir, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

pub fn entry(crn: &str, current: &str, available: &[&str]) -> SummaryEntry {
    SummaryEntry {
        crn: crn.to_string(),
        current: current.to_string(),
        available: available.iter().map(|code| code.to_string()).collect(),
    }
}

pub fn plan(items: &[(&str, Action)], auto_submit: bool) -> Plan {
    Plan {
        items: items
            .iter()
            .map(|(crn, action)| PlannedItem::new(*crn, *action).expect("valid CRN"))
            .collect(),
        auto_submit,
    }
}

pub fn page(summary: Vec<SummaryEntry>, catalog: Vec<SummaryEntry>, add_latency: u32) -> SimulatedPage {
    SimulatedPage::new(PageFixture {
        summary,
        catalog,
        add_latency,
        ..Default::default()
    })
    .expect("valid fixture")
}

/// Reconciler with a short poll interval so tests stay quick
pub fn fast_reconciler() -> Reconciler {
    Reconciler::new(WaitPolicy::new(20, Duration::from_millis(1)))
}
