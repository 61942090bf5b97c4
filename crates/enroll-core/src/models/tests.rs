#[cfg(test)]
mod model_tests {
    use crate::{
        error::EnrollError,
        models::{Action, ItemOutcome, Outcome, Plan, PlannedItem, RunReport, SummaryEntry},
    };

    fn item(crn: &str, action: Action) -> PlannedItem {
        PlannedItem::new(crn, action).unwrap()
    }

    fn entry(crn: &str, current: &str, available: &[&str]) -> SummaryEntry {
        SummaryEntry {
            crn: crn.to_string(),
            current: current.to_string(),
            available: available.iter().map(|code| code.to_string()).collect(),
        }
    }

    #[test]
    fn test_action_codes_and_parsing() {
        assert_eq!(Action::Register.code(), "RW");
        assert_eq!(Action::Drop.code(), "DW");
        assert_eq!(Action::Waitlist.code(), "WL");

        assert_eq!("RW".parse::<Action>().unwrap(), Action::Register);
        assert_eq!("waitlist".parse::<Action>().unwrap(), Action::Waitlist);
        assert_eq!(" Drop ".parse::<Action>().unwrap(), Action::Drop);
        assert!("enroll".parse::<Action>().is_err());
    }

    #[test]
    fn test_plan_storage_record_format() {
        let plan = Plan {
            items: vec![item("10001", Action::Register), item("10002", Action::Drop)],
            auto_submit: true,
        };

        let value: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "items": [
                    {"CRN": "10001", "action": "RW"},
                    {"CRN": "10002", "action": "DW"}
                ],
                "autoSubmit": true
            })
        );
    }

    #[test]
    fn test_plan_missing_fields_default() {
        let plan = Plan::from_json("{}").unwrap();
        assert_eq!(plan, Plan::default());
        assert!(plan.is_empty());
        assert!(!plan.auto_submit);
    }

    #[test]
    fn test_plan_rejects_unknown_action_code() {
        let err = Plan::from_json(r#"{"items":[{"CRN":"10001","action":"XX"}]}"#).unwrap_err();
        assert!(matches!(err, EnrollError::Serialization { .. }));
    }

    #[test]
    fn test_plan_rejects_empty_crn() {
        let err = Plan::from_json(r#"{"items":[{"CRN":"","action":"RW"}]}"#).unwrap_err();
        assert!(matches!(err, EnrollError::InvalidInput { .. }));
        assert!(PlannedItem::new("100 01", Action::Register).is_err());
    }

    #[test]
    fn test_plan_upsert_keeps_position() {
        let mut plan = Plan::default();
        assert!(plan.upsert(item("10001", Action::Register)));
        assert!(plan.upsert(item("10002", Action::Register)));
        assert!(!plan.upsert(item("10001", Action::Drop)));

        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.items[0], item("10001", Action::Drop));
        assert_eq!(plan.items[1], item("10002", Action::Register));
    }

    #[test]
    fn test_plan_remove_and_duplicates() {
        let mut plan = Plan {
            items: vec![
                item("10001", Action::Register),
                item("10002", Action::Register),
                item("10001", Action::Drop),
                item("10002", Action::Waitlist),
                item("10001", Action::Waitlist),
            ],
            auto_submit: false,
        };
        assert_eq!(plan.duplicate_crns(), vec!["10001", "10002"]);

        assert_eq!(plan.remove("10001"), 3);
        assert_eq!(plan.remove("10001"), 0);
        assert!(plan.duplicate_crns().is_empty());
    }

    #[test]
    fn test_summary_entry_queries() {
        let full = entry("10001", "", &["", "WL", "DW"]);
        assert!(full.offers(Action::Waitlist));
        assert!(!full.offers(Action::Register));
        assert!(!full.is_set_to(Action::Drop));

        let registered = entry("10002", "RW", &["RW", "DW"]);
        assert!(registered.is_set_to(Action::Register));
    }

    #[test]
    fn test_run_report_counts_changes() {
        let report = RunReport {
            outcomes: vec![
                ItemOutcome {
                    crn: "10001".to_string(),
                    planned: Action::Register,
                    outcome: Outcome::AlreadySet,
                },
                ItemOutcome {
                    crn: "10002".to_string(),
                    planned: Action::Register,
                    outcome: Outcome::FellBackToWaitlist,
                },
                ItemOutcome {
                    crn: "10003".to_string(),
                    planned: Action::Drop,
                    outcome: Outcome::Skipped,
                },
            ],
            added: Vec::new(),
            submitted: false,
        };

        assert_eq!(report.changes(), 1);
        assert!(!report.is_noop());
        assert_eq!(report.outcome_for("10003"), Some(Outcome::Skipped));
        assert_eq!(report.outcome_for("10004"), None);
        assert!(Outcome::Skipped.is_unexpected());
        assert!(!Outcome::Updated.is_unexpected());
    }
}
