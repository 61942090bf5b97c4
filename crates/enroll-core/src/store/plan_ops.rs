//! Plan operations for the PlanStore.

use jiff::Timestamp;
use log::warn;

use super::{PlanStore, PLAN_KEY};
use crate::{
    error::{EnrollError, Result},
    models::{Action, Plan, PlannedItem},
};

/// The stored plan together with the time it was last written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredPlan {
    pub plan: Plan,
    /// `None` when nothing usable is stored
    pub updated_at: Option<Timestamp>,
}

impl PlanStore {
    /// Reads the stored plan.
    ///
    /// A missing entry yields the default plan. So does a malformed entry,
    /// either its value or its write time, which is logged as a warning and
    /// left in place.
    pub async fn stored_plan(&self) -> Result<StoredPlan> {
        let entry = self.with_database(|db| db.get_entry(PLAN_KEY)).await?;

        let Some(entry) = entry else {
            return Ok(StoredPlan::default());
        };

        let Some(updated_at) = entry.updated_at else {
            warn!("Ignoring stored plan with a malformed write time");
            return Ok(StoredPlan::default());
        };

        match Plan::from_json(&entry.value) {
            Ok(plan) => Ok(StoredPlan {
                plan,
                updated_at: Some(updated_at),
            }),
            Err(e) => {
                warn!("Ignoring malformed stored plan: {e}");
                Ok(StoredPlan::default())
            }
        }
    }

    /// Replaces the stored plan.
    pub async fn save_plan(&self, plan: &Plan) -> Result<StoredPlan> {
        plan.validate()?;
        let value = plan.to_json()?;
        let updated_at = self
            .with_database(move |db| db.set_entry(PLAN_KEY, &value))
            .await?;

        Ok(StoredPlan {
            plan: plan.clone(),
            updated_at: Some(updated_at),
        })
    }

    /// Plans `action` for `crn`, replacing the action of an already planned
    /// CRN in place.
    pub async fn set_item(&self, crn: &str, action: Action) -> Result<StoredPlan> {
        let item = PlannedItem::new(crn, action)?;
        let mut plan = self.stored_plan().await?.plan;
        plan.upsert(item);
        self.save_plan(&plan).await
    }

    /// Removes `crn` from the plan.
    ///
    /// # Errors
    ///
    /// Returns `EnrollError::CrnNotInPlan` if the CRN is not planned.
    pub async fn remove_item(&self, crn: &str) -> Result<StoredPlan> {
        let mut plan = self.stored_plan().await?.plan;
        if plan.remove(crn) == 0 {
            return Err(EnrollError::CrnNotInPlan {
                crn: crn.to_string(),
            });
        }
        self.save_plan(&plan).await
    }

    /// Sets whether the run presses submit once the summary is reconciled.
    pub async fn set_auto_submit(&self, auto_submit: bool) -> Result<StoredPlan> {
        let mut plan = self.stored_plan().await?.plan;
        plan.auto_submit = auto_submit;
        self.save_plan(&plan).await
    }

    /// Deletes the stored plan. Returns whether one existed.
    pub async fn clear_plan(&self) -> Result<bool> {
        self.with_database(|db| db.remove_entry(PLAN_KEY)).await
    }
}
