//! Command handlers behind the `enroll` subcommands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use enroll_core::{
    display::OperationStatus,
    page::{PageFixture, SimulatedPage},
    Action, Plan, PlanStore, Reconciler,
};
use log::debug;

use crate::{
    args::{PlanCommands, RunArgs},
    renderer::TerminalRenderer,
};

/// Executes commands against the plan store and renders their output.
pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Show => self.show_plan().await,
            PlanCommands::Set(args) => self.set_item(&args.crn, args.action.into()).await,
            PlanCommands::Remove(args) => self.remove_item(&args.crn).await,
            PlanCommands::AutoSubmit(args) => self.set_auto_submit(args.enabled).await,
            PlanCommands::Clear => self.clear_plan().await,
            PlanCommands::Import(args) => self.import_plan(&args.file).await,
            PlanCommands::Export => self.export_plan().await,
        }
    }

    pub async fn show_plan(&self) -> Result<()> {
        let stored = self
            .store
            .stored_plan()
            .await
            .context("Failed to read plan")?;
        self.renderer.render(&stored.to_string());
        Ok(())
    }

    async fn set_item(&self, crn: &str, action: Action) -> Result<()> {
        let stored = self
            .store
            .set_item(crn, action)
            .await
            .with_context(|| format!("Failed to plan CRN {crn}"))?;
        self.renderer.render(&format!(
            "{}\n{stored}",
            OperationStatus::success(format!("CRN {crn} planned: {action}"))
        ));
        Ok(())
    }

    async fn remove_item(&self, crn: &str) -> Result<()> {
        let stored = self
            .store
            .remove_item(crn)
            .await
            .with_context(|| format!("Failed to remove CRN {crn}"))?;
        self.renderer.render(&format!(
            "{}\n{stored}",
            OperationStatus::success(format!("Removed CRN {crn} from the plan"))
        ));
        Ok(())
    }

    async fn set_auto_submit(&self, enabled: bool) -> Result<()> {
        self.store
            .set_auto_submit(enabled)
            .await
            .context("Failed to update auto submit")?;
        let state = if enabled { "on" } else { "off" };
        self.renderer.render(
            &OperationStatus::success(format!("Auto submit turned {state}")).to_string(),
        );
        Ok(())
    }

    async fn clear_plan(&self) -> Result<()> {
        let existed = self
            .store
            .clear_plan()
            .await
            .context("Failed to clear plan")?;
        let status = if existed {
            OperationStatus::success("Plan cleared")
        } else {
            OperationStatus::failure("No plan stored")
        };
        self.renderer.render(&status.to_string());
        Ok(())
    }

    async fn import_plan(&self, file: &Path) -> Result<()> {
        let value = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let plan = Plan::from_json(&value)
            .with_context(|| format!("Invalid plan record in {}", file.display()))?;
        let stored = self
            .store
            .save_plan(&plan)
            .await
            .context("Failed to save plan")?;
        self.renderer.render(&format!(
            "{}\n{stored}",
            OperationStatus::success(format!("Imported {} course(s)", plan.items.len()))
        ));
        Ok(())
    }

    async fn export_plan(&self) -> Result<()> {
        let stored = self
            .store
            .stored_plan()
            .await
            .context("Failed to read plan")?;
        println!("{}", serde_json::to_string_pretty(&stored.plan)?);
        Ok(())
    }

    /// Reconciles the fixture page with the stored plan.
    pub async fn run(&self, args: RunArgs) -> Result<()> {
        let fixture = PageFixture::from_file(&args.page)
            .with_context(|| format!("Failed to load page fixture {}", args.page.display()))?;
        let mut page = SimulatedPage::new(fixture)?;
        let reconciler = Reconciler::new(args.wait_policy());
        debug!("Waiting at most {:?} for added CRNs", reconciler.wait_policy().budget());

        let result = enroll_core::run(&self.store, &mut page, &reconciler).await;

        if args.trace {
            let trace: String = page
                .interactions()
                .iter()
                .map(|interaction| format!("- `{interaction}`\n"))
                .collect();
            self.renderer.render(&format!("# Page Interactions\n\n{trace}\n"));
        }

        if let Some(path) = &args.save_page {
            fs::write(path, page.to_fixture().to_json_pretty()?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        let report = result.context("Run failed")?;
        self.renderer.render(&report.to_string());
        Ok(())
    }
}
