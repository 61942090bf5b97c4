//! Command-line arguments, defined with clap's derive API.
//!
//! Argument structs stay in this crate; they convert into the core types
//! (`Action`, `WaitPolicy`) at the boundary so that `enroll-core` carries no
//! clap dependency.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use enroll_core::{Action, WaitPolicy};

/// Manage a course registration plan and apply it to an enrollment page
///
/// The plan lists course reference numbers (CRNs) with the action wanted for
/// each. `enroll run` reconciles a page's registration summary with the plan:
/// missing CRNs are entered, every entry's action is chosen, and the form is
/// submitted when auto submit is on.
#[derive(Parser)]
#[command(version, about, name = "enroll")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/enroll/enroll.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the registration plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Reconcile a page with the stored plan
    #[command(alias = "r")]
    Run(RunArgs),
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the stored plan
    #[command(alias = "s")]
    Show,
    /// Plan an action for a CRN, replacing any action already planned for it
    Set(SetItemArgs),
    /// Remove a CRN from the plan
    #[command(alias = "rm")]
    Remove(RemoveItemArgs),
    /// Turn submitting after reconciliation on or off
    AutoSubmit(AutoSubmitArgs),
    /// Delete the stored plan
    Clear,
    /// Replace the plan with a JSON plan record
    Import(ImportArgs),
    /// Print the plan as a JSON plan record
    Export,
}

#[derive(ClapArgs)]
pub struct SetItemArgs {
    #[arg(help = "Course reference number")]
    pub crn: String,
    #[arg(help = "Action to take for the course")]
    pub action: ActionArg,
}

#[derive(ClapArgs)]
pub struct RemoveItemArgs {
    #[arg(help = "Course reference number to remove")]
    pub crn: String,
}

#[derive(ClapArgs)]
pub struct AutoSubmitArgs {
    #[arg(action = clap::ArgAction::Set, help = "true to submit after reconciling, false to leave the form unsubmitted")]
    pub enabled: bool,
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    #[arg(help = "File holding a plan record, e.g. {\"items\":[{\"CRN\":\"10001\",\"action\":\"RW\"}],\"autoSubmit\":false}")]
    pub file: PathBuf,
}

/// Run the reconciler against a page fixture
#[derive(ClapArgs)]
pub struct RunArgs {
    /// JSON fixture describing the enrollment page
    #[arg(long)]
    pub page: PathBuf,

    /// How many times to re-check the summary after adding CRNs
    #[arg(long, default_value_t = WaitPolicy::DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Milliseconds to sleep between summary checks
    #[arg(long, default_value_t = WaitPolicy::DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Write the page state after the run to this file
    #[arg(long)]
    pub save_page: Option<PathBuf>,

    /// Print every page interaction performed by the run
    #[arg(long)]
    pub trace: bool,
}

impl RunArgs {
    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::new(self.attempts, Duration::from_millis(self.interval_ms))
    }
}

/// Command-line spelling of registration actions
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    /// Register for the course (RW)
    #[value(alias = "rw")]
    Register,
    /// Drop the course (DW)
    #[value(alias = "dw")]
    Drop,
    /// Join the course waitlist (WL)
    #[value(alias = "wl")]
    Waitlist,
}

impl From<ActionArg> for Action {
    fn from(val: ActionArg) -> Self {
        match val {
            ActionArg::Register => Action::Register,
            ActionArg::Drop => Action::Drop,
            ActionArg::Waitlist => Action::Waitlist,
        }
    }
}
