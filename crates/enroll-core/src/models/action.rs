//! Registration actions a planned item can ask for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of registration actions.
///
/// Serialized with the option codes the enrollment page uses in its action
/// dropdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    /// Web registration
    #[serde(rename = "RW")]
    Register,

    /// Web drop
    #[serde(rename = "DW")]
    Drop,

    /// Join the waitlist of a full section
    #[serde(rename = "WL")]
    Waitlist,
}

impl FromStr for Action {
    type Err = String;

    /// Accepts either the page option code or the action name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rw" | "register" => Ok(Action::Register),
            "dw" | "drop" => Ok(Action::Drop),
            "wl" | "waitlist" => Ok(Action::Waitlist),
            _ => Err(format!("Invalid action: {s}")),
        }
    }
}

impl Action {
    /// Option code used by the page dropdown.
    pub fn code(&self) -> &'static str {
        match self {
            Action::Register => "RW",
            Action::Drop => "DW",
            Action::Waitlist => "WL",
        }
    }

    /// Human readable label, as shown in run logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Register => "Register",
            Action::Drop => "Drop",
            Action::Waitlist => "Waitlist",
        }
    }
}
