//! Power Platform suites a submission can target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalyzerError;

/// Message returned for a missing or unsupported suite.
pub const INVALID_SUITE_MESSAGE: &str = "Valid suite selection is required";

/// One of the three supported product surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    PowerApps,
    PowerBi,
    PowerAutomate,
}

impl Suite {
    pub const ALL: [Suite; 3] = [Suite::PowerApps, Suite::PowerBi, Suite::PowerAutomate];

    /// Wire identifier, as accepted in request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suite::PowerApps => "power_apps",
            Suite::PowerBi => "power_bi",
            Suite::PowerAutomate => "power_automate",
        }
    }

    /// Human-readable name used in prompt text.
    pub fn label(&self) -> &'static str {
        match self {
            Suite::PowerApps => "Power Apps",
            Suite::PowerBi => "Power BI (DAX/M)",
            Suite::PowerAutomate => "Power Automate",
        }
    }

    /// Parse a wire identifier, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, AnalyzerError> {
        Self::ALL
            .into_iter()
            .find(|suite| suite.as_str() == s.trim())
            .ok_or_else(|| AnalyzerError::validation(INVALID_SUITE_MESSAGE))
    }
}

impl FromStr for Suite {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
