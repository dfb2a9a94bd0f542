use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BudgetError;

/// One of the three preset cost profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scenario {
    Low,
    Mid,
    High,
}

impl Scenario {
    /// All scenarios in display order.
    pub const ALL: [Scenario; 3] = [Scenario::Low, Scenario::Mid, Scenario::High];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Low => "Low",
            Scenario::Mid => "Mid",
            Scenario::High => "High",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Scenario::Low),
            "mid" => Ok(Scenario::Mid),
            "high" => Ok(Scenario::High),
            _ => Err(BudgetError::UnknownScenario(s.to_string())),
        }
    }
}

/// A row of the preset comparison table.
///
/// Values are whole dollars; `low <= mid <= high` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetRow {
    pub category: &'static str,
    pub low: u64,
    pub mid: u64,
    pub high: u64,
    pub source_url: &'static str,
}

impl PresetRow {
    /// Amount for the given scenario column.
    #[inline]
    pub fn amount(&self, scenario: Scenario) -> u64 {
        match scenario {
            Scenario::Low => self.low,
            Scenario::Mid => self.mid,
            Scenario::High => self.high,
        }
    }

    /// Whether the columns are ordered low <= mid <= high.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.mid && self.mid <= self.high
    }
}
