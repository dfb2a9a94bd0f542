pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use error::{BudgetError, Result};
pub use models::{Breakdown, BreakdownEntry, Category, PlannerInput, PresetRow, Scenario};
