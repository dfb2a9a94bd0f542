mod breakdown;
mod input;
mod preset;

pub use breakdown::{Breakdown, BreakdownEntry, Category};
pub use input::PlannerInput;
pub use preset::{PresetRow, Scenario};
