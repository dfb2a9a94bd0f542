pub mod chart;
pub mod prompts;
pub mod render;

pub use chart::{segment_widths, stacked_scenarios, stacked_single};
pub use prompts::{collect_planner_input, prompt_in_range, prompt_yes_no};
pub use render::{display_breakdown, display_notes, display_presets, display_scenario, format_usd};
