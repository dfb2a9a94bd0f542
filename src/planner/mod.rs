pub mod calculations;
pub mod constants;
pub mod presets;

pub use calculations::{bar_total, cake_total, catering_total, derive_breakdown, scale_percent};
pub use constants::*;
pub use presets::{preset_rows, total_for, PRESET_ROWS};
