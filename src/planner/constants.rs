/// Service charge plus sales tax applied to base catering, in percent (1.28x).
pub const SERVICE_TAX_PERCENT: u64 = 128;

/// Inclusive range and suggested step for a numeric planner field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl FieldRange {
    const fn new(name: &'static str, min: u32, max: u32, step: u32) -> Self {
        Self {
            name,
            min,
            max,
            step,
        }
    }

    /// Whether `value` lies within `min..=max`.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Input ranges (mirrors the planner form controls)
// ─────────────────────────────────────────────────────────────────────────────

pub const GUESTS: FieldRange = FieldRange::new("guests", 150, 200, 5);
pub const VENUE: FieldRange = FieldRange::new("venue", 2000, 10000, 250);
pub const CHURCH: FieldRange = FieldRange::new("church", 500, 1500, 50);
pub const PHOTOGRAPHY: FieldRange = FieldRange::new("photography", 1500, 6000, 100);
pub const DJ: FieldRange = FieldRange::new("dj", 700, 4000, 50);
pub const FLORALS: FieldRange = FieldRange::new("florals", 1500, 12000, 100);
pub const CATERING_PER_GUEST: FieldRange = FieldRange::new("catering_per_guest", 40, 140, 5);
pub const BAR_PER_GUEST: FieldRange = FieldRange::new("bar_per_guest", 15, 80, 5);
pub const CAKE_PER_GUEST: FieldRange = FieldRange::new("cake_per_guest", 3, 12, 1);
pub const MISC: FieldRange = FieldRange::new("misc", 2000, 12000, 100);
pub const BYO_OVERHEAD: FieldRange = FieldRange::new("byo_overhead", 0, u32::MAX, 50);
pub const VIDEO_COST: FieldRange = FieldRange::new("video_cost", 500, u32::MAX, 100);

// ─────────────────────────────────────────────────────────────────────────────
// Form defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_GUESTS: u32 = 170;
pub const DEFAULT_INCLUDE_SERVICE_TAX: bool = true;
pub const DEFAULT_BYO_OVERHEAD: u32 = 800;
pub const DEFAULT_VENUE: u32 = 5000;
pub const DEFAULT_CHURCH: u32 = 1000;
pub const DEFAULT_PHOTOGRAPHY: u32 = 3500;
pub const DEFAULT_DJ: u32 = 1300;
pub const DEFAULT_FLORALS: u32 = 5000;
pub const DEFAULT_CATERING_PER_GUEST: u32 = 80;
pub const DEFAULT_BAR_PER_GUEST: u32 = 35;
pub const DEFAULT_CAKE_PER_GUEST: u32 = 6;
pub const DEFAULT_MISC: u32 = 7000;
pub const DEFAULT_VIDEO_COST: u32 = 2500;

// ─────────────────────────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────────────────────────

/// File name offered for the breakdown download.
pub const CSV_FILE_NAME: &str = "wedding_budget_breakdown.csv";

/// MIME type of the breakdown export.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Width in characters of rendered stacked bars.
pub const CHART_WIDTH: usize = 60;
