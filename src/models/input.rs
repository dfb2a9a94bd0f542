use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};
use crate::planner::constants::*;

/// Snapshot of the custom planner form.
///
/// Missing fields deserialize to the form defaults, so a JSON plan only needs
/// the values that differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerInput {
    pub guests: u32,
    pub include_service_tax: bool,
    /// Bartenders, ice and liability insurance for a bring-your-own bar.
    pub byo_overhead: u32,
    pub venue: u32,
    pub church: u32,
    pub photography: u32,
    pub dj: u32,
    pub florals: u32,
    pub catering_per_guest: u32,
    pub bar_per_guest: u32,
    pub cake_per_guest: u32,
    pub misc: u32,
    pub add_video: bool,
    /// Only checked and used when `add_video` is set.
    pub video_cost: u32,
}

impl Default for PlannerInput {
    fn default() -> Self {
        Self {
            guests: DEFAULT_GUESTS,
            include_service_tax: DEFAULT_INCLUDE_SERVICE_TAX,
            byo_overhead: DEFAULT_BYO_OVERHEAD,
            venue: DEFAULT_VENUE,
            church: DEFAULT_CHURCH,
            photography: DEFAULT_PHOTOGRAPHY,
            dj: DEFAULT_DJ,
            florals: DEFAULT_FLORALS,
            catering_per_guest: DEFAULT_CATERING_PER_GUEST,
            bar_per_guest: DEFAULT_BAR_PER_GUEST,
            cake_per_guest: DEFAULT_CAKE_PER_GUEST,
            misc: DEFAULT_MISC,
            add_video: false,
            video_cost: DEFAULT_VIDEO_COST,
        }
    }
}

impl PlannerInput {
    /// Check every numeric field against its range.
    ///
    /// Fails on the first offending field, in form order.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (GUESTS, self.guests),
            (BYO_OVERHEAD, self.byo_overhead),
            (VENUE, self.venue),
            (CHURCH, self.church),
            (PHOTOGRAPHY, self.photography),
            (DJ, self.dj),
            (FLORALS, self.florals),
            (CATERING_PER_GUEST, self.catering_per_guest),
            (BAR_PER_GUEST, self.bar_per_guest),
            (CAKE_PER_GUEST, self.cake_per_guest),
            (MISC, self.misc),
        ];

        for (range, value) in checks {
            check_range(range, value)?;
        }

        if self.add_video {
            check_range(VIDEO_COST, self.video_cost)?;
        }

        Ok(())
    }
}

fn check_range(range: FieldRange, value: u32) -> Result<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(BudgetError::InvalidInput {
            field: range.name,
            value,
            min: range.min,
            max: range.max,
        })
    }
}
