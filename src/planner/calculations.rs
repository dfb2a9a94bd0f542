use tracing::debug;

use crate::error::Result;
use crate::models::{Breakdown, Category, PlannerInput};
use crate::planner::constants::SERVICE_TAX_PERCENT;

/// Scale `amount` by `percent` / 100, rounding halves away from zero.
///
/// Exact integer arithmetic; never goes through floating point.
#[inline]
pub fn scale_percent(amount: u64, percent: u64) -> u64 {
    (amount * percent + 50) / 100
}

/// Catering cost: guests times base rate, plus service and tax when enabled.
pub fn catering_total(guests: u32, per_guest: u32, include_service_tax: bool) -> u64 {
    let base = guests as u64 * per_guest as u64;
    if include_service_tax {
        scale_percent(base, SERVICE_TAX_PERCENT)
    } else {
        base
    }
}

/// Bar cost: per-guest drinks plus the flat BYO overhead.
pub fn bar_total(guests: u32, per_guest: u32, byo_overhead: u32) -> u64 {
    guests as u64 * per_guest as u64 + byo_overhead as u64
}

/// Cake and dessert cost.
pub fn cake_total(guests: u32, per_guest: u32) -> u64 {
    guests as u64 * per_guest as u64
}

/// Derive the per-category breakdown for a plan.
///
/// Rejects out-of-range input with the offending field name; otherwise the
/// result always holds the nine fixed categories, plus videography when it
/// is enabled with a positive cost.
pub fn derive_breakdown(input: &PlannerInput) -> Result<Breakdown> {
    input.validate()?;

    let catering = catering_total(
        input.guests,
        input.catering_per_guest,
        input.include_service_tax,
    );
    let bar = bar_total(input.guests, input.bar_per_guest, input.byo_overhead);
    let cake = cake_total(input.guests, input.cake_per_guest);

    let mut breakdown = Breakdown::with_capacity(Category::FIXED.len() + 1);
    for category in Category::FIXED {
        let amount = match category {
            Category::ChurchFees => input.church as u64,
            Category::ReceptionVenue => input.venue as u64,
            Category::Catering => catering,
            Category::Bar => bar,
            Category::Photography => input.photography as u64,
            Category::Entertainment => input.dj as u64,
            Category::FlowersDecor => input.florals as u64,
            Category::CakeDesserts => cake,
            Category::Misc => input.misc as u64,
            Category::Videography => continue,
        };
        breakdown.push(category, amount);
    }

    if input.add_video && input.video_cost > 0 {
        breakdown.push(Category::Videography, input.video_cost as u64);
    }

    debug!(
        guests = input.guests,
        catering,
        bar,
        cake,
        total = breakdown.total(),
        "derived breakdown"
    );

    Ok(breakdown)
}
