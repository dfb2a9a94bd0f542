use dialoguer::{Confirm, Input};

use crate::error::Result;
use crate::models::PlannerInput;
use crate::planner::constants::*;

/// Prompt for a whole-dollar amount within `range`, re-asking until valid.
pub fn prompt_in_range(label: &str, range: FieldRange, default: u32) -> Result<u32> {
    let prompt = if range.max == u32::MAX {
        format!("{} (min {}, step {})", label, range.min, range.step)
    } else {
        format!(
            "{} ({}-{}, step {})",
            label, range.min, range.max, range.step
        )
    };

    let value = Input::<u32>::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(move |v: &u32| -> std::result::Result<(), String> {
            if range.contains(*v) {
                Ok(())
            } else if range.max == u32::MAX {
                Err(format!("Must be at least {}", range.min))
            } else {
                Err(format!("Must be between {} and {}", range.min, range.max))
            }
        })
        .interact_text()?;

    Ok(value)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through the planner form, starting from `defaults`.
pub fn collect_planner_input(defaults: &PlannerInput) -> Result<PlannerInput> {
    let guests = prompt_in_range("Guest count", GUESTS, defaults.guests)?;
    let include_service_tax = prompt_yes_no(
        "Include 28% service & tax on catering?",
        defaults.include_service_tax,
    )?;
    let byo_overhead = prompt_in_range(
        "BYO bar overhead (bartenders, ice, insurance)",
        BYO_OVERHEAD,
        defaults.byo_overhead,
    )?;

    let venue = prompt_in_range("Reception Venue ($)", VENUE, defaults.venue)?;
    let church = prompt_in_range("Church Fees ($)", CHURCH, defaults.church)?;
    let photography = prompt_in_range("Photography ($)", PHOTOGRAPHY, defaults.photography)?;
    let dj = prompt_in_range("DJ / Entertainment ($)", DJ, defaults.dj)?;
    let florals = prompt_in_range("Flowers & Decor ($ total)", FLORALS, defaults.florals)?;

    let catering_per_guest = prompt_in_range(
        "Catering per guest (base)",
        CATERING_PER_GUEST,
        defaults.catering_per_guest,
    )?;
    let bar_per_guest = prompt_in_range("Bar per guest", BAR_PER_GUEST, defaults.bar_per_guest)?;
    let cake_per_guest = prompt_in_range(
        "Cake/dessert per guest",
        CAKE_PER_GUEST,
        defaults.cake_per_guest,
    )?;

    let misc = prompt_in_range("Misc. & Extras ($)", MISC, defaults.misc)?;

    let add_video = prompt_yes_no("Add Videography?", defaults.add_video)?;
    let video_cost = if add_video {
        let default = defaults.video_cost.max(VIDEO_COST.min);
        prompt_in_range("Videography ($)", VIDEO_COST, default)?
    } else {
        0
    };

    Ok(PlannerInput {
        guests,
        include_service_tax,
        byo_overhead,
        venue,
        church,
        photography,
        dj,
        florals,
        catering_per_guest,
        bar_per_guest,
        cake_per_guest,
        misc,
        add_video,
        video_cost,
    })
}
