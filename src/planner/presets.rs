use crate::models::{PresetRow, Scenario};

/// Winter 2026 Columbus estimates: church ceremony plus a separate reception venue.
pub const PRESET_ROWS: [PresetRow; 8] = [
    PresetRow {
        category: "Church Fees",
        low: 650,
        mid: 1000,
        high: 1250,
        source_url: "https://sfacolumbus.org/weddings",
    },
    PresetRow {
        category: "Reception Venue",
        low: 2500,
        mid: 5000,
        high: 9000,
        source_url: "https://www.reddit.com/r/Columbus/comments/5jx57g/wedding_costs/",
    },
    PresetRow {
        category: "Catering + Bar",
        low: 11000,
        mid: 19000,
        high: 28500,
        source_url: "https://www.theknot.com/content/average-wedding-cost",
    },
    PresetRow {
        category: "Photography",
        low: 1750,
        mid: 3500,
        high: 5500,
        source_url: "https://www.weddingsbytara.com/blog/columbus-wedding-photographer-prices",
    },
    PresetRow {
        category: "DJ / Entertainment",
        low: 850,
        mid: 1350,
        high: 3000,
        source_url: "https://www.night-music.com/pricing/",
    },
    PresetRow {
        category: "Flowers & Decor",
        low: 2000,
        mid: 5000,
        high: 8500,
        source_url: "https://www.theknot.com/content/average-wedding-cost",
    },
    PresetRow {
        category: "Cake & Desserts",
        low: 500,
        mid: 900,
        high: 1350,
        source_url: "https://threebitesbakery.com/",
    },
    PresetRow {
        category: "Misc. & Extras",
        low: 4000,
        mid: 7000,
        high: 9000,
        source_url: "https://www.theknot.com/content/average-wedding-cost",
    },
];

/// All preset rows in table order.
pub fn preset_rows() -> &'static [PresetRow] {
    &PRESET_ROWS
}

/// Sum of one scenario column across all rows.
pub fn total_for(scenario: Scenario) -> u64 {
    PRESET_ROWS.iter().map(|row| row.amount(scenario)).sum()
}
