use crate::interface::chart::{stacked_scenarios, stacked_single};
use crate::models::{Breakdown, PresetRow, Scenario};
use crate::planner::constants::CHART_WIDTH;

/// Format whole dollars as `$12,345`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display the preset comparison: table with sources, totals, and chart.
pub fn display_presets(rows: &[PresetRow]) {
    println!();
    println!("=== Preset Low / Mid / High ===");
    println!();

    let name_width = rows.iter().map(|r| r.category.len()).max().unwrap_or(10);

    println!(
        "{:<width$}  {:>9}  {:>9}  {:>9}  Source",
        "Category",
        "Low",
        "Mid",
        "High",
        width = name_width
    );
    for row in rows {
        println!(
            "{:<width$}  {:>9}  {:>9}  {:>9}  {}",
            row.category,
            format_usd(row.low),
            format_usd(row.mid),
            format_usd(row.high),
            row.source_url,
            width = name_width
        );
    }

    println!();
    let totals: Vec<String> = Scenario::ALL
        .iter()
        .map(|&scenario| {
            let total: u64 = rows.iter().map(|r| r.amount(scenario)).sum();
            format!("{} Total: {}", scenario, format_usd(total))
        })
        .collect();
    println!("{}", totals.join("   "));
    println!();

    print!("{}", stacked_scenarios(rows, CHART_WIDTH));
    println!();
}

/// Display a single scenario column, used by `presets --scenario`.
pub fn display_scenario(rows: &[PresetRow], scenario: Scenario) {
    println!();
    println!("=== {} Scenario ===", scenario);
    println!();

    let name_width = rows.iter().map(|r| r.category.len()).max().unwrap_or(10);
    for row in rows {
        println!(
            "{:<width$}  {:>9}",
            row.category,
            format_usd(row.amount(scenario)),
            width = name_width
        );
    }

    let total: u64 = rows.iter().map(|r| r.amount(scenario)).sum();
    println!();
    println!("{} Total: {}", scenario, format_usd(total));
    println!();
}

/// Display a custom breakdown: headline total, table, and chart.
pub fn display_breakdown(breakdown: &Breakdown, guests: u32) {
    println!();
    println!(
        "Estimated Total: {} for {} guests",
        format_usd(breakdown.total()),
        guests
    );
    println!();

    let name_width = breakdown
        .iter()
        .map(|e| e.category.name().len())
        .max()
        .unwrap_or(10)
        .max("Category".len());

    println!("{:<width$}  {:>9}", "Category", "Amount", width = name_width);
    for entry in breakdown {
        println!(
            "{:<width$}  {:>9}",
            entry.category.name(),
            format_usd(entry.amount),
            width = name_width
        );
    }
    println!("{:<width$}  {:>9}", "Total", format_usd(breakdown.total()), width = name_width);
    println!();

    print!("{}", stacked_single("Custom", breakdown, CHART_WIDTH));
    println!();
}

/// Assumptions behind the preset numbers and the planner defaults.
pub const NOTES: &str = "\
- Winter 2026 Columbus market; church + separate reception venue.
- Guest count: 150-180. Catering/bar scale with headcount.
- BYO alcohol allowed in some venues; check policies (bartender & liability still required).
- Catering estimates often add ~28% (service + tax) to base food price.
- Flowers scale modestly with table count; venue decor may include basics.
- Use `plan` to reflect your exact guest count and per-guest costs.";

pub const RESOURCES: &str = "\
Resources: St. Francis of Assisi (Columbus) wedding info, The Knot cost report, local vendor pricing. \
Adjust all inputs to match current quotes and venue policies.";

/// Display the assumptions and resources footer.
pub fn display_notes() {
    println!();
    println!("=== Assumptions & Notes ===");
    println!();
    println!("{}", NOTES);
    println!();
    println!("{}", RESOURCES);
    println!();
}
