use crate::interface::render::format_usd;
use crate::models::{Breakdown, PresetRow, Scenario};

/// Fill characters assigned to segments, cycled in row order.
const SEGMENT_GLYPHS: [char; 10] = ['█', '▓', '▒', '░', '#', '=', '+', '*', '%', '@'];

/// Glyph used for the segment at `index`.
pub fn segment_glyph(index: usize) -> char {
    SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()]
}

/// Split `width` columns across `amounts` proportionally.
///
/// Largest-remainder allocation: the widths always sum to `width` unless every
/// amount is zero, in which case every width is zero.
pub fn segment_widths(amounts: &[u64], width: usize) -> Vec<usize> {
    let total: u64 = amounts.iter().sum();
    if total == 0 {
        return vec![0; amounts.len()];
    }

    let width = width as u64;
    let mut widths: Vec<usize> = Vec::with_capacity(amounts.len());
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(amounts.len());

    for (i, &amount) in amounts.iter().enumerate() {
        let scaled = amount * width;
        widths.push((scaled / total) as usize);
        remainders.push((i, scaled % total));
    }

    let assigned: usize = widths.iter().sum();
    let leftover = width as usize - assigned;

    // Ties go to the earlier segment.
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for &(i, _) in remainders.iter().take(leftover) {
        widths[i] += 1;
    }

    widths
}

/// Draw one bar from its segment widths.
fn draw_bar(widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .flat_map(|(i, &w)| std::iter::repeat_n(segment_glyph(i), w))
        .collect()
}

/// Share of `amount` in `total`, in percent.
pub fn percent_of(amount: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        amount as f64 * 100.0 / total as f64
    }
}

/// Single stacked bar for a custom breakdown, followed by a legend.
pub fn stacked_single(title: &str, breakdown: &Breakdown, width: usize) -> String {
    let amounts: Vec<u64> = breakdown.iter().map(|e| e.amount).collect();
    let total = breakdown.total();
    let widths = segment_widths(&amounts, width);

    let mut out = format!("{} Budget Breakdown\n", title);
    out.push_str(&format!("|{}| {}\n", draw_bar(&widths), format_usd(total)));

    let name_width = breakdown
        .iter()
        .map(|e| e.category.name().len())
        .max()
        .unwrap_or(0);

    for (i, entry) in breakdown.iter().enumerate() {
        out.push_str(&format!(
            "  {} {:<name_width$}  {:>9}  {:>5.1}%\n",
            segment_glyph(i),
            entry.category.name(),
            format_usd(entry.amount),
            percent_of(entry.amount, total),
        ));
    }

    out
}

/// One stacked bar per scenario, scaled against the largest scenario total.
pub fn stacked_scenarios(rows: &[PresetRow], width: usize) -> String {
    let totals: Vec<(Scenario, u64)> = Scenario::ALL
        .iter()
        .map(|&s| (s, rows.iter().map(|r| r.amount(s)).sum()))
        .collect();
    let max_total = totals.iter().map(|(_, t)| *t).max().unwrap_or(0);

    let mut out = String::from("Wedding Budget Comparison: Low vs Mid vs High Scenarios\n");

    for (scenario, total) in &totals {
        let bar_width = if max_total == 0 {
            0
        } else {
            ((*total * width as u64 + max_total / 2) / max_total) as usize
        };
        let amounts: Vec<u64> = rows.iter().map(|r| r.amount(*scenario)).collect();
        let widths = segment_widths(&amounts, bar_width);
        out.push_str(&format!(
            "{:<4} |{:<width$}| {}\n",
            scenario.name(),
            draw_bar(&widths),
            format_usd(*total),
        ));
    }

    out.push_str("Legend:");
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!("  {} {}", segment_glyph(i), row.category));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_widths_sum_to_width() {
        let amounts = [1000, 5000, 17408, 6750, 3500, 1300, 5000, 1020, 7000];
        for width in [1, 7, 40, 60, 101] {
            let widths = segment_widths(&amounts, width);
            assert_eq!(widths.iter().sum::<usize>(), width);
        }
    }

    #[test]
    fn test_widths_proportional() {
        assert_eq!(segment_widths(&[1, 1, 2], 8), vec![2, 2, 4]);
        assert_eq!(segment_widths(&[1, 1, 1], 10), vec![4, 3, 3]);
    }

    #[test]
    fn test_widths_all_zero() {
        assert_eq!(segment_widths(&[0, 0], 10), vec![0, 0]);
        assert!(segment_widths(&[], 10).is_empty());
    }

    #[test]
    fn test_percent_of() {
        assert_float_absolute_eq!(percent_of(1, 4), 25.0, 1e-9);
        assert_float_absolute_eq!(percent_of(5, 0), 0.0, 1e-9);
    }

    #[test]
    fn test_scenario_bars_scale_to_high() {
        let rows = crate::planner::preset_rows();
        let chart = stacked_scenarios(rows, 60);
        let high_line = chart.lines().find(|l| l.starts_with("High")).unwrap();
        let bar: String = high_line
            .split('|')
            .nth(1)
            .unwrap()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        assert_eq!(bar.chars().count(), 60);
        assert!(high_line.ends_with("$66,100"));
    }
}
