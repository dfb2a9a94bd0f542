use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::Breakdown;

/// Write a breakdown as `Category,Amount` CSV rows in breakdown order.
pub fn write_breakdown_csv<W: Write>(breakdown: &Breakdown, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Category", "Amount"])?;
    for entry in breakdown {
        let amount = entry.amount.to_string();
        wtr.write_record([entry.category.name(), amount.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the CSV export in memory.
pub fn breakdown_to_csv(breakdown: &Breakdown) -> Result<String> {
    let mut buf = Vec::new();
    write_breakdown_csv(breakdown, &mut buf)?;
    // The csv writer only emits the UTF-8 it was given.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Save the CSV export to `path`.
pub fn save_breakdown_csv<P: AsRef<Path>>(path: P, breakdown: &Breakdown) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_breakdown_csv(breakdown, file)?;
    info!(path = %path.display(), rows = breakdown.len(), "wrote breakdown CSV");
    Ok(())
}
