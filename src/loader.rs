use crate::config::CostTable;
use crate::error::{BfResult, BidError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Loads a cost table from `.json` or `.csv`. Keys missing from the file keep
/// their default rates.
pub fn load_cost_table<P: AsRef<Path>>(path: P) -> BfResult<CostTable> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    info!("📂 Loading cost table: {}", path.display());

    match ext.as_deref() {
        Some("json") => CostTable::load_from_file(path),
        Some("csv") => load_cost_table_csv(File::open(path)?),
        _ => Err(BidError::Config(format!(
            "Unsupported cost table format '{}' (expected .json or .csv)",
            path.display()
        ))),
    }
}

/// Reads `key,value` rows (with a header line) on top of the default table.
pub fn load_cost_table_csv<R: Read>(reader: R) -> BfResult<CostTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = CostTable::default();
    let mut skipped_count = 0;

    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 || rec[0].is_empty() {
            skipped_count += 1;
            continue;
        }

        let value: f64 = match rec[1].parse() {
            Ok(v) => v,
            Err(_) => {
                warn!("   ⚠️  [Row {}] Invalid rate '{}' for {}", idx + 1, &rec[1], &rec[0]);
                skipped_count += 1;
                continue;
            }
        };

        table.set_by_name(&rec[0], value)?;
    }

    if skipped_count > 0 {
        warn!("   ⚠️  Skipped {} invalid rows in cost table.", skipped_count);
    }

    Ok(table)
}
