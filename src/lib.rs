#![doc = include_str!("../README.md")]
use anyhow::Result;
use log::{debug, warn};
use serde_json::Value;

use std::{io::Write, path::Path, time::Instant};

pub mod aggregate;
pub mod loader;
pub mod records;
pub mod report;
pub mod usd;

pub use aggregate::{total_cost, PriceIndex};
pub use loader::{load_json, LoadError};
pub use report::{Report, OUTPUT_FILE};
pub use usd::Usd;

/// Totals the sales in `sales_path` against the catalogue in
/// `catalogue_path`, then prints the report to `out` and saves it to `output`.
///
/// Diagnostics for files that can't be loaded, and for sales that can't be
/// matched, are written to `out` as they happen. Both files are loaded before
/// giving up, so a problem with each is reported. If either file failed to
/// load, no report is produced, `output` is left untouched, and this returns
/// `Ok(None)`.
///
/// The elapsed time in the report is measured from `started`.
///
/// # Errors
///
/// Returns any error from writing to `out` or saving the report.
pub fn run(
    catalogue_path: impl AsRef<Path>,
    sales_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
    started: Instant,
    out: &mut impl Write,
) -> Result<Option<Report>> {
    let catalogue = load_records(catalogue_path, out)?;
    let sales = load_records(sales_path, out)?;
    let (Some(catalogue), Some(sales)) = (catalogue, sales) else {
        warn!("no report produced");
        return Ok(None);
    };
    debug!(
        "{} catalogue entries, {} sales",
        catalogue.len(),
        sales.len()
    );
    let total = total_cost(&catalogue, &sales, out)?;
    let report = Report::new(total, started.elapsed());
    writeln!(out, "{report}")?;
    report.save(output)?;
    Ok(Some(report))
}

fn load_records(path: impl AsRef<Path>, out: &mut impl Write) -> Result<Option<Vec<Value>>> {
    match load_json(path) {
        Ok(records) => Ok(Some(records)),
        Err(err) => {
            warn!("could not load {}", err.path().display());
            writeln!(out, "{err}")?;
            Ok(None)
        }
    }
}
