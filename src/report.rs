use anyhow::{Context, Result};
use log::info;

use std::{fmt::Display, fs, path::Path, time::Duration};

use crate::usd::Usd;

/// The file a report is saved to unless told otherwise.
pub const OUTPUT_FILE: &str = "SalesResults.txt";

const BANNER_WIDTH: usize = 30;

/// Holds the outcome of one run: the sales total and how long it took to
/// compute.
///
/// To get the printable text of the report, use its [`Display`]
/// implementation. To persist it, use [`Report::save`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub total: Usd,
    pub elapsed: Duration,
}

impl Report {
    #[must_use]
    pub fn new(total: Usd, elapsed: Duration) -> Self {
        Self { total, elapsed }
    }

    /// Writes the report text to `path`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns any error from creating or writing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("report saved to {}", path.display());
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-<BANNER_WIDTH$}", "")?;
        writeln!(f, "REPORTE DE VENTAS")?;
        writeln!(f, "{:-<BANNER_WIDTH$}", "")?;
        writeln!(f, "Total de Ventas: {}", self.total)?;
        writeln!(
            f,
            "Tiempo de ejecución: {:.4} segundos",
            self.elapsed.as_secs_f64()
        )?;
        writeln!(f, "{:-<BANNER_WIDTH$}", "")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_renders_fixed_layout() {
        let report = Report::new(Usd::from(2_481_086.94), Duration::from_micros(1_234_567));
        assert_eq!(
            report.to_string(),
            "------------------------------\n\
             REPORTE DE VENTAS\n\
             ------------------------------\n\
             Total de Ventas: $2,481,086.94\n\
             Tiempo de ejecución: 1.2346 segundos\n\
             ------------------------------\n"
        );
    }

    #[test]
    fn save_fn_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        fs::write(&path, "stale contents that are longer than the report itself\n".repeat(10))
            .unwrap();
        let report = Report::new(Usd::from(20.0), Duration::ZERO);
        report.save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), report.to_string());
    }

    #[test]
    fn save_fn_returns_error_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let report = Report::new(Usd::default(), Duration::ZERO);
        assert!(report.save(dir.path().join("no/such/dir/out.txt")).is_err());
    }
}
