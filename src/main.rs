use anyhow::Result;
use clap::{error::ErrorKind, Parser};

use std::{
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use compute_sales::OUTPUT_FILE;

#[derive(Debug, Parser)]
#[command(version, about = "Totals sales records against a product catalogue")]
struct Args {
    /// JSON catalogue: an array of objects with `title` and `price`
    catalogue: PathBuf,
    /// JSON sales: an array of objects with `Product` and `Quantity`
    sales: PathBuf,
}

/// Parses `argv`, then runs the report, saving it to `output`.
///
/// Returns whether a report was produced. A bad command line prints the usage
/// message to `out` and touches no files.
fn run_cli<I, T>(argv: I, output: &Path, started: Instant, out: &mut impl Write) -> Result<bool>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            writeln!(out, "{}", err.render())?;
            return Ok(false);
        }
    };
    let report = compute_sales::run(&args.catalogue, &args.sales, output, started, out)?;
    Ok(report.is_some())
}

fn main() -> Result<ExitCode> {
    let started = Instant::now();
    env_logger::init();
    let reported = run_cli(
        std::env::args_os(),
        Path::new(OUTPUT_FILE),
        started,
        &mut io::stdout().lock(),
    )?;
    Ok(if reported {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_cli_in_tempdir(argv: &[&str]) -> (bool, String, bool) {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_FILE);
        let mut out = Vec::new();
        let reported = run_cli(argv.iter().copied(), &output, Instant::now(), &mut out).unwrap();
        (reported, String::from_utf8(out).unwrap(), output.exists())
    }

    #[test]
    fn args_require_exactly_two_files() {
        let err = Args::try_parse_from(["compute_sales"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = Args::try_parse_from(["compute_sales", "cat.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = Args::try_parse_from(["compute_sales", "a.json", "b.json", "c.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn args_take_no_output_option() {
        assert!(Args::try_parse_from(["compute_sales", "cat.json", "sales.json", "-o", "x"]).is_err());
        assert!(Args::try_parse_from(["compute_sales", "cat.json", "sales.json", "--output", "x"])
            .is_err());
    }

    #[test]
    fn args_read_catalogue_then_sales() {
        let args = Args::try_parse_from(["compute_sales", "cat.json", "sales.json"]).unwrap();
        assert_eq!(args.catalogue, PathBuf::from("cat.json"));
        assert_eq!(args.sales, PathBuf::from("sales.json"));
    }

    #[test]
    fn run_cli_fn_prints_usage_and_writes_nothing_for_wrong_arg_count() {
        let argvs: [&[&str]; 4] = [
            &["compute_sales"],
            &["compute_sales", "testdata/catalogue.json"],
            &["compute_sales", "testdata/catalogue.json", "testdata/sales.json", "extra"],
            &["compute_sales", "testdata/catalogue.json", "testdata/sales.json", "-o", "x"],
        ];
        for argv in argvs {
            let (reported, out, saved) = run_cli_in_tempdir(argv);
            assert!(!reported, "{argv:?}");
            assert!(out.contains("Usage:"), "{argv:?}: {out}");
            assert!(!out.contains("REPORTE"), "{argv:?}: {out}");
            assert!(!saved, "{argv:?}");
        }
    }

    #[test]
    fn run_cli_fn_saves_report_for_two_files() {
        let (reported, out, saved) = run_cli_in_tempdir(&[
            "compute_sales",
            "testdata/catalogue.json",
            "testdata/sales.json",
        ]);
        assert!(reported);
        assert!(out.contains("Total de Ventas: $20.00"), "{out}");
        assert!(saved);
    }
}
