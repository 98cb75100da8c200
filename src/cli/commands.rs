use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::ParallelProcessor;
use crate::utils::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber; later calls are ignored
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Summarise the file named on the command line and write the summary line
pub fn run_with_output<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let path = cli.file.clone().ok_or(ProcessingError::MissingFilename)?;

    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let processor = ParallelProcessor::from_config(&config);
    let summary = processor.process_file(&path)?;

    summary.write_to(out)?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_filename() {
        let cli = Cli::try_parse_from(["brc-processor"]).unwrap();
        let mut out = Vec::new();

        let err = run_with_output(cli, &mut out).unwrap_err();

        assert!(matches!(err, ProcessingError::MissingFilename));
        assert_eq!(err.to_string(), "Missing measurements filename");
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_prints_summary_line() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"A;3.0\nB;-1.2\nA;5.0\n")?;
        file.flush()?;

        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["brc-processor", "-w", "2", path.as_str()]).unwrap();
        let mut out = Vec::new();

        run_with_output(cli, &mut out)?;

        assert_eq!(
            String::from_utf8_lossy(&out),
            "{A=3.0/4.0/5.0, B=-1.2/-1.2/-1.2}\n"
        );
        Ok(())
    }

    #[test]
    fn test_run_writes_non_utf8_identifier_unchanged() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"Caf\xe9;1.5\nCaf\xe9;2.5\n")?;
        file.flush()?;

        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["brc-processor", "-w", "1", path.as_str()]).unwrap();
        let mut out = Vec::new();

        run_with_output(cli, &mut out)?;

        assert_eq!(out, b"{Caf\xe9=1.5/2.0/2.5}\n".to_vec());
        Ok(())
    }

    #[test]
    fn test_missing_input_names_cause() {
        let cli =
            Cli::try_parse_from(["brc-processor", "-w", "1", "/nonexistent/measurements.txt"])
                .unwrap();
        let mut out = Vec::new();

        let err = run_with_output(cli, &mut out).unwrap_err();
        assert!(err.to_string().starts_with("Open: /nonexistent/measurements.txt"));
    }
}
