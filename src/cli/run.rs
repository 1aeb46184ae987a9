//! Read, transform, write; or record the failure.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::TransformError;
use crate::{debug, log, pipeline};

// =============================================================================
// InputSource
// =============================================================================

/// Where the markup is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Stdin,
        }
    }

    /// Read the whole input as UTF-8 text.
    pub fn read(&self) -> Result<String, TransformError> {
        let mut doc = String::new();
        let read = match self {
            Self::Stdin => io::stdin().lock().read_to_string(&mut doc),
            Self::File(path) => fs::File::open(path).and_then(|mut f| f.read_to_string(&mut doc)),
        };
        read.map_err(|e| TransformError::Read(self.clone(), e))?;
        Ok(doc)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "`{}`", path.display()),
        }
    }
}

// =============================================================================
// Run
// =============================================================================

/// Run the whole pipeline once. The output file is only touched on success.
pub fn run(cli: &Cli) -> Result<(), TransformError> {
    let source = InputSource::from_arg(cli.input.as_deref());
    let doc = source.read()?;
    debug!("read"; "{} bytes from {}", doc.len(), source);

    let output = pipeline::transform(&doc)?;

    fs::write(&cli.output, output.as_bytes())
        .map_err(|e| TransformError::Write(cli.output.clone(), e))?;
    Ok(())
}

/// Run and map the outcome to a process exit code, logging any failure.
pub fn execute(cli: &Cli) -> ExitCode {
    match run(cli) {
        Ok(()) => {
            log!("svg"; "wrote {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = anyhow::Error::new(e);
            log!("error"; "{}", err);
            match write_error_log(&cli.error_log, &err) {
                Ok(()) => log!("error"; "details in {}", cli.error_log.display()),
                Err(io_err) => {
                    log!("error"; "failed to write `{}`: {}", cli.error_log.display(), io_err)
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Write the failure message followed by its cause chain (and backtrace, if captured).
pub fn write_error_log(path: &Path, err: &anyhow::Error) -> io::Result<()> {
    fs::write(path, format_error_log(err))
}

fn format_error_log(err: &anyhow::Error) -> String {
    format!("An error occurred: {err}\n{err:?}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn cli_for(dir: &TempDir, input: &str) -> Cli {
        let input_path = dir.path().join("map.svg");
        fs::write(&input_path, input).unwrap();
        cli_with_input(dir, &input_path)
    }

    fn cli_with_input(dir: &TempDir, input_path: &Path) -> Cli {
        let output = dir.path().join("transformed_svg.txt");
        let error_log = dir.path().join("transform_svg_error.log");
        let args: Vec<OsString> = vec![
            "svg-jsx".into(),
            "--input".into(),
            input_path.into(),
            "--output".into(),
            output.into(),
            "--error-log".into(),
            error_log.into(),
        ];
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_run_writes_transformed_output() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(
            &dir,
            r#"<svg style="enable-background:new 0 0 100 50";"><path id="A" class="st0"/></svg>"#,
        );

        run(&cli).unwrap();

        let output = fs::read_to_string(&cli.output).unwrap();
        assert!(output.contains("style={{ width: '100%', height: 'auto' }}"));
        assert!(output.contains("handleRegionClick('A')"));
        assert!(output.contains(r#"className="st0""#));
        assert!(!cli.error_log.exists());
    }

    #[test]
    fn test_run_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(&dir, "<svg/>");
        fs::write(&cli.output, "stale content from a previous run").unwrap();

        run(&cli).unwrap();

        assert_eq!(fs::read_to_string(&cli.output).unwrap(), "<svg/>");
    }

    #[test]
    fn test_run_unterminated_tag_is_markup_error() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(&dir, r#"<svg><path id="A""#);

        let err = run(&cli).unwrap_err();
        assert!(matches!(err, TransformError::Markup(_)));
        assert!(!cli.output.exists());
    }

    #[test]
    fn test_run_missing_input_is_read_error() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with_input(&dir, &dir.path().join("missing.svg"));

        let err = run(&cli).unwrap_err();
        assert!(matches!(err, TransformError::Read(InputSource::File(_), _)));
        assert!(!cli.output.exists());
    }

    #[test]
    fn test_run_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let input_path = dir.path().join("binary.svg");
        fs::write(&input_path, b"<\xff\xfe>").unwrap();
        let cli = cli_with_input(&dir, &input_path);

        let err = run(&cli).unwrap_err();
        match err {
            TransformError::Read(_, e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_unwritable_output_is_write_error() {
        let dir = TempDir::new().unwrap();
        let mut cli = cli_for(&dir, "<svg/>");
        cli.output = dir.path().join("no-such-dir").join("out.txt");

        let err = run(&cli).unwrap_err();
        assert!(matches!(err, TransformError::Write(ref path, _) if *path == cli.output));
    }

    #[test]
    fn test_execute_failure_populates_error_log() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(&dir, r#"<svg><polygon id="B" points="0,0"#);

        assert_eq!(execute(&cli), ExitCode::FAILURE);

        let log = fs::read_to_string(&cli.error_log).unwrap();
        let mut lines = log.lines();
        assert_eq!(
            lines.next(),
            Some("An error occurred: failed to transform markup")
        );
        assert!(log.contains("Caused by:"));
        assert!(log.contains("unterminated <polygon> tag at byte 5"));
        assert!(!cli.output.exists());
    }

    #[test]
    fn test_execute_success_leaves_no_error_log() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(&dir, r#"<path id="lake"/>"#);

        assert_eq!(execute(&cli), ExitCode::SUCCESS);

        assert!(cli.output.exists());
        assert!(!cli.error_log.exists());
    }

    #[test]
    fn test_execute_bare_unterminated_tag_fails() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(&dir, "<svg><path");

        assert_eq!(execute(&cli), ExitCode::FAILURE);
        assert!(cli.error_log.exists());
        assert!(!cli.output.exists());
    }

    #[test]
    fn test_input_source_display() {
        assert_eq!(InputSource::Stdin.to_string(), "stdin");
        assert_eq!(
            InputSource::from_arg(Some(Path::new("map.svg"))).to_string(),
            "`map.svg`"
        );
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
    }
}
