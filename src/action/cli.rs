use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::config::config::{parse_size, validate_batch_dir, validate_input_file, Cli, Target};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::service::config_service::ConfigService;
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

/// Parses the command line, runs the conversion and reports whether the
/// process should exit successfully.
pub fn process_cli_mode() -> io::Result<bool> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;
    run(cli)
}

/// Batch runs succeed once dispatched, whatever happens to individual files.
/// A single-file run succeeds only if that file converted.
pub fn run(cli: Cli) -> io::Result<bool> {
    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config.clone())?;

    if config.show_config {
        println!("Resolved configuration: {:#?}", config);
    }

    Ok(match config.target {
        Target::Batch { .. } => true,
        Target::Single { .. } => output.is_complete_success(),
    })
}

// Builds an AppConfig from command-line arguments, rejecting usage errors
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let size = parse_size(&self.cli.size)?;
        let output = self.cli.output.as_ref().map(PathBuf::from);

        let target = match (&self.cli.batch, &self.cli.input) {
            (Some(dir), _) => Target::Batch {
                dir: validate_batch_dir(dir)?.to_path_buf(),
                output_dir: output,
            },
            (None, Some(input)) => Target::Single {
                input: validate_input_file(input)?.to_path_buf(),
                output,
            },
            (None, None) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "either an input file or --batch DIR is required",
                ))
            }
        };

        Ok(AppConfig {
            target,
            size,
            no_progress: self.cli.no_progress,
            show_config: self.cli.show_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> io::Result<AppConfig> {
        let cli = Cli::try_parse_from(args).unwrap();
        CliConfigAdapter::new(cli).get_config()
    }

    #[test]
    fn size_errors_come_before_path_checks() {
        let err = config_for(&["png_to_svg", "missing.png", "-s", "128"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = config_for(&["png_to_svg", "/no/such/file.png"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, b"x").unwrap();
        let err = config_for(&["png_to_svg", path.to_str().unwrap()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn batch_target_keeps_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&[
            "png_to_svg",
            "-b",
            dir.path().to_str().unwrap(),
            "-o",
            "out",
            "-s",
            "32x16",
        ])
        .unwrap();
        assert_eq!(
            config.target,
            Target::Batch {
                dir: dir.path().to_path_buf(),
                output_dir: Some(PathBuf::from("out")),
            }
        );
        assert_eq!(config.size.to_string(), "32x16");
    }

    #[test]
    fn batch_path_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").unwrap();
        assert!(config_for(&["png_to_svg", "--batch", file.to_str().unwrap()]).is_err());
    }
}
