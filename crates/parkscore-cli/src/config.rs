//! Command-line and environment configuration.
//!
//! Artifact locations fall back to an environment variable and then a
//! default, so a plain `parkscore` run needs no flags.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::OutputFormat;

/// Parkinson's UPDRS assessment assistant
#[derive(Debug, Parser)]
#[command(name = "parkscore", version, about)]
pub struct Cli {
    /// Directory holding classifier.onnx, label_encoder.json, and model/
    #[arg(long, env = "PARKSCORE_ARTIFACTS_DIR", default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Severity classifier (ONNX). Defaults to <artifacts-dir>/classifier.onnx
    #[arg(long, env = "PARKSCORE_CLASSIFIER")]
    pub classifier: Option<PathBuf>,

    /// Label encoder classes (JSON). Defaults to <artifacts-dir>/label_encoder.json
    #[arg(long, env = "PARKSCORE_LABEL_ENCODER")]
    pub label_encoder: Option<PathBuf>,

    /// Narrative model directory. Defaults to <artifacts-dir>/model
    #[arg(long, env = "PARKSCORE_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved locations of the pretrained artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub label_encoder: PathBuf,
    pub model_dir: PathBuf,
}

impl Cli {
    pub fn artifact_paths(&self) -> ArtifactPaths {
        let dir = &self.artifacts_dir;
        ArtifactPaths {
            classifier: self
                .classifier
                .clone()
                .unwrap_or_else(|| dir.join("classifier.onnx")),
            label_encoder: self
                .label_encoder
                .clone()
                .unwrap_or_else(|| dir.join("label_encoder.json")),
            model_dir: self.model_dir.clone().unwrap_or_else(|| dir.join("model")),
        }
    }

    /// Install the stderr log subscriber. `RUST_LOG` applies when no `-v` is given.
    pub fn init_logging(&self) {
        let filter = match self.verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        };

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_paths_override_artifacts_dir() {
        let cli = Cli::try_parse_from([
            "parkscore",
            "--artifacts-dir",
            "/srv/models",
            "--classifier",
            "/tmp/clf.onnx",
            "--model-dir",
            "/opt/gpt2",
        ])
        .unwrap();
        let paths = cli.artifact_paths();
        assert_eq!(paths.classifier, Path::new("/tmp/clf.onnx"));
        assert_eq!(paths.label_encoder, Path::new("/srv/models/label_encoder.json"));
        assert_eq!(paths.model_dir, Path::new("/opt/gpt2"));
    }

    #[test]
    fn format_and_verbosity() {
        let cli = Cli::try_parse_from(["parkscore", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn defaults_to_text_report() {
        let cli = Cli::try_parse_from(["parkscore"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn format_has_no_env_fallback() {
        let format = Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id() == "format")
            .and_then(|arg| arg.get_env().map(|env| env.to_owned()));
        assert_eq!(format, None);
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["parkscore", "--format", "xml"]).is_err());
    }
}
