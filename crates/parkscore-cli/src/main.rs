use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use parkscore_ai::{OnnxNarrator, OnnxScorer};
use parkscore_cli::{Cli, run_session};
use parkscore_core::catalog;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    tracing::info!("parkscore v{}", env!("CARGO_PKG_VERSION"));

    let items = catalog::items();
    catalog::validate(items).context("questionnaire catalog is invalid")?;

    // Both artifacts load before the first question is shown.
    let paths = cli.artifact_paths();
    let scorer = OnnxScorer::load(&paths.classifier, &paths.label_encoder)
        .context("loading severity classifier")?;
    let narrator = OnnxNarrator::load(&paths.model_dir).context("loading narrative model")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "\nParkinson's Diagnosis Assistant")?;
    let report = run_session(items, &scorer, &narrator, &mut input, &mut output)?;

    let rendered = report.render(cli.format).context("rendering report")?;
    writeln!(output, "{rendered}")?;
    output.flush()?;
    Ok(())
}
