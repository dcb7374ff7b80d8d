//! One assessment session, start to finish.

use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::Utc;
use parkscore_ai::{Narrator, Scorer};
use parkscore_core::{QuestionnaireItem, aggregate, section_totals};

use crate::collector::collect_responses;
use crate::report::Report;

/// Collect responses, then classify and narrate the total score.
///
/// Any failure after collection aborts the session without a report.
pub fn run_session<R, W>(
    items: &[QuestionnaireItem],
    scorer: &dyn Scorer,
    narrator: &dyn Narrator,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Report>
where
    R: BufRead,
    W: Write,
{
    let responses = collect_responses(items, input, output).context("collecting responses")?;

    let score = aggregate(&responses).context("aggregating responses")?;
    tracing::info!(score = score.value(), "aggregated UPDRS score");

    let label = scorer.classify(score).context("classifying severity")?;
    tracing::info!(label = %label, "severity classified");

    let narrative = narrator.narrate(score).context("generating recommendation")?;
    tracing::info!(chars = narrative.len(), "recommendation generated");

    Ok(Report {
        score,
        max_score: items.iter().map(|item| u32::from(item.max_score())).sum(),
        label,
        narrative,
        sections: section_totals(&responses, items),
        assessed_at: Utc::now(),
    })
}
