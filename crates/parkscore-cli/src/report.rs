//! Final assessment report.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use parkscore_core::{SectionTotal, UpdrsScore};
use serde::Serialize;

const RULE: &str = "==============================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub score: UpdrsScore,
    pub max_score: u32,
    pub label: String,
    pub narrative: String,
    pub sections: Vec<SectionTotal>,
    pub assessed_at: DateTime<Utc>,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(out, "Total UPDRS Score: {}", self.score);
        for part in &self.sections {
            let _ = writeln!(
                out,
                "  {} ({}): {} / {}",
                part.section.label(),
                part.section.title(),
                part.score,
                part.max
            );
        }
        let _ = writeln!(out, "ML Prediction: {}", self.label);
        let _ = writeln!(out, "LLM Recommendation: {}", self.narrative);
        let _ = writeln!(
            out,
            "Assessed at: {}",
            self.assessed_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "{RULE}");
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use parkscore_core::Section;

    fn report() -> Report {
        Report {
            score: UpdrsScore::new(42),
            max_score: 236,
            label: "Moderate".to_string(),
            narrative: "Schedule a neurology follow-up.".to_string(),
            sections: vec![
                SectionTotal {
                    section: Section::PartI,
                    score: 6,
                    answered: 7,
                    max: 28,
                },
                SectionTotal {
                    section: Section::PartIII,
                    score: 36,
                    answered: 33,
                    max: 132,
                },
            ],
            assessed_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn text_report_lines() {
        let text = report().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "",
                RULE,
                "Total UPDRS Score: 42",
                "  Part I (Non-motor experiences of daily living): 6 / 28",
                "  Part III (Motor examination): 36 / 132",
                "ML Prediction: Moderate",
                "LLM Recommendation: Schedule a neurology follow-up.",
                "Assessed at: 2025-03-14 09:30:00 UTC",
                RULE,
            ]
        );
    }

    #[test]
    fn empty_narrative_still_renders() {
        let mut r = report();
        r.narrative.clear();
        assert!(r.render_text().contains("LLM Recommendation: \n"));
    }

    #[test]
    fn json_report_fields() {
        let json: serde_json::Value =
            serde_json::from_str(&report().render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["score"], 42);
        assert_eq!(json["max_score"], 236);
        assert_eq!(json["label"], "Moderate");
        assert_eq!(json["sections"][1]["section"], "PartIII");
        assert_eq!(json["sections"][1]["answered"], 33);
        assert_eq!(json["assessed_at"], "2025-03-14T09:30:00Z");
    }
}
