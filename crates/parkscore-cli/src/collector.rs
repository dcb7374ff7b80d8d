//! Interactive questionnaire loop.
//!
//! Presents each item in catalog order and blocks on one line of input until
//! it matches a choice key. Invalid input re-asks the same item; there is no
//! way to skip or revisit an item.

use std::io::{BufRead, Write};

use parkscore_core::{QuestionnaireItem, ResponseError, ResponseSet, parse_choice};
use thiserror::Error;

pub const BANNER: &str = "Parkinson's UPDRS Questionnaire";
pub const INPUT_PROMPT: &str = "Enter your response (0–4): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number from 0–4.";

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("input closed after {answered} of {total} items")]
    InputClosed { answered: usize, total: usize },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Ask every item and return the complete set of ratings.
///
/// End of input before the last item is answered is an error; a partial
/// response set is never returned.
pub fn collect_responses<R, W>(
    items: &[QuestionnaireItem],
    input: &mut R,
    output: &mut W,
) -> Result<ResponseSet, CollectError>
where
    R: BufRead,
    W: Write,
{
    let mut responses = ResponseSet::new();
    let mut rejected = 0usize;
    let mut line = Vec::new();

    writeln!(output, "\n{BANNER}")?;

    for item in items {
        render_item(item, output)?;

        let value = loop {
            write!(output, "{INPUT_PROMPT}")?;
            output.flush()?;

            line.clear();
            // Raw bytes so a line that is not UTF-8 is re-asked like any other bad input.
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(CollectError::InputClosed {
                    answered: responses.len(),
                    total: items.len(),
                });
            }

            match parse_choice(item, &String::from_utf8_lossy(&line)) {
                Ok(value) => break value,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected response");
                    rejected += 1;
                    writeln!(output, "{INVALID_INPUT}")?;
                }
            }
        };

        responses.record(item.id, value)?;
        tracing::debug!(id = item.id, value, "recorded response");
    }

    if rejected > 0 {
        tracing::info!(rejected, "invalid responses were re-asked");
    }
    tracing::info!(answered = responses.len(), "questionnaire complete");
    Ok(responses)
}

fn render_item<W: Write>(item: &QuestionnaireItem, output: &mut W) -> std::io::Result<()> {
    writeln!(output, "\nQ{} [{}] {}", item.id, item.section, item.title)?;
    writeln!(output, "{}", item.prompt)?;
    for (key, text) in item.choices {
        writeln!(output, "{key}: {text}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkscore_core::{Section, catalog};
    use std::io::Cursor;

    const CHOICES: &[(&str, &str)] = &[
        ("0", "Normal"),
        ("1", "Slight"),
        ("2", "Mild"),
        ("3", "Moderate"),
        ("4", "Severe"),
    ];

    const SMALL: &[QuestionnaireItem] = &[
        QuestionnaireItem {
            section: Section::PartI,
            id: "a",
            title: "FIRST",
            prompt: "First prompt",
            choices: CHOICES,
        },
        QuestionnaireItem {
            section: Section::PartII,
            id: "b",
            title: "SECOND",
            prompt: "Second prompt",
            choices: CHOICES,
        },
    ];

    type Outcome = (Result<ResponseSet, CollectError>, String);

    fn run(items: &[QuestionnaireItem], input: &str) -> Outcome {
        run_bytes(items, input.as_bytes())
    }

    fn run_bytes(items: &[QuestionnaireItem], input: &[u8]) -> Outcome {
        let mut reader = Cursor::new(input.to_vec());
        let mut writer = Vec::new();
        let result = collect_responses(items, &mut reader, &mut writer);
        (result, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn records_each_item_in_order() {
        let (result, _) = run(SMALL, "3\n1\n");
        let set = result.unwrap();
        assert_eq!(set.get("a"), Some(3));
        assert_eq!(set.get("b"), Some(1));
        let ids: Vec<&str> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn invalid_input_reasks_same_item() {
        let (result, out) = run(SMALL, "\n5\nx\n-1\n 2 \n0\n");
        let set = result.unwrap();
        assert_eq!(set.get("a"), Some(2));
        assert_eq!(set.get("b"), Some(0));
        assert_eq!(out.matches(INVALID_INPUT).count(), 4);
        assert_eq!(out.matches("Qa ").count(), 1);
        assert_eq!(out.matches(INPUT_PROMPT).count(), 6);
    }

    #[test]
    fn rejection_never_advances() {
        let (result, out) = run(SMALL, "9\n9\n9\n");
        assert!(matches!(
            result,
            Err(CollectError::InputClosed {
                answered: 0,
                total: 2
            })
        ));
        assert!(!out.contains("Qb "));
    }

    #[test]
    fn non_utf8_line_reasks_same_item() {
        let (result, out) = run_bytes(SMALL, b"\xe9\n0\n0\n");
        let set = result.unwrap();
        assert_eq!(set.get("a"), Some(0));
        assert_eq!(set.get("b"), Some(0));
        assert_eq!(out.matches(INVALID_INPUT).count(), 1);
        assert_eq!(out.matches("Qa ").count(), 1);
    }

    #[test]
    fn eof_midway_is_input_closed() {
        let (result, _) = run(SMALL, "4\n");
        assert!(matches!(
            result,
            Err(CollectError::InputClosed {
                answered: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn last_line_without_newline_is_accepted() {
        let (result, _) = run(SMALL, "1\n4");
        assert_eq!(result.unwrap().get("b"), Some(4));
    }

    #[test]
    fn renders_prompt_and_choices() {
        let (_, out) = run(SMALL, "0\n0\n");
        assert!(out.starts_with(&format!("\n{BANNER}\n")));
        assert!(out.contains("\nQa [Part I] FIRST\nFirst prompt\n0: Normal\n1: Slight\n"));
        assert!(out.contains("\nQb [Part II] SECOND\n"));
        assert!(out.contains("4: Severe\n"));
    }

    #[test]
    fn full_catalog_all_zero() {
        let input = "0\n".repeat(catalog::ITEM_COUNT);
        let (result, out) = run(catalog::items(), &input);
        let set = result.unwrap();
        assert!(set.is_complete(catalog::items()));
        assert_eq!(set.len(), catalog::ITEM_COUNT);
        assert!(!out.contains(INVALID_INPUT));
    }

    #[test]
    fn duplicate_catalog_ids_surface_as_errors() {
        let dup = [SMALL[0], SMALL[0]];
        let (result, _) = run(&dup, "1\n2\n");
        assert!(matches!(
            result,
            Err(CollectError::Response(ResponseError::Duplicate(_)))
        ));
    }
}
