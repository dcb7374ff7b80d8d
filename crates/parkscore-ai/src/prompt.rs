//! Instruction-tuning prompt templates for the narrative model.

use parkscore_core::UpdrsScore;

/// Marker that opens the response section of the prompt frame.
pub const RESPONSE_MARKER: &str = "### Response:";

const PREAMBLE: &str = "Below is an instruction that describes a task. \
Write a response that appropriately completes the request.";

/// Render the score as the model's instruction, e.g. `"UPDRS score: 5"`.
pub fn format_instruction(score: UpdrsScore) -> String {
    format!("UPDRS score: {score}")
}

/// Wrap an instruction in the task frame the model was fine-tuned on.
pub fn format_prompt(instruction: &str) -> String {
    format!("{PREAMBLE}\n\n### Instruction:\n{instruction}")
}

/// Strip the echoed prompt and response marker from decoded model output.
///
/// The model output starts with the prompt it was given; that prefix is
/// removed, then every `### Response:` marker, then surrounding whitespace.
/// Whatever remains is returned as-is, including an empty string.
pub fn clean_response(raw: &str, prompt: &str) -> String {
    let body = raw.strip_prefix(prompt).unwrap_or(raw);
    body.replace(RESPONSE_MARKER, "").trim().to_string()
}
