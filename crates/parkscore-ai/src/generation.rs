//! Bounded greedy autoregressive decoding.
//!
//! The decoding loop is independent of the inference runtime: it asks a
//! `next_logits` callback for the logits of the final position and appends
//! the arg-max token until the end-of-sequence token appears or the new-token
//! budget is spent.

use std::path::Path;

use serde::Deserialize;

use crate::error::InferenceError;

/// Shape limits of a GPT-2 style checkpoint that decoding depends on.
///
/// The remaining architecture constants (width, depth, heads) are baked into
/// the exported graph and never read at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelProfile {
    pub vocab_size: usize,
    pub context_length: usize,
}

/// GPT-2 124M, the base the narrative model was fine-tuned from.
pub const GPT2_SMALL: ModelProfile = ModelProfile {
    vocab_size: 50257,
    context_length: 1024,
};

/// `<|endoftext|>` in the GPT-2 vocabulary.
pub const GPT2_EOS_TOKEN_ID: u32 = 50256;

/// Limits applied to one generation call.
///
/// Loaded from `generation.json` next to the model when present; missing
/// fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub max_new_tokens: usize,
    /// Tokens of history fed to the model on each step.
    pub context_length: usize,
    pub eos_token_id: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 50,
            context_length: GPT2_SMALL.context_length,
            eos_token_id: GPT2_EOS_TOKEN_ID,
        }
    }
}

impl GenerationConfig {
    /// Read overrides from a JSON file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| InferenceError::model(path, e))?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| InferenceError::model(path, e))?;
        config
            .validate(&GPT2_SMALL)
            .map_err(|reason| InferenceError::model(path, reason))?;
        Ok(config)
    }

    /// Check the limits against the model architecture.
    pub fn validate(&self, profile: &ModelProfile) -> Result<(), String> {
        if self.max_new_tokens == 0 {
            return Err("max_new_tokens must be at least 1".to_string());
        }
        if self.context_length == 0 || self.context_length > profile.context_length {
            return Err(format!(
                "context_length {} outside 1..={}",
                self.context_length, profile.context_length
            ));
        }
        if self.eos_token_id as usize >= profile.vocab_size {
            return Err(format!(
                "eos_token_id {} outside vocabulary of {}",
                self.eos_token_id, profile.vocab_size
            ));
        }
        Ok(())
    }
}

/// Greedy decoding from `prompt`.
///
/// `next_logits` receives the running sequence, cropped to the last
/// `context_length` tokens, and returns the logits for the next token.
/// Returns the prompt followed by the generated tokens; the end-of-sequence
/// token itself is not appended.
pub fn generate_greedy<F>(
    prompt: &[u32],
    config: &GenerationConfig,
    mut next_logits: F,
) -> Result<Vec<u32>, InferenceError>
where
    F: FnMut(&[u32]) -> Result<Vec<f32>, InferenceError>,
{
    if prompt.is_empty() {
        return Err(InferenceError::Generation("empty prompt".to_string()));
    }

    let mut tokens = Vec::with_capacity(prompt.len() + config.max_new_tokens);
    tokens.extend_from_slice(prompt);

    for step in 0..config.max_new_tokens {
        let window_start = tokens.len().saturating_sub(config.context_length);
        let logits = next_logits(&tokens[window_start..])?;
        let next = argmax(&logits).ok_or_else(|| {
            InferenceError::Generation(format!("no finite logits at step {step}"))
        })?;

        if next == config.eos_token_id {
            tracing::debug!(step, "end of sequence");
            break;
        }
        tokens.push(next);
    }

    tracing::debug!(
        prompt_tokens = prompt.len(),
        new_tokens = tokens.len() - prompt.len(),
        "generation finished"
    );
    Ok(tokens)
}

/// Index of the largest non-NaN logit; the lowest index wins ties.
fn argmax(logits: &[f32]) -> Option<u32> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &value) in logits.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((i, value)),
        }
    }
    best.and_then(|(i, _)| u32::try_from(i).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VOCAB: usize = 8;
    const EOS: u32 = 7;

    fn config(max_new_tokens: usize, context_length: usize) -> GenerationConfig {
        GenerationConfig {
            max_new_tokens,
            context_length,
            eos_token_id: EOS,
        }
    }

    fn one_hot(token: u32) -> Vec<f32> {
        let mut logits = vec![0.0; VOCAB];
        logits[token as usize] = 1.0;
        logits
    }

    #[test]
    fn argmax_picks_largest_and_breaks_ties_low() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), Some(0));
        assert_eq!(argmax(&[f32::NEG_INFINITY, -3.0]), Some(1));
        assert_eq!(argmax(&[f32::NAN, 2.0, f32::NAN]), Some(1));
        assert_eq!(argmax(&[f32::NAN]), None);
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn stops_at_max_new_tokens() {
        let out = generate_greedy(&[1, 2], &config(5, 16), |_| Ok(one_hot(3))).unwrap();
        assert_eq!(out, vec![1, 2, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn stops_before_eos() {
        let mut calls = 0;
        let out = generate_greedy(&[1], &config(50, 16), |_| {
            calls += 1;
            Ok(if calls < 3 { one_hot(4) } else { one_hot(EOS) })
        })
        .unwrap();
        assert_eq!(out, vec![1, 4, 4]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn immediate_eos_returns_prompt() {
        let out = generate_greedy(&[5, 6], &config(50, 16), |_| Ok(one_hot(EOS))).unwrap();
        assert_eq!(out, vec![5, 6]);
    }

    #[test]
    fn feeds_growing_sequence() {
        let mut seen = Vec::new();
        generate_greedy(&[1], &config(3, 16), |ids| {
            seen.push(ids.to_vec());
            Ok(one_hot(ids.len() as u32 + 1))
        })
        .unwrap();
        assert_eq!(seen, vec![vec![1], vec![1, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn crops_history_to_context_length() {
        let mut lengths = Vec::new();
        let out = generate_greedy(&[1, 2, 3, 4], &config(4, 3), |ids| {
            lengths.push(ids.len());
            Ok(one_hot(5))
        })
        .unwrap();
        assert!(lengths.iter().all(|&n| n == 3));
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn context_window_keeps_most_recent_tokens() {
        let mut last_window = Vec::new();
        generate_greedy(&[1, 2, 3], &config(2, 2), |ids| {
            last_window = ids.to_vec();
            Ok(one_hot(6))
        })
        .unwrap();
        assert_eq!(last_window, vec![3, 6]);
    }

    #[test]
    fn empty_prompt_is_generation_error() {
        let err = generate_greedy(&[], &config(5, 16), |_| Ok(one_hot(1))).unwrap_err();
        assert!(matches!(err, InferenceError::Generation(_)));
    }

    #[test]
    fn nan_logits_are_generation_error() {
        let err = generate_greedy(&[1], &config(5, 16), |_| Ok(vec![f32::NAN; VOCAB])).unwrap_err();
        assert!(matches!(err, InferenceError::Generation(_)));
    }

    #[test]
    fn model_failure_propagates() {
        let err = generate_greedy(&[1], &config(5, 16), |_| {
            Err(InferenceError::Generation("out of memory".into()))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "generation failed: out of memory");
    }

    #[test]
    fn default_config_matches_gpt2() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_new_tokens, 50);
        assert_eq!(config.context_length, 1024);
        assert_eq!(config.eos_token_id, 50256);
        assert!(config.validate(&GPT2_SMALL).is_ok());
    }

    #[test]
    fn validate_rejects_bad_limits() {
        let mut config = GenerationConfig::default();
        config.max_new_tokens = 0;
        assert!(config.validate(&GPT2_SMALL).is_err());

        let mut config = GenerationConfig::default();
        config.context_length = 2048;
        assert!(config.validate(&GPT2_SMALL).is_err());

        let mut config = GenerationConfig::default();
        config.eos_token_id = 50257;
        assert!(config.validate(&GPT2_SMALL).is_err());
    }

    #[test]
    fn config_file_overrides_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generation.json");

        assert_eq!(
            GenerationConfig::from_file(&path).unwrap(),
            GenerationConfig::default()
        );

        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{"max_new_tokens": 20}"#).unwrap();
        let config = GenerationConfig::from_file(&path).unwrap();
        assert_eq!(config.max_new_tokens, 20);
        assert_eq!(config.eos_token_id, GPT2_EOS_TOKEN_ID);
    }

    #[test]
    fn config_file_errors_are_model_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generation.json");

        std::fs::write(&path, r#"{"max_new_tokens": 0}"#).unwrap();
        assert!(matches!(
            GenerationConfig::from_file(&path),
            Err(InferenceError::ModelLoad { .. })
        ));

        std::fs::write(&path, r#"{"temperature": 0.7}"#).unwrap();
        assert!(matches!(
            GenerationConfig::from_file(&path),
            Err(InferenceError::ModelLoad { .. })
        ));
    }
}
