//! Free-text recommendation from the total score.

use parkscore_core::UpdrsScore;

use crate::error::InferenceError;

/// Produces a narrative recommendation for a score.
///
/// The returned text is not validated; an empty or ungrammatical narrative
/// is a valid result.
pub trait Narrator: Send + Sync {
    fn narrate(&self, score: UpdrsScore) -> Result<String, InferenceError>;
}

#[cfg(feature = "onnx")]
mod onnx {
    use std::path::Path;
    use std::sync::Mutex;

    use ort::session::Session;
    use ort::value::Tensor;
    use parkscore_core::UpdrsScore;
    use tokenizers::Tokenizer;

    use super::Narrator;
    use crate::error::InferenceError;
    use crate::generation::{GPT2_SMALL, GenerationConfig, ModelProfile, generate_greedy};
    use crate::prompt::{clean_response, format_instruction, format_prompt};
    use crate::session::open_session;

    /// Fine-tuned GPT-2 narrative model running on ONNX Runtime.
    ///
    /// The model directory must contain `model.onnx` (the fine-tuned weights
    /// merged into the base checkpoint at export time) and `tokenizer.json`
    /// (GPT-2 byte-level BPE). An optional `generation.json` overrides the
    /// decoding limits.
    pub struct OnnxNarrator {
        session: Mutex<Session>,
        tokenizer: Tokenizer,
        config: GenerationConfig,
        profile: ModelProfile,
        wants_attention_mask: bool,
        wants_position_ids: bool,
    }

    impl OnnxNarrator {
        pub fn load(model_dir: &Path) -> Result<Self, InferenceError> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");

            require_file(&model_path)?;
            require_file(&tokenizer_path)?;

            let config = GenerationConfig::from_file(&model_dir.join("generation.json"))?;

            let session =
                open_session(&model_path).map_err(|e| InferenceError::model(&model_path, e))?;

            let input_names: Vec<String> = session
                .inputs()
                .iter()
                .map(|input| input.name().to_string())
                .collect();
            if !input_names.iter().any(|name| name == "input_ids") {
                return Err(InferenceError::model(
                    &model_path,
                    format!("model has no input_ids input (inputs: {input_names:?})"),
                ));
            }
            let wants_attention_mask = input_names.iter().any(|name| name == "attention_mask");
            let wants_position_ids = input_names.iter().any(|name| name == "position_ids");

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| InferenceError::model(&tokenizer_path, e))?;
            let vocab = tokenizer.get_vocab_size(true);
            if vocab != GPT2_SMALL.vocab_size {
                return Err(InferenceError::model(
                    &tokenizer_path,
                    format!(
                        "tokenizer vocabulary is {vocab}, expected {}",
                        GPT2_SMALL.vocab_size
                    ),
                ));
            }

            tracing::info!(
                model = %model_path.display(),
                max_new_tokens = config.max_new_tokens,
                context_length = config.context_length,
                "loaded narrative model"
            );
            Ok(Self {
                session: Mutex::new(session),
                tokenizer,
                config,
                profile: GPT2_SMALL,
                wants_attention_mask,
                wants_position_ids,
            })
        }

        /// Logits for the token following `ids`.
        fn next_logits(
            &self,
            session: &mut Session,
            ids: &[u32],
        ) -> Result<Vec<f32>, InferenceError> {
            let seq_len = ids.len();
            let shape = [1i64, seq_len as i64];

            let input_ids: Vec<i64> = ids.iter().map(|&id| i64::from(id)).collect();
            let ids_tensor = tensor(shape, input_ids)?;

            let outputs = match (self.wants_attention_mask, self.wants_position_ids) {
                (true, true) => session.run(ort::inputs![
                    "input_ids" => ids_tensor,
                    "attention_mask" => tensor(shape, vec![1i64; seq_len])?,
                    "position_ids" => tensor(shape, (0..seq_len as i64).collect())?,
                ]),
                (true, false) => session.run(ort::inputs![
                    "input_ids" => ids_tensor,
                    "attention_mask" => tensor(shape, vec![1i64; seq_len])?,
                ]),
                (false, true) => session.run(ort::inputs![
                    "input_ids" => ids_tensor,
                    "position_ids" => tensor(shape, (0..seq_len as i64).collect())?,
                ]),
                (false, false) => session.run(ort::inputs!["input_ids" => ids_tensor]),
            }
            .map_err(|e| InferenceError::Generation(format!("model forward pass: {e}")))?;

            // Logits: [1, seq_len, vocab_size].
            let (output_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| InferenceError::Generation(format!("read logits: {e}")))?;
            let dims: &[i64] = output_shape;
            let vocab = self.profile.vocab_size;
            if dims.len() != 3
                || dims[0] != 1
                || dims[1] as usize != seq_len
                || dims[2] as usize != vocab
            {
                return Err(InferenceError::Generation(format!(
                    "unexpected logits shape {dims:?}, expected [1, {seq_len}, {vocab}]"
                )));
            }

            let last = (seq_len - 1) * vocab;
            Ok(data[last..last + vocab].to_vec())
        }
    }

    impl Narrator for OnnxNarrator {
        fn narrate(&self, score: UpdrsScore) -> Result<String, InferenceError> {
            let prompt = format_prompt(&format_instruction(score));

            let encoding = self
                .tokenizer
                .encode(prompt.as_str(), false)
                .map_err(|e| InferenceError::Generation(format!("tokenize prompt: {e}")))?;
            let prompt_ids = encoding.get_ids();

            let mut session = self
                .session
                .lock()
                .map_err(|_| InferenceError::Generation("model session lock poisoned".into()))?;

            let token_ids = generate_greedy(prompt_ids, &self.config, |ids| {
                self.next_logits(&mut session, ids)
            })?;
            drop(session);

            let raw = self
                .tokenizer
                .decode(&token_ids, false)
                .map_err(|e| InferenceError::Generation(format!("decode output: {e}")))?;

            let narrative = clean_response(&raw, &prompt);
            tracing::debug!(
                score = score.value(),
                generated = token_ids.len() - prompt_ids.len(),
                chars = narrative.len(),
                "narrated score"
            );
            Ok(narrative)
        }
    }

    fn tensor(shape: [i64; 2], values: Vec<i64>) -> Result<Tensor<i64>, InferenceError> {
        Tensor::from_array((shape, values.into_boxed_slice()))
            .map_err(|e| InferenceError::Generation(format!("build input tensor: {e}")))
    }

    fn require_file(path: &Path) -> Result<(), InferenceError> {
        if path.exists() {
            Ok(())
        } else {
            Err(InferenceError::model(path, "file not found"))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::prompt::RESPONSE_MARKER;
        use std::path::PathBuf;

        fn model_dir() -> PathBuf {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("artifacts")
                .join("model")
        }

        fn load() -> OnnxNarrator {
            OnnxNarrator::load(&model_dir())
                .expect("export the fine-tuned GPT-2 to artifacts/model/model.onnx first")
        }

        #[test]
        #[ignore = "requires artifacts/model/model.onnx and tokenizer.json"]
        fn narrative_has_no_prompt_echo() {
            let narrator = load();
            let text = narrator.narrate(UpdrsScore::new(30)).unwrap();
            assert!(!text.contains(RESPONSE_MARKER));
            assert!(!text.contains("### Instruction:"));
            assert_eq!(text, text.trim());
        }

        #[test]
        #[ignore = "requires artifacts/model/model.onnx and tokenizer.json"]
        fn greedy_narrative_is_repeatable() {
            let narrator = load();
            let score = UpdrsScore::new(80);
            assert_eq!(
                narrator.narrate(score).unwrap(),
                narrator.narrate(score).unwrap()
            );
        }

        #[test]
        fn missing_model_dir_is_model_load_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = OnnxNarrator::load(dir.path()).err().unwrap();
            assert!(matches!(err, InferenceError::ModelLoad { .. }));
        }
    }
}

#[cfg(feature = "onnx")]
pub use onnx::OnnxNarrator;
