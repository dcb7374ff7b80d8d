//! Severity classification from the total UPDRS score.
//!
//! The decision boundaries live entirely in the externally trained model.
//! This module only fixes the call contract: one score in, one label out.

use parkscore_core::UpdrsScore;

use crate::error::InferenceError;

/// Maps a total score to a severity category.
///
/// Implementations hold read-only trained state, so repeated calls with the
/// same score return the same label.
pub trait Scorer: Send + Sync {
    fn classify(&self, score: UpdrsScore) -> Result<String, InferenceError>;

    /// Every label the scorer can return.
    fn labels(&self) -> &[String];
}

#[cfg(feature = "onnx")]
mod onnx {
    use std::path::Path;
    use std::sync::Mutex;

    use ort::session::Session;
    use ort::value::Tensor;
    use parkscore_core::UpdrsScore;

    use super::Scorer;
    use crate::error::InferenceError;
    use crate::labels::LabelEncoder;
    use crate::session::open_session;

    /// Scalar-input classifier exported to ONNX (e.g. with skl2onnx).
    ///
    /// The model takes one float tensor of shape `[1, 1]` and its first
    /// output is the predicted class index as int64. The index is mapped
    /// through the co-trained [`LabelEncoder`].
    ///
    /// The session sits behind a Mutex because `Session::run` needs `&mut self`.
    pub struct OnnxScorer {
        session: Mutex<Session>,
        input_name: String,
        encoder: LabelEncoder,
    }

    impl OnnxScorer {
        /// Load the classifier and its label encoder.
        pub fn load(classifier_path: &Path, encoder_path: &Path) -> Result<Self, InferenceError> {
            if !classifier_path.exists() {
                return Err(InferenceError::artifact(classifier_path, "file not found"));
            }

            let session = open_session(classifier_path)
                .map_err(|e| InferenceError::artifact(classifier_path, e))?;

            let input_name = session
                .inputs()
                .first()
                .map(|input| input.name().to_string())
                .ok_or_else(|| {
                    InferenceError::artifact(classifier_path, "model declares no inputs")
                })?;
            if session.outputs().is_empty() {
                return Err(InferenceError::artifact(classifier_path, "model declares no outputs"));
            }

            let encoder = LabelEncoder::from_file(encoder_path)?;

            tracing::info!(
                model = %classifier_path.display(),
                input = %input_name,
                classes = encoder.classes().len(),
                "loaded severity classifier"
            );
            Ok(Self {
                session: Mutex::new(session),
                input_name,
                encoder,
            })
        }

        fn predict_index(&self, score: UpdrsScore) -> Result<i64, InferenceError> {
            let feature = vec![score.value() as f32].into_boxed_slice();
            let tensor = Tensor::from_array(([1i64, 1], feature))
                .map_err(|e| InferenceError::Prediction(format!("build input tensor: {e}")))?;

            let mut session = self.session.lock().map_err(|_| {
                InferenceError::Prediction("classifier session lock poisoned".into())
            })?;

            let outputs = session
                .run(ort::inputs![self.input_name.as_str() => tensor])
                .map_err(|e| {
                    InferenceError::Prediction(format!("classifier rejected input: {e}"))
                })?;

            let (shape, labels) = outputs[0]
                .try_extract_tensor::<i64>()
                .map_err(|e| InferenceError::Prediction(format!("read label output: {e}")))?;

            labels.first().copied().ok_or_else(|| {
                let dims: &[i64] = shape;
                InferenceError::Prediction(format!("empty label output, shape {dims:?}"))
            })
        }
    }

    impl Scorer for OnnxScorer {
        fn classify(&self, score: UpdrsScore) -> Result<String, InferenceError> {
            let index = self.predict_index(score)?;
            let label = self.encoder.inverse_transform(index)?;
            tracing::debug!(score = score.value(), index, label, "classified score");
            Ok(label.to_string())
        }

        fn labels(&self) -> &[String] {
            self.encoder.classes()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use parkscore_core::MAX_TOTAL;
        use std::path::PathBuf;

        fn artifacts_dir() -> PathBuf {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("artifacts")
        }

        fn load() -> OnnxScorer {
            let dir = artifacts_dir();
            OnnxScorer::load(&dir.join("classifier.onnx"), &dir.join("label_encoder.json"))
                .expect("export the classifier with skl2onnx into artifacts/ first")
        }

        #[test]
        #[ignore = "requires artifacts/classifier.onnx and artifacts/label_encoder.json"]
        fn extreme_scores_map_to_known_labels() {
            let scorer = load();
            for score in [0, MAX_TOTAL] {
                let label = scorer.classify(UpdrsScore::new(score)).unwrap();
                assert!(
                    scorer.labels().contains(&label),
                    "label {label:?} for score {score} not in encoder vocabulary"
                );
            }
        }

        #[test]
        #[ignore = "requires artifacts/classifier.onnx and artifacts/label_encoder.json"]
        fn classification_is_deterministic() {
            let scorer = load();
            let score = UpdrsScore::new(57);
            let first = scorer.classify(score).unwrap();
            for _ in 0..5 {
                assert_eq!(scorer.classify(score).unwrap(), first);
            }
        }

        #[test]
        fn missing_model_is_artifact_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = OnnxScorer::load(
                &dir.path().join("classifier.onnx"),
                &dir.path().join("label_encoder.json"),
            )
            .err()
            .unwrap();
            assert!(matches!(err, InferenceError::ArtifactLoad { .. }));
        }
    }
}

#[cfg(feature = "onnx")]
pub use onnx::OnnxScorer;
