use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    /// Classifier or label encoder missing or unreadable.
    #[error("cannot load artifact {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    /// Language model, tokenizer, or generation settings missing or unreadable.
    #[error("cannot load language model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("generation failed: {0}")]
    Generation(String),
}

impl InferenceError {
    pub(crate) fn artifact(path: &Path, reason: impl ToString) -> Self {
        Self::ArtifactLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn model(path: &Path, reason: impl ToString) -> Self {
        Self::ModelLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
