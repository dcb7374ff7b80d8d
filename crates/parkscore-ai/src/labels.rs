//! Label encoder exported alongside the severity classifier.
//!
//! The classifier predicts a class index; the encoder maps that index back to
//! the category name it was trained on. On disk it is the encoder's
//! `classes_` array as JSON: `{"classes": ["Mild", "Moderate", ...]}`.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::InferenceError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Load an encoder from a `label_encoder.json` file.
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = std::fs::read_to_string(path).map_err(|e| InferenceError::artifact(path, e))?;
        let encoder: Self =
            serde_json::from_str(&raw).map_err(|e| InferenceError::artifact(path, e))?;
        encoder
            .check()
            .map_err(|reason| InferenceError::artifact(path, reason))?;
        tracing::info!(
            classes = encoder.classes.len(),
            path = %path.display(),
            "loaded label encoder"
        );
        Ok(encoder)
    }

    /// Build an encoder from class names, index i ↔ `classes[i]`.
    pub fn from_classes(classes: Vec<String>) -> Result<Self, InferenceError> {
        let encoder = Self { classes };
        encoder
            .check()
            .map_err(|reason| InferenceError::artifact(Path::new("<inline>"), reason))?;
        Ok(encoder)
    }

    fn check(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("label encoder has no classes".to_string());
        }
        let mut seen = HashSet::with_capacity(self.classes.len());
        for class in &self.classes {
            if !seen.insert(class.as_str()) {
                return Err(format!("duplicate class label {class:?}"));
            }
        }
        Ok(())
    }

    /// Map a predicted class index back to its label.
    ///
    /// Indices outside the known classes are a prediction error, never a
    /// fallback label.
    pub fn inverse_transform(&self, index: i64) -> Result<&str, InferenceError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
            .ok_or_else(|| {
                InferenceError::Prediction(format!(
                    "class index {index} outside label encoder range 0..{}",
                    self.classes.len()
                ))
            })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn encoder() -> LabelEncoder {
        LabelEncoder::from_classes(vec![
            "Mild".to_string(),
            "Moderate".to_string(),
            "Severe".to_string(),
        ])
        .unwrap()
    }

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn inverse_transform_known_indices() {
        let enc = encoder();
        assert_eq!(enc.inverse_transform(0).unwrap(), "Mild");
        assert_eq!(enc.inverse_transform(2).unwrap(), "Severe");
    }

    #[test]
    fn inverse_transform_out_of_range_is_prediction_error() {
        let enc = encoder();
        assert!(matches!(
            enc.inverse_transform(3),
            Err(InferenceError::Prediction(_))
        ));
        assert!(matches!(
            enc.inverse_transform(-1),
            Err(InferenceError::Prediction(_))
        ));
    }

    #[test]
    fn inverse_transform_covers_every_class() {
        let enc = encoder();
        for (i, label) in enc.classes().iter().enumerate() {
            assert_eq!(enc.inverse_transform(i as i64).unwrap(), label);
        }
    }

    #[test]
    fn loads_from_file() {
        let file = write_json(r#"{"classes": ["Healthy", "Parkinson's"]}"#);
        let enc = LabelEncoder::from_file(file.path()).unwrap();
        assert_eq!(enc.classes().len(), 2);
        assert_eq!(enc.inverse_transform(1).unwrap(), "Parkinson's");
    }

    #[test]
    fn missing_file_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LabelEncoder::from_file(&dir.path().join("label_encoder.json")).unwrap_err();
        assert!(matches!(err, InferenceError::ArtifactLoad { .. }));
    }

    #[test]
    fn corrupt_file_is_artifact_error() {
        let file = write_json("not json");
        let err = LabelEncoder::from_file(file.path()).unwrap_err();
        assert!(matches!(err, InferenceError::ArtifactLoad { .. }));
    }

    #[test]
    fn empty_and_duplicate_classes_rejected() {
        let empty = write_json(r#"{"classes": []}"#);
        assert!(matches!(
            LabelEncoder::from_file(empty.path()),
            Err(InferenceError::ArtifactLoad { .. })
        ));

        assert!(LabelEncoder::from_classes(vec!["A".into(), "A".into()]).is_err());
    }
}
