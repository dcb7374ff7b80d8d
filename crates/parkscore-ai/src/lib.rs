//! Inference layer: ONNX Runtime severity classifier and GPT-2 narrative generator.
//!
//! The pipeline depends only on the [`Scorer`] and [`Narrator`] traits. The
//! ONNX-backed implementations are compiled with the `onnx` feature.

mod classifier;
mod error;
pub mod generation;
mod labels;
mod narrator;
pub mod prompt;
#[cfg(feature = "onnx")]
mod session;

pub use classifier::Scorer;
#[cfg(feature = "onnx")]
pub use classifier::OnnxScorer;
pub use error::InferenceError;
pub use generation::{GPT2_SMALL, GenerationConfig, ModelProfile, generate_greedy};
pub use labels::LabelEncoder;
pub use narrator::Narrator;
#[cfg(feature = "onnx")]
pub use narrator::OnnxNarrator;
pub use prompt::{RESPONSE_MARKER, clean_response, format_instruction, format_prompt};
