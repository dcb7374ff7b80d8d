use std::path::Path;

use ort::session::Session;

/// Open an ONNX Runtime session for a model file.
pub(crate) fn open_session(model_path: &Path) -> ort::Result<Session> {
    Session::builder()?.commit_from_file(model_path)
}
