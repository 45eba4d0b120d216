use std::path::PathBuf;
use thiserror::Error;

/// Everything that can push a run onto the manual-instructions path.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error: {} not found!", .0.display())]
    InputNotFound(PathBuf),

    #[error("Pandoc not found ({0})")]
    ToolUnavailable(String),

    #[error("Conversion failed: {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },

    #[error("Error during conversion: could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
