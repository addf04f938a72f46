use pg_render::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize the input as a JSON statement tree: {0}")]
    InputDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to render statement {index}: {source}")]
    Render {
        index: usize,
        #[source]
        source: RenderError,
    },

    #[error("Invalid options file {path}: {reason}")]
    Config { path: String, reason: String },
}
