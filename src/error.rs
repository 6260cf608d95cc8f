//! Error types for the presentation layer.

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Theme field validation failed at configuration time.
    #[error("invalid theme configuration: {0}")]
    Config(String),

    /// A progress or spinner template string did not parse.
    #[error("invalid progress template: {0}")]
    Template(#[from] indicatif::style::TemplateError),

    /// Writing to the output sink failed.
    #[error("render error: {0}")]
    Render(#[from] io::Error),

    /// The syntax highlighter rejected the source.
    #[error("highlight error: {0}")]
    Highlight(#[from] syntect::Error),

    /// Interactive input was aborted or could not be read.
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Serializing a value for JSON display failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
