use std::io;
use thiserror::Error;

/// Fatal pipeline failures, reported once; the run stops on the first one.
///
/// Components return these up through the stages instead of terminating the
/// process — exit behavior is the caller's decision.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input stream could not be opened or read. Nothing has been
    /// written when this occurs.
    #[error("failed to read input")]
    Input(#[source] io::Error),

    /// A `<drug>` element could not be decoded into the schema model.
    /// Aborts the whole pass: partial relational output is unsafe to load.
    #[error("failed to decode drug record")]
    Decode(#[from] DecodeError),

    /// The output directory could not be created.
    #[error("failed to create output directory")]
    OutputDir(#[source] io::Error),

    /// A relation file could not be written; names the failing relation.
    #[error("failed to write relation `{relation}`")]
    Output {
        relation: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Why a single record failed to decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("record does not match the drug schema: {0}")]
    Schema(#[from] quick_xml::DeError),

    #[error("record is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("input ended inside a drug record")]
    Truncated,

    #[error("failed to buffer record subtree: {0}")]
    Buffer(String),
}
