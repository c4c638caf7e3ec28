//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Url(url::ParseError),
    /// Two records share a key that has to be unique (canonical sentence ID, mapping key).
    DuplicateKey(String),
    /// A corpus or mapping file line that does not have the expected shape.
    MalformedLine { line: u64, reason: String },
    /// A sentence lacks a metadata entry that the operation needs.
    MissingMetadata(&'static str),
    /// The collection schema does not declare a required column.
    MissingColumn(&'static str),
    /// A canonical ID that does not follow the shape expected for its origin.
    MalformedId { id: String, reason: String },
    /// A destination sentence without counterpart where full coverage is required.
    MissingSentence(String),
    /// The annotation service failed or returned something unusable.
    Annotation(String),
    Config(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "tsv error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {e}"),
            Error::Url(e) => write!(f, "invalid uri: {e}"),
            Error::DuplicateKey(k) => write!(f, "duplicate key: {k:?}"),
            Error::MalformedLine { line, reason } => write!(f, "line {line}: {reason}"),
            Error::MissingMetadata(key) => write!(f, "sentence without `{key}` metadata"),
            Error::MissingColumn(col) => write!(f, "column {col} not declared"),
            Error::MalformedId { id, reason } => write!(f, "malformed id {id:?}: {reason}"),
            Error::MissingSentence(id) => write!(f, "no source sentence for {id:?}"),
            Error::Annotation(msg) => write!(f, "annotation failed: {msg}"),
            Error::Config(msg) => write!(f, "bad configuration: {msg}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
