use std::{error, fmt, io};

/// Errors produced by dataset handling, the classifiers and the network.
#[derive(Debug, Clone, PartialEq)]
pub enum DigitError {
    /// A size mismatch, empty input, bad hyperparameter or an out-of-order
    /// forward/backward/update call.
    InvalidArgument(String),
    /// Dataset index access beyond the stored samples.
    OutOfRange { index: usize, len: usize },
    /// The given path does not exist.
    FileNotFound(String),
    /// A dataset row could not be parsed. `row` is 1-based.
    Parse { row: usize, message: String },
    /// Any other I/O failure while reading a file.
    Io(String),
    /// A configuration file was not valid JSON for `ExperimentConfig`.
    Config(String),
}

pub type Result<T> = std::result::Result<T, DigitError>;

impl DigitError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DigitError::InvalidArgument(message.into())
    }

    /// Maps an I/O error on `path`, keeping "not found" distinct.
    pub(crate) fn from_io(err: io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound(path.to_string()),
            _ => Self::Io(format!("{}: {}", path, err)),
        }
    }
}

impl error::Error for DigitError {}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Self::OutOfRange { index, len } => {
                write!(f, "index {} out of range for dataset of {} samples", index, len)
            }
            Self::FileNotFound(path) => write!(f, "file not found: {}", path),
            Self::Parse { row, message } => write!(f, "row {}: {}", row, message),
            Self::Io(msg) => write!(f, "i/o error: {}", msg),
            Self::Config(msg) => write!(f, "bad configuration: {}", msg),
        }
    }
}

impl From<serde_json::Error> for DigitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

