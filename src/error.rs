use thiserror::Error;

/// Failures while building or loading a keypad configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Key mapping cannot be empty")]
    EmptyMapping,

    #[error("Letter group for key '{0}' cannot be empty")]
    EmptyGroup(char),

    #[error("Unknown keypad digit: '{0}'")]
    UnknownDigit(char),
}

/// Failures while decoding an input sequence.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Input sequence is missing")]
    MissingInput,

    #[error("Invalid keypad symbol: '{0}'")]
    InvalidSymbol(char),
}
