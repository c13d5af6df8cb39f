use thiserror::Error;

/// Why a curl command could not be turned into a [`Request`](crate::curl::Request).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not start with the literal `curl ` prefix.
    #[error("not a curl command: input must start with \"curl \"")]
    InvalidCommand,

    /// Shell-word splitting failed, usually on an unterminated quote.
    #[error("failed to split the command into words: unbalanced quote or trailing escape")]
    TokenizationFailed,

    /// A header value has no `:` separating its name from its value.
    #[error("malformed header, missing ':' separator: {0}")]
    MalformedHeader(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
