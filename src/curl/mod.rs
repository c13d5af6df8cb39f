pub mod body;
pub mod builder;
pub mod flags;
pub mod tokenizer;

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ParseError, Result};

const CURL_CMD: &str = "curl ";

/// Header names are case-sensitive; insertion order is kept for output.
pub type Header = IndexMap<String, String>;

/// The HTTP request described by a curl command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub header: Header,
    pub body: String,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_owned(),
            url: String::new(),
            header: Header::new(),
            body: String::new(),
        }
    }
}

impl Request {
    /// Encode as JSON, indented by two spaces when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> String {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        // Only string fields and a string map: encoding cannot fail.
        encoded.unwrap_or_default()
    }
}

impl FromStr for Request {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

pub fn is_curl(input: &str) -> bool {
    input.starts_with(CURL_CMD)
}

/// Parse a full `curl ...` command line into a [`Request`].
///
/// Only a missing `curl ` prefix or broken shell quoting are errors; anything
/// else the command contains is interpreted on a best-effort basis.
pub fn parse(raw: &str) -> Result<Request> {
    if !is_curl(raw) {
        return Err(ParseError::InvalidCommand);
    }

    let tokens = tokenizer::rewrite(&tokenizer::tokenize(raw)?);
    let mut request = builder::build(&tokens);
    body::normalize(&mut request);

    debug!(
        method = %request.method,
        url = %request.url,
        headers = request.header.len(),
        "parsed curl command"
    );
    Ok(request)
}
