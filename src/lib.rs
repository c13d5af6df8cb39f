pub mod curl;
pub mod error;

#[cfg(test)]
mod test_util;

pub use curl::{Header, Request, parse};
pub use error::ParseError;
