use base64::Engine;
use tracing::{trace, warn};

use super::{
    Request,
    flags::{self, Pending, Token},
};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Walk the cleaned tokens once, left to right, and fill in a [`Request`].
///
/// Never fails: unknown flags and stray words are ignored, and a header
/// value without a colon is logged and skipped.
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Request {
    let mut request = Request::default();
    let mut pending: Option<Pending> = None;

    for token in tokens {
        let token = token.as_ref();
        let kind = flags::classify(token);
        trace!(token, ?kind, ?pending, "classified token");

        match kind {
            Token::Url => request.url = token.to_owned(),
            Token::Flag(next) => pending = Some(next),
            Token::Head => request.method = "HEAD".to_owned(),
            Token::Other if token.is_empty() => {}
            Token::Other => {
                if let Some(expected) = pending.take() {
                    apply(&mut request, expected, token);
                }
            }
        }
    }

    request
}

fn apply(request: &mut Request, pending: Pending, value: &str) {
    match pending {
        Pending::Header => match flags::parse_header_field(value) {
            Ok((name, value)) => {
                request.header.insert(name.to_owned(), value.to_owned());
            }
            Err(e) => {
                warn!(error = %e, "skipping header");
            }
        },
        Pending::UserAgent => {
            request.header.insert("User-Agent".to_owned(), value.to_owned());
        }
        Pending::Data => {
            if request.method == "GET" || request.method == "HEAD" {
                request.method = "POST".to_owned();
            }

            if !request.header.contains_key(CONTENT_TYPE) {
                request
                    .header
                    .insert(CONTENT_TYPE.to_owned(), FORM_URLENCODED.to_owned());
            }

            if !request.body.is_empty() {
                request.body.push('&');
            }
            request.body.push_str(value);
        }
        Pending::User => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(value.as_bytes());
            request
                .header
                .insert("Authorization".to_owned(), format!("Basic {}", encoded));
        }
        Pending::Method => request.method = value.to_owned(),
        Pending::Cookie => {
            request.header.insert("Cookie".to_owned(), value.to_owned());
        }
    }
}
