use serde_json::Value;
use tracing::debug;

use super::{Request, builder::CONTENT_TYPE};

pub const APPLICATION_JSON: &str = "application/json";

/// Compact a JSON body in place when the request declares `application/json`.
///
/// Best effort only: a body that does not parse as a single JSON value is
/// left exactly as it was.
pub fn normalize(request: &mut Request) {
    if request.header.get(CONTENT_TYPE).map(String::as_str) != Some(APPLICATION_JSON) {
        return;
    }

    match compact(&request.body) {
        Ok(body) => request.body = body,
        Err(e) => {
            debug!(error = %e, "leaving json body untouched");
        }
    }
}

fn compact(body: &str) -> serde_json::Result<String> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::to_string(&value)
}
