use tracing::trace;

use crate::error::{ParseError, Result};

/// The only short flag whose value may be fused onto it, e.g. `-XPUT`.
const FUSED_METHOD_FLAG: &str = "-X";

/// Split a raw command line into shell words.
///
/// Single quotes, double quotes, backslash escapes and `\<newline>` line
/// continuations are resolved here; the returned words carry no quoting.
/// Newlines inside quotes stay part of the word, and a quoted `''` is kept
/// as an empty word.
pub fn tokenize(raw: &str) -> Result<Vec<String>> {
    let joined = join_continuations(raw);
    let tokens = shlex::split(&joined).ok_or(ParseError::TokenizationFailed)?;
    trace!(count = tokens.len(), "tokenized command");
    Ok(tokens)
}

/// Drop every `\<newline>` (or `\<cr><lf>`) outside single quotes.
///
/// shlex would otherwise turn a continuation between two words into an
/// empty word of its own.
fn join_continuations(raw: &str) -> String {
    let mut joined = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    while let Some(c) = chars.next() {
        match c {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            '\\' if !in_single_quote => match chars.peek() {
                Some('\n') => {
                    chars.next();
                    continue;
                }
                Some('\r') => {
                    let mut ahead = chars.clone();
                    ahead.next();
                    if ahead.peek() == Some(&'\n') {
                        chars.next();
                        chars.next();
                        continue;
                    }
                }
                Some(&escaped) => {
                    joined.push(c);
                    joined.push(escaped);
                    chars.next();
                    continue;
                }
                None => {}
            },
            _ => {}
        }
        joined.push(c);
    }

    joined
}

/// Clean up the shell words before interpretation.
///
/// Each token is trimmed, newline-only tokens are dropped, embedded newlines
/// are removed and a fused method flag (`-XPUT`) is split into `-X` `PUT`.
/// Running it over its own output changes nothing.
pub fn rewrite<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut res = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();
        let trimmed = token.trim();

        if trimmed.is_empty() && token.contains('\n') {
            continue;
        }

        let cleaned = if trimmed.contains('\n') {
            trimmed.replace('\n', "")
        } else {
            trimmed.to_owned()
        };

        match cleaned
            .strip_prefix(FUSED_METHOD_FLAG)
            .map(str::trim_start)
        {
            Some(method) if !method.is_empty() => {
                res.push(FUSED_METHOD_FLAG.to_owned());
                res.push(method.to_owned());
            }
            _ => res.push(cleaned),
        }
    }

    res
}
