use winnow::{
    ModalResult, Parser,
    combinator::separated_pair,
    token::{rest, take_until},
};

use crate::error::{ParseError, Result};

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

const USER_AGENT_FLAGS: &[&str] = &["-A", "--user-agent"];
const HEADER_FLAGS: &[&str] = &["-H", "--header"];
const DATA_FLAGS: &[&str] = &["-d", "--data", "--data-ascii", "--data-raw", "--data-binary"];
const USER_FLAGS: &[&str] = &["-u", "--user"];
const HEAD_FLAGS: &[&str] = &["-I", "--head"];
const METHOD_FLAGS: &[&str] = &["-X", "--request"];
const COOKIE_FLAGS: &[&str] = &["-b", "--cookie"];

/// What the next value token will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Header,
    UserAgent,
    Data,
    User,
    Method,
    Cookie,
}

/// How a single token is interpreted, before looking at any pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Url,
    /// A flag that takes the following token as its value.
    Flag(Pending),
    /// `-I`/`--head`, which takes no value.
    Head,
    /// Anything else: a value for a pending flag, an unknown flag or noise.
    Other,
}

/// Checked in order, first match wins.
const FLAG_RULES: [(&[&str], Token); 7] = [
    (USER_AGENT_FLAGS, Token::Flag(Pending::UserAgent)),
    (HEADER_FLAGS, Token::Flag(Pending::Header)),
    (DATA_FLAGS, Token::Flag(Pending::Data)),
    (USER_FLAGS, Token::Flag(Pending::User)),
    (HEAD_FLAGS, Token::Head),
    (METHOD_FLAGS, Token::Flag(Pending::Method)),
    (COOKIE_FLAGS, Token::Flag(Pending::Cookie)),
];

pub fn is_url(token: &str) -> bool {
    URL_SCHEMES.iter().any(|&scheme| token.starts_with(scheme))
}

pub fn classify(token: &str) -> Token {
    if is_url(token) {
        return Token::Url;
    }

    FLAG_RULES
        .iter()
        .find(|(aliases, _)| aliases.iter().any(|&alias| alias == token))
        .map_or(Token::Other, |(_, kind)| *kind)
}

fn header_field<'a>(s: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    separated_pair(take_until(0.., ':'), ':', rest.map(str::trim_start)).parse_next(s)
}

/// Split `Name: value` on the first colon.
///
/// The name is kept as written; leading whitespace is stripped from the value.
pub fn parse_header_field(raw: &str) -> Result<(&str, &str)> {
    let mut input = raw;
    header_field
        .parse_next(&mut input)
        .map_err(|_| ParseError::MalformedHeader(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_stage;
    use rstest::*;

    #[rstest]
    #[case("http://api.example.com", Token::Url)]
    #[case("https://api.example.com/x?y=1", Token::Url)]
    #[case("-A", Token::Flag(Pending::UserAgent))]
    #[case("--user-agent", Token::Flag(Pending::UserAgent))]
    #[case("-H", Token::Flag(Pending::Header))]
    #[case("--header", Token::Flag(Pending::Header))]
    #[case("-d", Token::Flag(Pending::Data))]
    #[case("--data", Token::Flag(Pending::Data))]
    #[case("--data-ascii", Token::Flag(Pending::Data))]
    #[case("--data-raw", Token::Flag(Pending::Data))]
    #[case("--data-binary", Token::Flag(Pending::Data))]
    #[case("-u", Token::Flag(Pending::User))]
    #[case("--user", Token::Flag(Pending::User))]
    #[case("-I", Token::Head)]
    #[case("--head", Token::Head)]
    #[case("-X", Token::Flag(Pending::Method))]
    #[case("--request", Token::Flag(Pending::Method))]
    #[case("-b", Token::Flag(Pending::Cookie))]
    #[case("--cookie", Token::Flag(Pending::Cookie))]
    #[case("--compressed", Token::Other)]
    #[case("HTTP://upper.case", Token::Other)]
    #[case("ftp://files.example.com", Token::Other)]
    #[case("", Token::Other)]
    #[case("PUT", Token::Other)]
    fn test_classify(#[case] token: &str, #[case] expected: Token) {
        assert_stage(classify, token, expected);
    }

    #[rstest]
    #[case("Accept: */*", ("Accept", "*/*"))]
    #[case("Accept:text/plain", ("Accept", "text/plain"))]
    #[case("Referer: http://www.example.com/", ("Referer", "http://www.example.com/"))]
    #[case("X-Empty:", ("X-Empty", ""))]
    #[case("X-Spaces:    padded", ("X-Spaces", "padded"))]
    #[case(": no-name", ("", "no-name"))]
    fn test_parse_header_field(#[case] raw: &str, #[case] expected: (&str, &str)) {
        assert_eq!(parse_header_field(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_header_field_without_colon() {
        assert_eq!(
            parse_header_field("NoColonHere"),
            Err(ParseError::MalformedHeader("NoColonHere".to_owned()))
        );
    }
}
