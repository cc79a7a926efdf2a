//! Parsers over `char` tokens.
use ambiparse_core::{fail, many, or, parse, recursive, result, sat, Parser};

/// Exactly the character `c`.
pub fn char(c: char) -> Parser<char, char> {
    sat(move |t: &char| *t == c)
}

/// An ASCII decimal digit.
pub fn digit() -> Parser<char, char> {
    sat(|c: &char| c.is_ascii_digit())
}

pub fn lower() -> Parser<char, char> {
    sat(|c: &char| c.is_lowercase())
}

pub fn upper() -> Parser<char, char> {
    sat(|c: &char| c.is_uppercase())
}

/// A letter of either case. Uppercase is tried first.
pub fn letter() -> Parser<char, char> {
    or(upper(), lower())
}

pub fn alphanumeric() -> Parser<char, char> {
    or(or(upper(), lower()), digit())
}

/// Every prefix of the run of alphanumeric characters at the start of the
/// input, longest first, down to the empty string.
pub fn word() -> Parser<char, String> {
    recursive(|word: Parser<char, String>| {
        let non_empty = parse! {
            first <- alphanumeric();
            rest <- word.clone();
            => format!("{}{}", first, rest)
        };
        or(non_empty, result(String::new()))
    })
}

/// A non-negative decimal integer.
///
/// Like [`many`], this yields one parse per prefix of the digit run, except
/// the empty one. Digit runs that do not fit in an `i64` produce nothing.
pub fn ints() -> Parser<char, i64> {
    many(digit())
        .map(|digits: Vec<char>| digits.into_iter().collect::<String>())
        .filter(|s: &String| !s.is_empty())
        .bind(|s: String| match s.parse::<i64>() {
            Ok(n) => result(n),
            Err(_) => fail(),
        })
}
