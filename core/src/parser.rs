use anyhow::anyhow;
use std::fmt;
use std::iter;
use std::rc::Rc;

use crate::{Input, Token};

/// A single successful parse: the produced value and the input left over
/// after it.
pub type Pair<T, O> = (O, Input<T>);

/// Every parse of one parser invocation, produced on demand. An empty
/// sequence means the parser failed.
pub type Parses<T, O> = Box<dyn Iterator<Item = Pair<T, O>>>;

type ParserFn<T, O> = Rc<dyn Fn(Input<T>) -> Parses<T, O>>;

/// A parser consuming tokens of type `T` and producing values of type `O`.
///
/// Parsers are stateless and cheap to clone; a clone shares the underlying
/// function.
pub struct Parser<T, O> {
    run: ParserFn<T, O>,
}

impl<T, O> Clone for Parser<T, O> {
    fn clone(&self) -> Self {
        Parser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T, O> fmt::Debug for Parser<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: Token, O: 'static> Parser<T, O> {
    /// Wrap a function from input to parses.
    ///
    /// The function must only ever return suffixes of the input it was given.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Input<T>) -> Parses<T, O> + 'static,
    {
        Parser { run: Rc::new(f) }
    }

    /// Run the parser.
    ///
    /// ```
    /// use ambiparse_core::{item, Parser};
    ///
    /// let p: Parser<char, char> = item();
    /// let (c, rest) = p.parse("abc").next().unwrap();
    /// assert_eq!(c, 'a');
    /// assert_eq!(rest, "bc");
    /// ```
    pub fn parse<I: Into<Input<T>>>(&self, input: I) -> Parses<T, O> {
        (self.run)(input.into())
    }

    /// Returns the value of the first parse that consumed the entire input.
    pub fn complete<I: Into<Input<T>>>(&self, input: I) -> Result<O, anyhow::Error> {
        let input = input.into();
        let len = input.len();
        self.parse(input)
            .find(|(_, rest)| rest.is_empty())
            .map(|(value, _)| value)
            .ok_or_else(|| anyhow!("parsing failed, no parse consumed all {} tokens", len))
    }

    pub fn bind<U, F>(self, f: F) -> Parser<T, U>
    where
        U: 'static,
        F: Fn(O) -> Parser<T, U> + 'static,
    {
        crate::bind(self, f)
    }

    pub fn map<U, G>(self, g: G) -> Parser<T, U>
    where
        U: 'static,
        G: Fn(O) -> U + 'static,
    {
        crate::map(self, g)
    }

    pub fn filter<P>(self, pred: P) -> Parser<T, O>
    where
        P: Fn(&O) -> bool + 'static,
    {
        crate::filter(self, pred)
    }

    pub fn or(self, other: Parser<T, O>) -> Parser<T, O> {
        crate::or(self, other)
    }

    pub fn many(self) -> Parser<T, Vec<O>>
    where
        O: Clone,
    {
        crate::many(self)
    }
}

/// Always succeeds with `value`, consuming nothing.
pub fn result<T: Token, O: Clone + 'static>(value: O) -> Parser<T, O> {
    Parser::new(move |input| Box::new(iter::once((value.clone(), input))))
}

/// Always fails.
pub fn fail<T: Token, O: 'static>() -> Parser<T, O> {
    Parser::new(|_| Box::new(iter::empty::<Pair<T, O>>()))
}

/// Consumes exactly one token, failing on empty input.
pub fn item<T: Token>() -> Parser<T, T> {
    Parser::new(|input: Input<T>| Box::new(input.split_first().into_iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<O: 'static>(p: &Parser<char, O>, input: &str) -> Vec<(O, String)> {
        p.parse(input)
            .map(|(value, rest)| (value, rest.to_string()))
            .collect()
    }

    #[test]
    fn result_consumes_nothing() {
        for input in &["", "something", "a string"] {
            let got = pairs(&result(123), input);
            assert_eq!(got, vec![(123, input.to_string())], "input: {:?}", input);
        }
    }

    #[test]
    fn fail_never_succeeds() {
        for input in &["", "something else"] {
            assert!(pairs(&fail::<char, u32>(), input).is_empty(), "input: {:?}", input);
        }
    }

    #[test]
    fn item_takes_first_token() {
        assert!(pairs(&item(), "").is_empty());
        assert_eq!(pairs(&item(), "abc"), vec![('a', "bc".to_string())]);
    }

    #[test]
    fn item_over_bytes() {
        let got: Vec<_> = item::<u8>()
            .parse(vec![7u8, 8, 9])
            .map(|(v, rest)| (v, rest.offset()))
            .collect();
        assert_eq!(got, vec![(7u8, 1)]);
    }

    #[test]
    fn parsers_are_reusable() {
        let p = item::<char>();
        assert_eq!(pairs(&p, "xy"), vec![('x', "y".to_string())]);
        assert_eq!(pairs(&p, "yx"), vec![('y', "x".to_string())]);
    }

    #[test]
    fn complete_requires_empty_remainder() {
        let p = item::<char>().or(result('?'));
        assert_eq!(p.complete("a").unwrap(), 'a');
        assert_eq!(p.complete("").unwrap(), '?');
        assert!(p.complete("ab").is_err());
    }
}
