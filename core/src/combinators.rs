use std::rc::Rc;

use crate::seq;
use crate::{item, Input, Parser, Token};

/// Runs `parser`, then the parser `f` builds from each value it produces on
/// the input that value left over.
///
/// Every alternative of `parser` is combined with every alternative of its
/// continuation. Parses come out grouped by the outer alternative, in order.
///
/// ```
/// use ambiparse_core::{bind, item, result, Parser};
///
/// let pair: Parser<char, (char, char)> =
///     bind(item(), |a| bind(item(), move |b| result((a, b))));
/// let (value, rest) = pair.parse("xyz").next().unwrap();
/// assert_eq!(value, ('x', 'y'));
/// assert_eq!(rest, "z");
/// ```
pub fn bind<T, A, B, F>(parser: Parser<T, A>, f: F) -> Parser<T, B>
where
    T: Token,
    A: 'static,
    B: 'static,
    F: Fn(A) -> Parser<T, B> + 'static,
{
    let f = Rc::new(f);
    Parser::new(move |input| {
        let f = Rc::clone(&f);
        Box::new(
            parser
                .parse(input)
                .flat_map(move |(value, rest)| f(value).parse(rest)),
        )
    })
}

/// Transforms every value `parser` produces. Equivalent to
/// `bind(parser, |x| result(g(x)))` without requiring `B: Clone`.
pub fn map<T, A, B, G>(parser: Parser<T, A>, g: G) -> Parser<T, B>
where
    T: Token,
    A: 'static,
    B: 'static,
    G: Fn(A) -> B + 'static,
{
    let g = Rc::new(g);
    Parser::new(move |input| {
        let g = Rc::clone(&g);
        Box::new(parser.parse(input).map(move |(value, rest)| (g(value), rest)))
    })
}

/// Drops every parse whose value does not satisfy `pred`.
pub fn filter<T, O, P>(parser: Parser<T, O>, pred: P) -> Parser<T, O>
where
    T: Token,
    O: 'static,
    P: Fn(&O) -> bool + 'static,
{
    let pred = Rc::new(pred);
    Parser::new(move |input| {
        let pred = Rc::clone(&pred);
        Box::new(parser.parse(input).filter(move |(value, _)| pred(value)))
    })
}

/// All parses of `first` followed by all parses of `second`, both run on the
/// same input.
///
/// Both branches are always explored; `second` runs once the consumer has
/// taken everything `first` produced.
pub fn or<T, O>(first: Parser<T, O>, second: Parser<T, O>) -> Parser<T, O>
where
    T: Token,
    O: 'static,
{
    Parser::new(move |input: Input<T>| {
        let second = second.clone();
        let again = input.clone();
        Box::new(seq::concat(first.parse(input), move || second.parse(again)))
    })
}

/// A single token satisfying `pred`.
pub fn sat<T, P>(pred: P) -> Parser<T, T>
where
    T: Token,
    P: Fn(&T) -> bool + 'static,
{
    filter(item(), pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fail, result};

    fn pairs<O: 'static>(p: &Parser<char, O>, input: &str) -> Vec<(O, String)> {
        p.parse(input)
            .map(|(value, rest)| (value, rest.to_string()))
            .collect()
    }

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn bind_sequences() {
        let p = bind(item(), |a: char| {
            bind(item(), move |b: char| result(format!("{}{}", a, b)))
        });
        assert_eq!(pairs(&p, "abc"), vec![(s("ab"), s("c"))]);
        assert!(pairs(&p, "a").is_empty());
    }

    #[test]
    fn bind_keeps_outer_then_inner_order() {
        let choices = or(result(1), result(2));
        let p = bind(choices, |x: i32| or(result(x * 10), result(x * 100)));
        let got: Vec<i32> = pairs(&p, "").into_iter().map(|(v, _)| v).collect();
        assert_eq!(got, vec![10, 100, 20, 200]);
    }

    #[test]
    fn bind_continuation_sees_remainder() {
        let p = bind(item(), |_| item());
        assert_eq!(pairs(&p, "xyz"), vec![('y', s("z"))]);
    }

    #[test]
    fn map_keeps_remainder() {
        let p = map(item(), |c: char| c.to_ascii_uppercase());
        assert_eq!(pairs(&p, "ab"), vec![('A', s("b"))]);
    }

    #[test]
    fn filter_never_true() {
        let p = filter(or(item(), result('z')), |_| false);
        for input in &["", "a", "abc"] {
            assert!(pairs(&p, input).is_empty(), "input: {:?}", input);
        }
    }

    #[test]
    fn filter_drops_branches() {
        let p = filter(or(result(1), or(result(2), result(3))), |v: &i32| v % 2 == 1);
        let got: Vec<i32> = pairs(&p, "").into_iter().map(|(v, _)| v).collect();
        assert_eq!(got, vec![1, 3]);
    }

    #[test]
    fn or_concatenates_in_order() {
        let p = or(result(1), result(2));
        assert_eq!(pairs(&p, "z"), vec![(1, s("z")), (2, s("z"))]);
    }

    #[test]
    fn or_of_failures_fails() {
        let p: Parser<char, char> = or(fail(), fail());
        for input in &["", "x", "xyz"] {
            assert!(pairs(&p, input).is_empty(), "input: {:?}", input);
        }
    }

    #[test]
    fn or_explores_both_branches() {
        let p = or(item(), result('-'));
        assert_eq!(pairs(&p, "a"), vec![('a', s("")), ('-', s("a"))]);
    }

    #[test]
    fn sat_checks_token() {
        let p = sat(|c: &char| *c == 'x');
        assert_eq!(pairs(&p, "x123"), vec![('x', s("123"))]);
        assert!(pairs(&p, "y123").is_empty());
        assert!(pairs(&p, "").is_empty());
    }

    #[test]
    fn remainders_are_suffixes() {
        let p = bind(or(item(), result('-')), |_| or(item(), result('-')));
        let input = Input::from("abc");
        for (_, rest) in p.parse(input.clone()) {
            assert!(input.consumed(&rest).is_ok(), "rest: {:?}", rest);
        }
    }
}
