use crate::{bind, map, or, result, Parser, Token};

/// Zero or more repetitions of `parser`.
///
/// Produces every decomposition of the input into consecutive matches, from
/// the longest run down to the empty one. The nested repetition is only built
/// once `parser` has actually matched, so constructing `many` is cheap and
/// never recurses.
///
/// `parser` must consume at least one token whenever it succeeds, otherwise
/// the parses never end.
///
/// Producing a parse nests one level of iterators per repetition, so the
/// stack bounds the length of a run: a few thousand repetitions fit on a
/// default thread stack, tens of thousands do not.
pub fn many<T, O>(parser: Parser<T, O>) -> Parser<T, Vec<O>>
where
    T: Token,
    O: Clone + 'static,
{
    map(many_reversed(parser), |mut values: Vec<O>| {
        values.reverse();
        values
    })
}

/// `many` with each run collected last match first, so every repetition
/// appends instead of shifting the whole vector.
fn many_reversed<T, O>(parser: Parser<T, O>) -> Parser<T, Vec<O>>
where
    T: Token,
    O: Clone + 'static,
{
    let repeat = parser.clone();
    let non_empty = bind(parser, move |first: O| {
        map(many_reversed(repeat.clone()), move |mut rest: Vec<O>| {
            rest.push(first.clone());
            rest
        })
    });
    or(non_empty, result(Vec::new()))
}
