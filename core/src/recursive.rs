use std::cell::OnceCell;
use std::iter;
use std::rc::{Rc, Weak};

use crate::seq::Anchored;
use crate::{Input, Pair, Parser, Parses, Token};

type Slot<T, O> = OnceCell<Parser<T, O>>;

/// Builds a parser that refers to itself.
///
/// `define` receives a handle standing in for the parser being defined and
/// returns the definition. The handle only holds a weak reference, so the
/// definition is kept alive by the returned parser and by any parses it is
/// still producing. Running the handle inside `define` itself yields nothing.
///
/// ```
/// use ambiparse_core::{recursive, result, sat, Parser};
///
/// // as = 'a' as | ""
/// let a_run = recursive(|a_run: Parser<char, usize>| {
///     sat(|c: &char| *c == 'a')
///         .bind(move |_| a_run.clone().map(|n: usize| n + 1))
///         .or(result(0))
/// });
/// assert_eq!(a_run.complete("aaa").unwrap(), 3);
/// ```
pub fn recursive<T, O, F>(define: F) -> Parser<T, O>
where
    T: Token,
    O: 'static,
    F: FnOnce(Parser<T, O>) -> Parser<T, O>,
{
    let slot: Rc<Slot<T, O>> = Rc::new(OnceCell::new());

    let weak: Weak<Slot<T, O>> = Rc::downgrade(&slot);
    let handle = Parser::new(move |input: Input<T>| match weak.upgrade() {
        Some(slot) => run(&slot, input),
        None => Box::new(iter::empty::<Pair<T, O>>()),
    });

    slot.set(define(handle)).ok();

    Parser::new(move |input: Input<T>| run(&slot, input))
}

fn run<T: Token, O: 'static>(slot: &Rc<Slot<T, O>>, input: Input<T>) -> Parses<T, O> {
    match slot.get() {
        Some(parser) => Box::new(Anchored::new(parser.parse(input), Rc::clone(slot))),
        None => Box::new(iter::empty::<Pair<T, O>>()),
    }
}
