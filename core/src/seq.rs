//! Helpers for building lazy result sequences.
use std::iter;

/// Defers building an iterator until its first element is requested.
pub(crate) fn defer<I, F>(build: F) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    F: FnOnce() -> I,
{
    iter::once_with(build).flatten()
}

/// Yields everything from `first`, then everything from the iterator built by
/// `rest`. `rest` is not called until `first` is exhausted.
pub(crate) fn concat<A, B, F>(first: A, rest: F) -> impl Iterator<Item = A::Item>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
    F: FnOnce() -> B,
{
    first.chain(defer(rest))
}

/// An iterator that keeps `anchor` alive for as long as it is being consumed.
pub(crate) struct Anchored<I, A> {
    inner: I,
    _anchor: A,
}

impl<I, A> Anchored<I, A> {
    pub(crate) fn new(inner: I, anchor: A) -> Self {
        Anchored {
            inner,
            _anchor: anchor,
        }
    }
}

impl<I: Iterator, A> Iterator for Anchored<I, A> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
