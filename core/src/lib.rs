//! List-of-successes parser combinators.
//!
//! A [`Parser`] maps an [`Input`] to a lazy sequence of every way it can
//! parse a prefix of that input. No results means failure; more than one
//! means the grammar is ambiguous at that point.
//!
//! ```
//! use ambiparse_core::{item, many, Parser};
//!
//! let pairs: Parser<u8, Vec<u8>> = many(item());
//! let lengths: Vec<usize> = pairs
//!     .parse(vec![1u8, 2, 3])
//!     .map(|(v, _)| v.len())
//!     .collect();
//! assert_eq!(lengths, vec![3, 2, 1, 0]);
//! ```
use std::fmt::Debug;

mod combinators;
mod input;
mod macros;
mod many;
mod parser;
mod recursive;
mod seq;

pub use combinators::{bind, filter, map, or, sat};
pub use input::Input;
pub use many::many;
pub use parser::{fail, item, result, Pair, Parser, Parses};
pub use recursive::recursive;

/// Anything a parser can consume.
pub trait Token: Clone + Debug + 'static {}

impl<T: Clone + Debug + 'static> Token for T {}
