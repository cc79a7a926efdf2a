//! Ambiguity-preserving parser combinators.
//!
//! Re-exports the generic combinators from `ambiparse_core` and adds parsers
//! over characters in [`chars`].
//!
//! ```
//! use ambiparse::chars::{digit, lower, upper};
//! use ambiparse::{parse, Parser};
//!
//! let code: Parser<char, String> = parse! {
//!     l <- lower();
//!     u <- upper();
//!     d <- digit();
//!     => format!("{}{}{}", l, u, d)
//! };
//! let (value, rest) = code.parse("xC6 bau").next().unwrap();
//! assert_eq!(value, "xC6");
//! assert_eq!(rest, " bau");
//! ```
pub use ambiparse_core::*;

pub mod chars;
