/// Sequences parsers, binding each value to a name for the steps after it.
///
/// `name <- parser;` runs `parser` and binds its value, a bare `parser;` runs
/// it and discards the value, and the final `=> expr` is the result. Each step
/// expands to a [`bind`](crate::bind), so every combination of alternatives is
/// kept.
///
/// Parser expressions and the final expression are evaluated once per parse,
/// inside closures that may run many times: clone captured parsers, and clone
/// bound values that the result expression needs by value.
///
/// ```
/// use ambiparse_core::{item, parse, Parser};
///
/// let swapped: Parser<char, String> = parse! {
///     a <- item();
///     item();
///     b <- item();
///     => format!("{}{}", b, a)
/// };
/// assert_eq!(swapped.complete("xyz").unwrap(), "zx");
/// ```
#[macro_export]
macro_rules! parse {
    (=> $value:expr) => {
        $crate::result($value)
    };
    (=> $value:expr ;) => {
        $crate::result($value)
    };
    ($name:ident <- $parser:expr ; $($rest:tt)+) => {
        $crate::bind($parser, move |$name| $crate::parse!($($rest)+))
    };
    ($parser:expr ; $($rest:tt)+) => {
        $crate::bind($parser, move |_| $crate::parse!($($rest)+))
    };
}
