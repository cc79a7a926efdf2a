use anyhow::anyhow;
use std::fmt;
use std::rc::Rc;

use crate::Token;

/// A position within a shared, immutable buffer of tokens.
///
/// Everything from the position onwards is the remaining input. Cloning or
/// advancing an `Input` never copies the tokens.
pub struct Input<T> {
    tokens: Rc<[T]>,
    idx: usize,
}

impl<T: Token> Input<T> {
    /// Create an input positioned at the start of `tokens`.
    pub fn new<B: Into<Rc<[T]>>>(tokens: B) -> Self {
        Input {
            tokens: tokens.into(),
            idx: 0,
        }
    }

    /// Create an input, ensuring that `start` is within bounds.
    pub fn at<B: Into<Rc<[T]>>>(tokens: B, start: usize) -> Result<Self, anyhow::Error> {
        let tokens = tokens.into();
        if start <= tokens.len() {
            Ok(Input { tokens, idx: start })
        } else {
            Err(anyhow!(
                "start beyond end of input, start: {}, len: {}",
                start,
                tokens.len()
            ))
        }
    }

    /// Offset of this position from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.idx
    }

    /// The remaining tokens.
    pub fn as_slice(&self) -> &[T] {
        &self.tokens[self.idx..]
    }

    pub fn len(&self) -> usize {
        self.tokens.len() - self.idx
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split off the next token, returning it along with the input that
    /// follows it.
    pub fn split_first(&self) -> Option<(T, Input<T>)> {
        self.tokens.get(self.idx).map(|tok| {
            let rest = Input {
                tokens: Rc::clone(&self.tokens),
                idx: self.idx + 1,
            };
            (tok.clone(), rest)
        })
    }

    /// Returns the tokens consumed between this input and `remainder`.
    ///
    /// Both inputs must reference the same buffer, and `remainder` must not
    /// start before this input.
    pub fn consumed(&self, remainder: &Input<T>) -> Result<&[T], anyhow::Error> {
        if !Rc::ptr_eq(&self.tokens, &remainder.tokens) {
            Err(anyhow!(
                "inputs reference different buffers, input: {:?}, remainder: {:?}",
                self,
                remainder
            ))
        } else if remainder.idx < self.idx {
            Err(anyhow!(
                "remainder starts before input, input idx: {}, remainder idx: {}",
                self.idx,
                remainder.idx
            ))
        } else {
            Ok(&self.tokens[self.idx..remainder.idx])
        }
    }
}

impl<T> Clone for Input<T> {
    fn clone(&self) -> Self {
        Input {
            tokens: Rc::clone(&self.tokens),
            idx: self.idx,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Input")
            .field("idx", &self.idx)
            .field("rest", &&self.tokens[self.idx..])
            .finish()
    }
}

impl fmt::Display for Input<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_slice().iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Inputs are equal when their remaining tokens are, regardless of what has
/// been consumed.
impl<T: PartialEq> PartialEq for Input<T> {
    fn eq(&self, other: &Input<T>) -> bool {
        self.tokens[self.idx..] == other.tokens[other.idx..]
    }
}

impl<'a> PartialEq<&'a str> for Input<char> {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_slice().iter().copied().eq(other.chars())
    }
}

impl<T: Token> From<Vec<T>> for Input<T> {
    fn from(tokens: Vec<T>) -> Self {
        Input::new(tokens)
    }
}

impl<'a, T: Token> From<&'a [T]> for Input<T> {
    fn from(tokens: &'a [T]) -> Self {
        Input::new(tokens)
    }
}

impl<'a> From<&'a str> for Input<char> {
    fn from(s: &'a str) -> Self {
        Input::new(s.chars().collect::<Rc<[char]>>())
    }
}

impl From<String> for Input<char> {
    fn from(s: String) -> Self {
        Input::from(s.as_str())
    }
}
