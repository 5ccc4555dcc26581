//! The owning form of a split
//!
//! A [`Split`](crate::Split) borrows its body, which makes it free to copy but impossible to
//! store past the frame the body lives in. `SplitBuf` holds the body and separator through
//! independently-lived handles instead (`Arc<[T]>` by default, but any `AsRef<[T]>` works), so a
//! partially- or fully-consumed split can be returned from a function, kept in a field, or
//! picked up again later.
//!
//! Stepping delegates to the same cursor core the borrowed iterators use: each step projects the
//! remaining range down to a sub-slice, runs the cursor on it, and rebases the returned ranges
//! onto the stored body. Because the tokens borrow from `self`, `SplitBuf` cannot be a plain
//! `Iterator`; it exposes lending [`next_token`]/[`next_token_back`] methods instead, plus a
//! [`reset`] back to the full body.
//!
//! [`next_token`]: SplitBuf::next_token
//! [`next_token_back`]: SplitBuf::next_token_back
//! [`reset`]: SplitBuf::reset

use crate::pattern::{Pattern, Strategy};
use crate::{cursor, Split, TokenIndexError};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Range;
use std::sync::Arc;

/// An owning split: body and separator held through independently-lived handles
///
/// By default both handles are reference-counted slices, making `SplitBuf` cheap to clone and
/// safe to hand across threads. Any `AsRef<[T]>`/`AsRef<[S]>` pair can be substituted, e.g.
/// `Vec<T>` for sole ownership or `Rc<[T]>` for single-threaded sharing.
///
/// Unlike the borrowed [`Split`], a `SplitBuf` carries its cursor state (the remaining
/// unconsumed range) inline, shrinking as tokens are taken from either end and restored by
/// [`reset`](Self::reset).
pub struct SplitBuf<T, S, B = Arc<[T]>, P = Arc<[S]>> {
    body: B,
    separator: P,
    strategy: Strategy,
    remaining: Range<usize>,
    _elem: PhantomData<fn() -> (T, S)>,
}

impl<T, S, B: AsRef<[T]>, P: AsRef<[S]>> SplitBuf<T, S, B, P> {
    /// Constructs an owning split from its three parts, positioned at the full body
    pub fn new(body: B, separator: P, strategy: Strategy) -> Self {
        let len = body.as_ref().len();
        SplitBuf {
            body,
            separator,
            strategy,
            remaining: 0..len,
            _elem: PhantomData,
        }
    }

    /// Splits on the single separator element held by `separator`
    ///
    /// Only the first element of the handle is ever consulted.
    pub fn one(body: B, separator: P) -> Self {
        SplitBuf::new(body, separator, Strategy::One)
    }

    /// Splits on any element of the candidate set held by `separator`
    pub fn any_of(body: B, separator: P) -> Self {
        SplitBuf::new(body, separator, Strategy::AnyOf)
    }

    /// Splits on exact contiguous occurrences of the subsequence held by `separator`
    pub fn subsequence(body: B, separator: P) -> Self {
        SplitBuf::new(body, separator, Strategy::Subsequence)
    }

    /// Returns the full body slice, independent of cursor position
    pub fn body(&self) -> &[T] {
        self.body.as_ref()
    }

    /// Returns the unconsumed remainder of the body
    pub fn remaining(&self) -> &[T] {
        &self.body.as_ref()[self.remaining.clone()]
    }

    /// Returns the separator strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Moves the cursor back to the start of the full body
    pub fn reset(&mut self) {
        self.remaining = 0..self.body.as_ref().len();
    }

    /// Gives back the body and separator handles, discarding cursor state
    pub fn into_parts(self) -> (B, P) {
        (self.body, self.separator)
    }

    /// Projects the *remaining* body as a borrowed [`Split`]
    ///
    /// All the borrowed surface (iteration, indexed access, [`concat_eq`], joining) is available
    /// through the projection; the delegating accessors below cover the common cases.
    ///
    /// [`concat_eq`]: crate::concat_eq
    pub fn as_split(&self) -> Split<'_, '_, T, S> {
        Split::new(self.remaining(), self.pattern())
    }

    fn pattern(&self) -> Pattern<'_, S> {
        Pattern::from_parts(self.separator.as_ref(), self.strategy)
    }
}

impl<T, S, B, P> SplitBuf<T, S, B, P>
where
    T: PartialEq<S>,
    B: AsRef<[T]>,
    P: AsRef<[S]>,
{
    /// Takes the next token off the front of the remainder
    ///
    /// Returns `None` once the remainder is exhausted (empty, or nothing but separators); the
    /// cursor does not move past that point until [`reset`](Self::reset).
    pub fn next_token(&mut self) -> Option<&[T]> {
        let pat = Pattern::from_parts(self.separator.as_ref(), self.strategy);
        let body = self.body.as_ref();
        let hay = &body[self.remaining.clone()];

        let (tok, rest) = cursor::next_token(hay, &pat)?;
        let base = self.remaining.start;
        self.remaining = (base + rest.start)..(base + rest.end);
        Some(&body[(base + tok.start)..(base + tok.end)])
    }

    /// Takes the next token off the back of the remainder; the mirror of [`next_token`]
    ///
    /// Draining a freshly-constructed `SplitBuf` through this method yields exactly the
    /// [`next_token`] sequence in reverse.
    ///
    /// [`next_token`]: Self::next_token
    pub fn next_token_back(&mut self) -> Option<&[T]> {
        let pat = Pattern::from_parts(self.separator.as_ref(), self.strategy);
        let body = self.body.as_ref();
        let hay = &body[self.remaining.clone()];

        let (tok, rest) = cursor::next_token_back(hay, &pat)?;
        let base = self.remaining.start;
        self.remaining = (base + rest.start)..(base + rest.end);
        Some(&body[(base + tok.start)..(base + tok.end)])
    }

    /// Returns the first token of the remainder without consuming it
    pub fn first(&self) -> Option<&[T]> {
        self.as_split().first()
    }

    /// Returns the last token of the remainder without consuming it
    pub fn last(&self) -> Option<&[T]> {
        self.as_split().last()
    }

    /// Returns the token only if the remainder holds exactly one
    pub fn only(&self) -> Option<&[T]> {
        self.as_split().only()
    }

    /// Returns the `n`th remaining token from the front, without consuming anything
    pub fn get(&self, n: usize) -> Option<&[T]> {
        self.as_split().get(n)
    }

    /// Returns the `n`th remaining token from the front, or a [`TokenIndexError`]
    pub fn token(&self, n: usize) -> Result<&[T], TokenIndexError> {
        self.as_split().token(n)
    }

    /// Counts the remaining tokens; a full traversal of the remainder
    pub fn count(&self) -> usize {
        self.as_split().count()
    }

    /// Collects the remaining tokens into an owned array of views
    pub fn to_vec(&self) -> Vec<&[T]> {
        self.as_split().to_vec()
    }

    /// Concatenates the remaining tokens, inserting `divider` between adjacent tokens
    pub fn join(&self, divider: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.as_split().join(divider)
    }
}

impl<T, S, B: Clone, P: Clone> Clone for SplitBuf<T, S, B, P> {
    fn clone(&self) -> Self {
        SplitBuf {
            body: self.body.clone(),
            separator: self.separator.clone(),
            strategy: self.strategy,
            remaining: self.remaining.clone(),
            _elem: PhantomData,
        }
    }
}

impl<T, S, B, P> Debug for SplitBuf<T, S, B, P>
where
    T: Debug,
    S: Debug,
    B: AsRef<[T]>,
    P: AsRef<[S]>,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SplitBuf")
            .field("body", &self.body.as_ref())
            .field("separator", &self.separator.as_ref())
            .field("strategy", &self.strategy)
            .field("remaining", &self.remaining)
            .finish()
    }
}
