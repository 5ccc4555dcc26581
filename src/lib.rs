//! # `sundr` ("sunder") — splitting sequences asunder, without allocating
//!
//! `sundr` is a low-level sequence-splitting library. Given a contiguous read-only body `&[T]`
//! and a separator, it lazily produces the non-empty sub-slices ("tokens") left after removing
//! separator occurrences. Tokens are always views into the original body; the engine never
//! copies elements and never allocates while stepping.
//!
//! The headline behaviors:
//!
//! * Three separator strategies: a single element ([`Split::one`]), any element of a candidate
//!   set ([`Split::any_of`]), or an exact contiguous subsequence ([`Split::subsequence`]).
//! * No empty tokens, ever. Leading, trailing, and adjacent separator occurrences collapse, in
//!   the manner of whitespace splitting. This is *not* CSV-style splitting that preserves empty
//!   fields.
//! * Forward and backward traversal that agree: draining [`tokens_rev`] yields exactly the
//!   tokens of [`tokens`] in reverse, for every body, separator, and strategy.
//! * Allocation-free cross-view equality ([`concat_eq`]): decide whether two splits, possibly
//!   over different separators and strategies, concatenate to the same element sequence.
//! * An owning form ([`SplitBuf`]) for split state that must be stored, returned, or consumed
//!   incrementally after the borrowing frame is gone.
//!
//! Current:
//!
//! * [x] The three strategies over any `T: PartialEq<S>`
//! * [x] Forward/backward iteration, indexed access from either end, skip-from-either-end
//! * [x] Cross-view concatenation equality, with or without a custom elementwise comparer
//! * [x] Owning splits over any `AsRef<[T]>` handle (defaulting to `Arc<[T]>`)
//!
//! Planned:
//!
//! * [ ] Accelerated byte searches (memchr-style single/set lookup) behind the same `find`
//!     seam, once they can be substituted without touching the public surface
//! * [ ] `no_std` support (nothing here needs the OS; only `Arc` defaults and `Vec` conversions
//!     touch `alloc`)
//!
//! ## A quick tour
//!
//! ```
//! use sundr::Split;
//!
//! let split = Split::any_of(b"a b\tc".as_slice(), b" \t");
//! let tokens: Vec<&[u8]> = split.tokens().collect();
//! assert_eq!(tokens, [b"a", b"b", b"c"]);
//!
//! // Runs of separators collapse; no token is ever empty.
//! let split = Split::one(b",a,,,b,".as_slice(), &b',');
//! assert_eq!(split.count(), 2);
//! assert_eq!(split.last(), Some(b"b".as_slice()));
//! ```
//!
//! [`tokens`]: Split::tokens
//! [`tokens_rev`]: Split::tokens_rev

mod buf;
mod cursor;
mod eq;
mod error;
mod find;
mod pattern;

pub use buf::SplitBuf;
pub use eq::{concat_eq, concat_eq_by};
pub use error::TokenIndexError;
pub use pattern::{Pattern, Strategy};

use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

/// A lazy, non-owning split of a body slice over a separator [`Pattern`]
///
/// A `Split` is just the pair of a body slice and a pattern; it is immutable, `Copy`, and owns
/// nothing. All traversal state lives in the iterators ([`tokens`], [`tokens_rev`]) or in the
/// eager accessors built on them. Tokens borrow from the body, so they outlive the `Split`
/// itself but not the body's storage.
///
/// For split state that must outlive the borrowing frame, convert to the owning form with
/// [`to_buf`], or build a [`SplitBuf`] directly.
///
/// [`tokens`]: Self::tokens
/// [`tokens_rev`]: Self::tokens_rev
/// [`to_buf`]: Self::to_buf
pub struct Split<'b, 'p, T, S> {
    body: &'b [T],
    pattern: Pattern<'p, S>,
}

impl<'b, 'p, T, S> Split<'b, 'p, T, S> {
    /// Constructs a split of `body` over an explicit [`Pattern`]
    pub fn new(body: &'b [T], pattern: Pattern<'p, S>) -> Self {
        Split { body, pattern }
    }

    /// Splits on a single separator element
    pub fn one(body: &'b [T], sep: &'p S) -> Self {
        Split::new(body, Pattern::one(sep))
    }

    /// Splits on any element of the candidate set
    ///
    /// An empty set never matches, so a non-empty body comes back as one token.
    pub fn any_of(body: &'b [T], set: &'p [S]) -> Self {
        Split::new(body, Pattern::any_of(set))
    }

    /// Splits on exact contiguous occurrences of the whole subsequence
    ///
    /// Only whole occurrences count: splitting `"a::b:::c"` on `"::"` yields `"a"`, `"b"`,
    /// `":c"`, with the leftover `':'` staying attached to the final token.
    pub fn subsequence(body: &'b [T], sep: &'p [S]) -> Self {
        Split::new(body, Pattern::subsequence(sep))
    }

    /// Returns the body this split was constructed over
    pub fn body(&self) -> &'b [T] {
        self.body
    }

    /// Returns the separator pattern
    pub fn pattern(&self) -> Pattern<'p, S> {
        self.pattern
    }
}

impl<'b, T> Split<'b, 'static, T, T> {
    /// A split that does not split: the whole (non-empty) body is the single token
    ///
    /// This is the degenerate empty-separator case, useful mostly as one side of a
    /// [`concat_eq`] comparison.
    pub fn whole(body: &'b [T]) -> Self {
        Split::new(body, Pattern::none())
    }
}

impl<'b, 'p, T: PartialEq<S>, S> Split<'b, 'p, T, S> {
    /// Returns the forward token iterator
    pub fn tokens(&self) -> Tokens<'b, 'p, T, S> {
        Tokens { remaining: self.body, pattern: self.pattern }
    }

    /// Returns the backward token iterator
    ///
    /// Draining it yields exactly the tokens of [`tokens`](Self::tokens) in reverse order. The
    /// two iterators are deliberately separate types rather than one `DoubleEndedIterator`:
    /// consuming a shared remainder from both ends at once is not well-defined for subsequence
    /// separators whose occurrences can overlap.
    pub fn tokens_rev(&self) -> TokensRev<'b, 'p, T, S> {
        TokensRev { remaining: self.body, pattern: self.pattern }
    }

    /// Returns the first token, if any
    pub fn first(&self) -> Option<&'b [T]> {
        self.tokens().next()
    }

    /// Returns the last token, if any
    pub fn last(&self) -> Option<&'b [T]> {
        self.tokens_rev().next()
    }

    /// Returns the token only if it is the *only* token
    pub fn only(&self) -> Option<&'b [T]> {
        let mut tokens = self.tokens();
        let first = tokens.next()?;
        match tokens.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Returns the `n`th token from the front, or `None` if there are `n` or fewer tokens
    pub fn get(&self, n: usize) -> Option<&'b [T]> {
        self.tokens().nth(n)
    }

    /// Returns the `n`th token from the back, or `None` if there are `n` or fewer tokens
    pub fn get_back(&self, n: usize) -> Option<&'b [T]> {
        self.tokens_rev().nth(n)
    }

    /// Returns the `n`th token from the front, or a [`TokenIndexError`] reporting the actual
    /// token count
    ///
    /// The counterpart of [`get`](Self::get) for callers treating an out-of-range index as an
    /// invalid argument rather than an expected outcome. The error path re-traverses the split
    /// to report the count.
    pub fn token(&self, n: usize) -> Result<&'b [T], TokenIndexError> {
        self.get(n)
            .ok_or_else(|| TokenIndexError { index: n, count: self.count() })
    }

    /// Returns the `n`th token from the back, or a [`TokenIndexError`]
    pub fn token_back(&self, n: usize) -> Result<&'b [T], TokenIndexError> {
        self.get_back(n)
            .ok_or_else(|| TokenIndexError { index: n, count: self.count() })
    }

    /// Counts the tokens; a full forward traversal
    pub fn count(&self) -> usize {
        self.tokens().count()
    }

    /// Collects the tokens into an owned array of views
    pub fn to_vec(&self) -> Vec<&'b [T]> {
        self.tokens().collect()
    }

    /// Concatenates the tokens into an owned buffer, inserting `divider` between adjacent tokens
    ///
    /// With an empty divider this is the flattened token content, the sequence that
    /// [`concat_eq`] compares without building.
    pub fn join(&self, divider: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        for (i, tok) in self.tokens().enumerate() {
            if i > 0 {
                out.extend_from_slice(divider);
            }
            out.extend_from_slice(tok);
        }
        out
    }

    /// Eagerly advances past the first `n` tokens, returning the split of what remains
    ///
    /// Skipping more tokens than exist returns an empty split.
    pub fn skip_tokens(&self, n: usize) -> Self {
        let mut tokens = self.tokens();
        for _ in 0..n {
            if tokens.next().is_none() {
                break;
            }
        }
        Split::new(tokens.remaining, self.pattern)
    }

    /// Eagerly drops the last `n` tokens, returning the split of what remains
    pub fn skip_tokens_back(&self, n: usize) -> Self {
        let mut tokens = self.tokens_rev();
        for _ in 0..n {
            if tokens.next().is_none() {
                break;
            }
        }
        Split::new(tokens.remaining, self.pattern)
    }

    /// Copies the body and separator into shared buffers, producing the owning form
    ///
    /// This is the one place the crate copies element data; every operation on the result is
    /// allocation-free again.
    pub fn to_buf(&self) -> SplitBuf<T, S>
    where
        T: Clone,
        S: Clone,
    {
        SplitBuf::new(
            self.body.to_vec().into(),
            self.pattern.separator().to_vec().into(),
            self.pattern.strategy(),
        )
    }
}

impl<'b, 'p, T, S> Copy for Split<'b, 'p, T, S> {}

impl<'b, 'p, T, S> Clone for Split<'b, 'p, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'b, 'p, T: Debug, S: Debug> Debug for Split<'b, 'p, T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Split")
            .field("body", &self.body)
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl<'b, 'p, T: PartialEq<S>, S> IntoIterator for Split<'b, 'p, T, S> {
    type Item = &'b [T];
    type IntoIter = Tokens<'b, 'p, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

impl<'s, 'b, 'p, T: PartialEq<S>, S> IntoIterator for &'s Split<'b, 'p, T, S> {
    type Item = &'b [T];
    type IntoIter = Tokens<'b, 'p, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// The forward token iterator of a [`Split`]
///
/// Created by [`Split::tokens`]. Holds only the remaining unconsumed sub-slice of the body,
/// which shrinks monotonically toward empty.
pub struct Tokens<'b, 'p, T, S> {
    remaining: &'b [T],
    pattern: Pattern<'p, S>,
}

impl<'b, 'p, T, S> Tokens<'b, 'p, T, S> {
    /// Returns the unconsumed remainder of the body
    pub fn remainder(&self) -> &'b [T] {
        self.remaining
    }
}

impl<'b, 'p, T: PartialEq<S>, S> Iterator for Tokens<'b, 'p, T, S> {
    type Item = &'b [T];

    fn next(&mut self) -> Option<&'b [T]> {
        let (tok, rest) = cursor::next_token(self.remaining, &self.pattern)?;
        let token = &self.remaining[tok];
        self.remaining = &self.remaining[rest];
        Some(token)
    }
}

impl<'b, 'p, T: PartialEq<S>, S> FusedIterator for Tokens<'b, 'p, T, S> {}

impl<'b, 'p, T, S> Clone for Tokens<'b, 'p, T, S> {
    fn clone(&self) -> Self {
        Tokens { remaining: self.remaining, pattern: self.pattern }
    }
}

impl<'b, 'p, T: Debug, S: Debug> Debug for Tokens<'b, 'p, T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("remaining", &self.remaining)
            .field("pattern", &self.pattern)
            .finish()
    }
}

/// The backward token iterator of a [`Split`]
///
/// Created by [`Split::tokens_rev`]; consumes the body from the tail. A full traversal yields
/// exactly the forward tokens in reverse order.
pub struct TokensRev<'b, 'p, T, S> {
    remaining: &'b [T],
    pattern: Pattern<'p, S>,
}

impl<'b, 'p, T, S> TokensRev<'b, 'p, T, S> {
    /// Returns the unconsumed remainder of the body
    pub fn remainder(&self) -> &'b [T] {
        self.remaining
    }
}

impl<'b, 'p, T: PartialEq<S>, S> Iterator for TokensRev<'b, 'p, T, S> {
    type Item = &'b [T];

    fn next(&mut self) -> Option<&'b [T]> {
        let (tok, rest) = cursor::next_token_back(self.remaining, &self.pattern)?;
        let token = &self.remaining[tok];
        self.remaining = &self.remaining[rest];
        Some(token)
    }
}

impl<'b, 'p, T: PartialEq<S>, S> FusedIterator for TokensRev<'b, 'p, T, S> {}

impl<'b, 'p, T, S> Clone for TokensRev<'b, 'p, T, S> {
    fn clone(&self) -> Self {
        TokensRev { remaining: self.remaining, pattern: self.pattern }
    }
}

impl<'b, 'p, T: Debug, S: Debug> Debug for TokensRev<'b, 'p, T, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TokensRev")
            .field("remaining", &self.remaining)
            .field("pattern", &self.pattern)
            .finish()
    }
}
