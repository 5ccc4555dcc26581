//! Separator patterns and their matching strategies

use std::slice;

/// How a [`Pattern`]'s separator data is interpreted when looking for a boundary
///
/// The set of strategies is closed: every operation in this crate dispatches on this enum, so
/// adding a variant is a breaking change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The separator is a single element; a boundary is any body element equal to it
    One,
    /// The separator is a set of candidate elements; a boundary is any body element equal to
    /// *some* element of the set
    AnyOf,
    /// The separator is a subsequence; a boundary is an exact contiguous occurrence of the whole
    /// subsequence
    Subsequence,
}

/// A separator specification: the separator elements plus the [`Strategy`] giving them meaning
///
/// A `Pattern` borrows its separator data and is `Copy`; it never owns anything. Patterns are
/// normally built with one of the constructors below and handed to [`Split::new`], though the
/// strategy-specific constructors on `Split` are usually more convenient.
///
/// Degenerate separators are all well-defined rather than errors: an empty subsequence (or empty
/// candidate set) simply never produces a boundary, so the body comes back as a single token.
///
/// [`Split::new`]: crate::Split::new
pub struct Pattern<'p, S> {
    sep: &'p [S],
    strategy: Strategy,
}

impl<'p, S> Pattern<'p, S> {
    /// Match a single separator element
    pub fn one(sep: &'p S) -> Self {
        Pattern { sep: slice::from_ref(sep), strategy: Strategy::One }
    }

    /// Match any one element of the candidate set
    pub fn any_of(set: &'p [S]) -> Self {
        Pattern { sep: set, strategy: Strategy::AnyOf }
    }

    /// Match exact contiguous occurrences of the whole subsequence
    pub fn subsequence(seq: &'p [S]) -> Self {
        Pattern { sep: seq, strategy: Strategy::Subsequence }
    }

    /// A pattern that never matches, making the whole body a single token
    pub fn none() -> Self {
        Pattern { sep: &[], strategy: Strategy::Subsequence }
    }

    /// Reassembles a pattern from a separator slice and a strategy tag
    ///
    /// Used by the owning form, which stores the two halves separately. `One` only ever consults
    /// the first element, so an over-long slice is truncated here rather than misread later.
    pub(crate) fn from_parts(sep: &'p [S], strategy: Strategy) -> Self {
        let sep = match strategy {
            Strategy::One => &sep[..sep.len().min(1)],
            Strategy::AnyOf | Strategy::Subsequence => sep,
        };
        Pattern { sep, strategy }
    }

    /// Returns the separator elements this pattern was built from
    pub fn separator(&self) -> &'p [S] {
        self.sep
    }

    /// Returns the matching strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The number of body elements a boundary consumes
    ///
    /// Only meaningful when a boundary was actually found; an empty subsequence never finds one.
    pub(crate) fn skip_len(&self) -> usize {
        match self.strategy {
            Strategy::One | Strategy::AnyOf => 1,
            Strategy::Subsequence => self.sep.len(),
        }
    }
}

// Manual impls: a `Pattern` is two words regardless of whether `S` itself is `Copy`.
impl<'p, S> Copy for Pattern<'p, S> {}

impl<'p, S> Clone for Pattern<'p, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'p, S: std::fmt::Debug> std::fmt::Debug for Pattern<'p, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("sep", &self.sep)
            .field("strategy", &self.strategy)
            .finish()
    }
}
