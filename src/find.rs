//! Boundary search primitives consumed by the cursors
//!
//! Everything here is a pure function of its two slice arguments. This module is also the single
//! substitution point for accelerated searches (e.g. byte-class tables for whitespace sets); the
//! cursors only ever see "offset of a boundary, or `None`".

use crate::pattern::{Pattern, Strategy};

/// Returns the start offset of the first boundary in `hay`, or `None` if there is none
///
/// Degenerate separators (empty subsequence, empty candidate set, subsequence longer than `hay`)
/// report no boundary.
pub(crate) fn first_boundary<T, S>(hay: &[T], pat: &Pattern<'_, S>) -> Option<usize>
where
    T: PartialEq<S>,
{
    match pat.strategy() {
        Strategy::One => {
            let sep = pat.separator().first()?;
            hay.iter().position(|x| x == sep)
        }
        Strategy::AnyOf => {
            let set = pat.separator();
            if set.is_empty() {
                return None;
            }
            hay.iter().position(|x| set.iter().any(|s| x == s))
        }
        Strategy::Subsequence => find_subsequence(hay, pat.separator()),
    }
}

/// Returns the start offset of the last boundary in `hay`, or `None` if there is none
///
/// "Last" means the last boundary the forward scan would consume, so that a backward traversal
/// peels tokens off in exactly the reverse of the forward order. For single-element boundaries
/// that is simply the last matching position. Subsequence occurrences can overlap each other
/// (`"::"` occurs at offsets 1 and 2 of `":::"`), and the forward scan only consumes the ones its
/// left-to-right tiling reaches, so here the tiling is replayed and the last hit kept.
pub(crate) fn last_boundary<T, S>(hay: &[T], pat: &Pattern<'_, S>) -> Option<usize>
where
    T: PartialEq<S>,
{
    match pat.strategy() {
        Strategy::One => {
            let sep = pat.separator().first()?;
            hay.iter().rposition(|x| x == sep)
        }
        Strategy::AnyOf => {
            let set = pat.separator();
            if set.is_empty() {
                return None;
            }
            hay.iter().rposition(|x| set.iter().any(|s| x == s))
        }
        Strategy::Subsequence => {
            let needle = pat.separator();
            let mut last = None;
            let mut from = 0;
            while let Some(i) = find_subsequence(&hay[from..], needle) {
                last = Some(from + i);
                from += i + needle.len();
            }
            last
        }
    }
}

fn find_subsequence<T, S>(hay: &[T], needle: &[S]) -> Option<usize>
where
    T: PartialEq<S>,
{
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }

    hay.windows(needle.len())
        .position(|w| w.iter().zip(needle).all(|(x, s)| x == s))
}
