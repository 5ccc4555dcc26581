//! The forward and backward stepping state machines
//!
//! Both functions operate on the current remaining sub-slice of the body and hand back a pair of
//! ranges *into that slice*: the token to yield and the remaining slice afterwards. Working in
//! ranges (rather than returning sub-slices directly) lets the borrowed iterators in `lib.rs` and
//! the owning form in `buf.rs` share a single stepping core; the owning form rebases the ranges
//! onto its stored body.
//!
//! The defining invariant lives here: a yielded token is never empty. A separator occurrence at
//! the head of the remaining slice is skipped and the search retried within the same step, which
//! is what collapses runs of adjacent separators and leading/trailing separators into nothing.

use crate::find;
use crate::pattern::Pattern;
use std::ops::Range;

/// Computes the next token scanning from the front
///
/// Returns `(token, rest)` as ranges into `hay`, or `None` once `hay` holds no further token
/// (empty, or nothing but separator occurrences). Terminates because every retry strictly shrinks
/// the unsearched region.
pub(crate) fn next_token<T, S>(hay: &[T], pat: &Pattern<'_, S>) -> Option<(Range<usize>, Range<usize>)>
where
    T: PartialEq<S>,
{
    let skip = pat.skip_len();
    let mut start = 0;

    loop {
        let rest = &hay[start..];
        if rest.is_empty() {
            // Nothing left, or only separators were left. The `find` primitives treat an empty
            // separator as "no boundary", so the unsplit whole-body case never reaches here.
            return None;
        }

        match find::first_boundary(rest, pat) {
            // No boundary ahead: everything left is the final token.
            None => return Some((start..hay.len(), hay.len()..hay.len())),
            // Boundary at the head: an empty token would result, so skip the occurrence and
            // retry within this same step.
            Some(0) => start += skip,
            Some(i) => {
                let tok_end = start + i;
                return Some((start..tok_end, tok_end + skip..hay.len()));
            }
        }
    }
}

/// Computes the next token scanning from the tail; the mirror of [`next_token`]
///
/// Draining a body through this function yields exactly the tokens of [`next_token`] in reverse
/// order, for every strategy. That holds because [`find::last_boundary`] reports the last
/// boundary the *forward* scan would consume, and truncating the body just before that boundary
/// leaves the forward tokenization of everything earlier untouched.
pub(crate) fn next_token_back<T, S>(
    hay: &[T],
    pat: &Pattern<'_, S>,
) -> Option<(Range<usize>, Range<usize>)>
where
    T: PartialEq<S>,
{
    let skip = pat.skip_len();
    let mut end = hay.len();

    loop {
        let rest = &hay[..end];
        if rest.is_empty() {
            return None;
        }

        match find::last_boundary(rest, pat) {
            None => return Some((0..end, 0..0)),
            // The boundary butts up against the tail: trailing separator, nothing after it.
            // Drop it and retry within this same step.
            Some(i) if i + skip == end => end = i,
            Some(i) => return Some((i + skip..end, 0..i)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Runs the forward stepper to exhaustion, checking that the ranges tile correctly.
    fn drain_fwd<'h, T: PartialEq<S>, S>(hay: &'h [T], pat: &Pattern<'_, S>) -> Vec<&'h [T]> {
        let mut out = Vec::new();
        let mut remaining = hay;
        while let Some((tok, rest)) = next_token(remaining, pat) {
            assert!(tok.start < tok.end, "empty token range {tok:?}");
            out.push(&remaining[tok]);
            remaining = &remaining[rest];
        }
        out
    }

    fn drain_back<'h, T: PartialEq<S>, S>(hay: &'h [T], pat: &Pattern<'_, S>) -> Vec<&'h [T]> {
        let mut out = Vec::new();
        let mut remaining = hay;
        while let Some((tok, rest)) = next_token_back(remaining, pat) {
            assert!(tok.start < tok.end, "empty token range {tok:?}");
            out.push(&remaining[tok]);
            remaining = &remaining[rest];
        }
        out
    }

    #[test]
    fn forward_basic() {
        let pat = Pattern::one(&b',');
        assert_eq!(drain_fwd(b"a,b,c", &pat), [b"a", b"b", b"c"]);
        assert_eq!(drain_fwd(b"ab,cd", &pat), [b"ab", b"cd"]);
    }

    #[test]
    fn forward_collapses_runs_and_edges() {
        let pat = Pattern::one(&b',');
        assert_eq!(drain_fwd(b"a,,,b", &pat), [b"a", b"b"]);
        assert_eq!(drain_fwd(b",a,", &pat), [b"a"]);
        assert_eq!(drain_fwd(b",,,", &pat), Vec::<&[u8]>::new());
    }

    #[test]
    fn forward_trailing_subsequence() {
        let pat = Pattern::subsequence(b"::");
        assert_eq!(drain_fwd(b"a::", &pat), [b"a"]);
        assert_eq!(drain_fwd(b"::a", &pat), [b"a"]);
        assert_eq!(drain_fwd(b"::::", &pat), Vec::<&[u8]>::new());
    }

    #[test]
    fn unfindable_separator_yields_whole_body() {
        assert_eq!(drain_fwd(b"abc", &Pattern::one(&b'z')), [b"abc"]);
        assert_eq!(drain_fwd::<u8, u8>(b"abc", &Pattern::none()), [b"abc"]);
        assert_eq!(drain_fwd(b"ab", &Pattern::subsequence(b"abc")), [b"ab"]);
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert_eq!(drain_fwd(b"", &Pattern::one(&b',')), Vec::<&[u8]>::new());
        assert_eq!(drain_back(b"", &Pattern::one(&b',')), Vec::<&[u8]>::new());
    }

    #[test]
    fn backward_is_reverse_of_forward() {
        let cases: &[(&[u8], Pattern<u8>)] = &[
            (b"a,b,c", Pattern::one(&b',')),
            (b",a,,b,", Pattern::one(&b',')),
            (b"a b\tc", Pattern::any_of(b" \t")),
            (b"a::b:::c", Pattern::subsequence(b"::")),
            (b"a:::c", Pattern::subsequence(b"::")),
            (b"::::", Pattern::subsequence(b"::")),
            (b"abc", Pattern::none()),
        ];

        for &(hay, pat) in cases {
            let fwd = drain_fwd(hay, &pat);
            let mut back = drain_back(hay, &pat);
            back.reverse();
            assert_eq!(fwd, back, "asymmetric traversal for body {hay:?}");
        }
    }

    #[test]
    fn backward_overlapping_subsequence() {
        // The lone leftover ':' stays attached to the token after it, same as the forward scan.
        let pat = Pattern::subsequence(b"::");
        let expected: Vec<&[u8]> = vec![b":c", b"b", b"a"];
        assert_eq!(drain_back(b"a::b:::c", &pat), expected);
    }
}
