//! Property tests for the universal split invariants
//!
//! Bodies and separators are drawn from a deliberately tiny alphabet so that separator hits,
//! runs, and overlapping subsequence occurrences all show up constantly.

use proptest::prelude::*;
use sundr::{concat_eq, Split, SplitBuf};

fn small_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..max_len)
}

// All the checks below hold for every strategy, so each generated (body, sep) pair is run
// through all three.
fn patterns<'b, 'p>(body: &'b [u8], sep: &'p [u8]) -> Vec<Split<'b, 'p, u8, u8>> {
    let mut out = vec![Split::any_of(body, sep), Split::subsequence(body, sep)];
    if let Some(first) = sep.first() {
        out.push(Split::one(body, first));
    } else {
        out.push(Split::whole(body));
    }
    out
}

fn check_invariants(split: Split<u8, u8>) {
    // No token is ever empty, in either direction.
    for tok in split.tokens() {
        assert!(!tok.is_empty(), "empty forward token from {split:?}");
    }
    for tok in split.tokens_rev() {
        assert!(!tok.is_empty(), "empty backward token from {split:?}");
    }

    // Backward traversal is exactly the reverse of forward traversal.
    let forward = split.to_vec();
    let mut backward: Vec<&[u8]> = split.tokens_rev().collect();
    backward.reverse();
    assert_eq!(forward, backward, "asymmetric traversal from {split:?}");

    // Count is the length of the collected traversal.
    assert_eq!(split.count(), forward.len());

    // `only` succeeds exactly when there is one token.
    assert_eq!(split.only().is_some(), forward.len() == 1);

    // An empty body yields zero tokens.
    if split.body().is_empty() {
        assert_eq!(forward.len(), 0);
    }
}

proptest! {
    #[test]
    fn universal_invariants(body in small_bytes(48), sep in small_bytes(4)) {
        for split in patterns(&body, &sep) {
            check_invariants(split);
        }
    }

    #[test]
    fn single_element_split_keeps_everything_else(body in small_bytes(48), sep in 0u8..4) {
        // For single-element separators the concatenated tokens are the body with every
        // separator element deleted; nothing else may be lost or reordered.
        let split = Split::one(body.as_slice(), &sep);
        let flattened = split.join(b"");
        let expected: Vec<u8> = body.iter().copied().filter(|&b| b != sep).collect();
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn candidate_set_split_keeps_everything_else(body in small_bytes(48), set in small_bytes(3)) {
        let split = Split::any_of(body.as_slice(), &set);
        let flattened = split.join(b"");
        let expected: Vec<u8> = body
            .iter()
            .copied()
            .filter(|b| !set.contains(b))
            .collect();
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn split_is_concat_equal_to_its_flattening(body in small_bytes(48), sep in small_bytes(4)) {
        for split in patterns(&body, &sep) {
            let flattened = split.join(b"");
            prop_assert!(
                concat_eq(split, Split::whole(flattened.as_slice())),
                "split not concat-equal to its own flattening: {:?}",
                split,
            );
        }
    }

    #[test]
    fn skipping_reduces_count_exactly(body in small_bytes(48), sep in small_bytes(4), n in 0usize..6) {
        for split in patterns(&body, &sep) {
            let total = split.count();
            prop_assert_eq!(split.skip_tokens(n).count(), total.saturating_sub(n));
            prop_assert_eq!(split.skip_tokens_back(n).count(), total.saturating_sub(n));
        }
    }

    #[test]
    fn owning_form_matches_view_and_reset_is_idempotent(
        body in small_bytes(48),
        sep in small_bytes(4),
    ) {
        let view: Vec<Vec<u8>> = Split::subsequence(body.as_slice(), &sep)
            .tokens()
            .map(|t| t.to_vec())
            .collect();

        let mut buf: SplitBuf<u8, u8> =
            SplitBuf::new(body.clone().into(), sep.clone().into(), sundr::Strategy::Subsequence);
        let first: Vec<Vec<u8>> = std::iter::from_fn(|| buf.next_token().map(|t| t.to_vec())).collect();
        prop_assert_eq!(&first, &view);

        buf.reset();
        let second: Vec<Vec<u8>> = std::iter::from_fn(|| buf.next_token().map(|t| t.to_vec())).collect();
        prop_assert_eq!(&second, &view);

        // Backward drain after another reset.
        buf.reset();
        let mut back: Vec<Vec<u8>> =
            std::iter::from_fn(|| buf.next_token_back().map(|t| t.to_vec())).collect();
        back.reverse();
        prop_assert_eq!(&back, &view);
    }
}
