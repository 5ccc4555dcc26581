#![no_main]
use libfuzzer_sys::fuzz_target;
use sundr::{Split, Strategy};

// Layout of the input: [strategy tag] [separator length] [separator...] [body...]
fuzz_target!(|data: &[u8]| {
    let [tag, sep_len, rest @ ..] = data else { return };

    let strategy = match tag % 3 {
        0 => Strategy::One,
        1 => Strategy::AnyOf,
        _ => Strategy::Subsequence,
    };
    let sep_len = (*sep_len as usize % 5).min(rest.len());
    let (sep, body) = rest.split_at(sep_len);

    let split = match strategy {
        Strategy::One => match sep.first() {
            Some(first) => Split::one(body, first),
            None => Split::whole(body),
        },
        Strategy::AnyOf => Split::any_of(body, sep),
        Strategy::Subsequence => Split::subsequence(body, sep),
    };

    let forward: Vec<&[u8]> = split.tokens().collect();
    let mut backward: Vec<&[u8]> = split.tokens_rev().collect();
    backward.reverse();

    assert_eq!(forward, backward);
    assert!(forward.iter().all(|tok| !tok.is_empty()));
    assert_eq!(split.count(), forward.len());
    if body.is_empty() {
        assert!(forward.is_empty());
    }
});
