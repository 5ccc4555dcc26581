//! Cross-view concatenation equality
//!
//! Two splits are "concat-equal" when gluing all of one's tokens together produces the same
//! element sequence as gluing all of the other's, with no separators reinserted. The comparison
//! never materializes either concatenation: it walks the two token streams in lockstep, and when
//! one side's current token runs out mid-way, the unconsumed tail of the longer token is carried
//! into the next round.
//!
//! The inputs are plain token streams (`IntoIterator` over sub-slices), so the two sides may use
//! different separator element types, different strategies, or come from different surfaces
//! entirely; only the body element types need to be comparable.

/// Returns whether the concatenated tokens of `a` equal the concatenated tokens of `b`
///
/// Two empty streams compare equal.
///
/// ```
/// use sundr::{concat_eq, Split};
///
/// let one = Split::whole(b"ab".as_slice());
/// let two = Split::one(b"a,b".as_slice(), &b',');
/// assert!(concat_eq(one, two));
/// ```
pub fn concat_eq<'a, 'b, T, U, I, J>(a: I, b: J) -> bool
where
    T: PartialEq<U> + 'a,
    U: 'b,
    I: IntoIterator<Item = &'a [T]>,
    J: IntoIterator<Item = &'b [U]>,
{
    concat_eq_by(a, b, |t, u| t == u)
}

/// [`concat_eq`] with a caller-supplied elementwise comparer
///
/// ```
/// use sundr::{concat_eq_by, Split};
///
/// let upper = Split::one(b"AB,C".as_slice(), &b',');
/// let lower = Split::one(b"a,bc".as_slice(), &b',');
/// assert!(concat_eq_by(upper, lower, |x, y| x.eq_ignore_ascii_case(y)));
/// ```
pub fn concat_eq_by<'a, 'b, T, U, I, J, F>(a: I, b: J, mut eq: F) -> bool
where
    T: 'a,
    U: 'b,
    I: IntoIterator<Item = &'a [T]>,
    J: IntoIterator<Item = &'b [U]>,
    F: FnMut(&T, &U) -> bool,
{
    let mut xs = a.into_iter();
    let mut ys = b.into_iter();

    // The unconsumed remainders of the current token on each side.
    let mut x: &[T] = &[];
    let mut y: &[U] = &[];

    loop {
        match (x.is_empty(), y.is_empty()) {
            (true, true) => match (xs.next(), ys.next()) {
                (Some(nx), Some(ny)) => (x, y) = (nx, ny),
                (None, None) => return true,
                // One stream still has content the other cannot match.
                _ => return false,
            },
            (true, false) => match xs.next() {
                Some(nx) => x = nx,
                None => return false,
            },
            (false, true) => match ys.next() {
                Some(ny) => y = ny,
                None => return false,
            },
            (false, false) => {
                let n = x.len().min(y.len());
                if !x[..n].iter().zip(&y[..n]).all(|(t, u)| eq(t, u)) {
                    return false;
                }
                x = &x[n..];
                y = &y[n..];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lockstep_over_uneven_tokens() {
        let a: Vec<&[u8]> = vec![b"ab", b"cde", b"f"];
        let b: Vec<&[u8]> = vec![b"a", b"bcd", b"ef"];
        assert!(concat_eq(a, b));
    }

    #[test]
    fn unequal_content_and_unequal_length() {
        let a: Vec<&[u8]> = vec![b"ab", b"c"];
        assert!(!concat_eq(a.clone(), vec![b"ab".as_slice(), b"d"]));
        assert!(!concat_eq(a.clone(), vec![b"ab".as_slice()]));
        assert!(!concat_eq(a, vec![b"abcd".as_slice()]));
    }

    #[test]
    fn empty_streams() {
        let none: Vec<&[u8]> = Vec::new();
        assert!(concat_eq(none.clone(), Vec::<&[u8]>::new()));
        assert!(!concat_eq(none, vec![b"a".as_slice()]));
    }

    #[test]
    fn custom_comparer() {
        let a: Vec<&[u8]> = vec![b"AbC"];
        let b: Vec<&[u8]> = vec![b"a", b"Bc"];
        assert!(concat_eq_by(a.clone(), b.clone(), |x, y| {
            x.eq_ignore_ascii_case(y)
        }));
        assert!(!concat_eq(a, b));
    }
}
