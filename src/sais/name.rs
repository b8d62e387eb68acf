//! LMS-substring equality and the namer (spec Sec 4.5).

use super::symbol::Symbol;
use super::types::Types;

/// Whether the LMS substrings starting at `i` and `j` are equal.
///
/// Grounded on the teacher's `sais::mod::lms_substring_eq`, simplified:
/// walk both substrings symbol-by-symbol and type-by-type; either
/// running off the end of `s` (hitting the virtual sentinel) or landing
/// on a further LMS boundary (`k > 0`) ends the substring. Two
/// substrings are equal iff they end at the same offset with every
/// symbol and type matching up to that point (spec Sec 4.5's exact
/// definition of LMS-substring equality).
pub(crate) fn lms_substring_eq<T: Symbol>(s: &[T], types: &Types, i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }
    let n = s.len();
    let mut k = 0usize;
    loop {
        let pi = i + k;
        let pj = j + k;
        let ei = pi >= n;
        let ej = pj >= n;
        if ei || ej {
            return ei == ej;
        }
        if s[pi] != s[pj] || types.get(pi) != types.get(pj) {
            return false;
        }
        if k > 0 && (types.is_lms(pi) || types.is_lms(pj)) {
            return true;
        }
        k += 1;
    }
}

/// Name the `n1` LMS substrings, currently listed in substring-sorted
/// order at `sa[0..n1)`, into the halved-index scratch `sa[n1..n)`
/// (spec Sec 4.5/4.9: `sa[n1 + pos/2] = name`, valid because LMS
/// positions are at least two apart). Returns the number of distinct
/// names found.
pub(crate) fn name_lms_substrings<T: Symbol>(
    s: &[T],
    types: &Types,
    sa: &mut [i32],
    n1: usize,
) -> i32 {
    let n = s.len();
    for x in sa[n1..n].iter_mut() {
        *x = i32::MIN;
    }
    let mut name = -1i32;
    let mut prev: Option<usize> = None;
    for i in 0..n1 {
        let pos = sa[i] as usize;
        let is_new = match prev {
            None => true,
            Some(p) => !lms_substring_eq(s, types, p, pos),
        };
        if is_new {
            name += 1;
            prev = Some(pos);
        }
        sa[n1 + pos / 2] = name;
    }
    name + 1
}
