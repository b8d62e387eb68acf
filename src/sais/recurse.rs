//! Recursive SA-IS core (spec Sec 4.3-4.7, 4.9).
//!
//! Grounded on the teacher's `sais::mod::general_sort` (naive-sort-below-
//! threshold / recurse-otherwise dispatch) and `construct/llhsais/
//! mod.rs`'s recursive self-call shape, rebuilt around this crate's
//! `i32`, no-stored-sentinel, `fs`-aware representation.

use super::bucket::Bucket;
use super::compact::compact_reduced_string;
use super::induce::{induce_final, induce_lms, place_lms_sorted};
use super::name::name_lms_substrings;
use super::symbol::Symbol;
use super::types::Types;

const EMPTY: i32 = i32::MIN;

/// Below this length a comparison sort beats the overhead of building
/// bucket tables and recursing, matching the teacher's own
/// `sais::THRESHOLD` (128).
const NAIVE_THRESHOLD: usize = 128;

/// Compute the suffix array of `s` into `sa[0..s.len())`. `sa` must have
/// length `s.len() + fs`; the trailing `fs` slots are scratch and are
/// left in an unspecified state on return. `k` is the alphabet size
/// (256 for the outer byte entry, `name_count` for a recursive call).
pub(crate) fn sais_core<T: Symbol>(s: &[T], k: usize, sa: &mut [i32], fs: usize) {
    let n = s.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        sa[0] = 0;
        return;
    }
    if n < NAIVE_THRESHOLD {
        naive_sort(s, sa);
        return;
    }

    let types = Types::calculate(s);
    let mut bkt = Bucket::compute(s, k, fs);

    for x in sa[..n].iter_mut() {
        *x = EMPTY;
    }
    for i in (1..n).rev() {
        if types.is_lms(i) {
            let c = s[i].index();
            let slot = bkt.s_place(c);
            sa[slot] = i as i32;
        }
    }

    induce_lms(s, &types, sa, &mut bkt);

    // compact the provisionally sorted LMS positions down to sa[0..n1).
    let mut n1 = 0usize;
    for i in 0..n {
        let v = sa[i];
        if v != EMPTY {
            let p = v as usize;
            if types.is_lms(p) {
                sa[n1] = v;
                n1 += 1;
            }
        }
    }
    for x in sa[n1..n].iter_mut() {
        *x = EMPTY;
    }

    let name_count = name_lms_substrings(s, &types, sa, n1);
    let reduced_at = compact_reduced_string(sa, n, n1);
    debug_assert_eq!(reduced_at, n - n1);

    if (name_count as usize) < n1 {
        // names collide: solve the reduced problem recursively (spec
        // Sec 4.7). This crate always recurses on the full reduced
        // string rather than replicating the reference's "skip
        // recursion when f unique names already cover the input"
        // optimization (spec Sec 9: "an implementer may choose not to
        // replicate this optimization ... the external contract is
        // unchanged").
        let gap = (n - n1) - n1;
        let (left, right) = sa.split_at_mut(n - n1);
        let s1 = &right[..n1];
        sais_core::<i32>(s1, name_count as usize, left, gap);
        // left[0..n1) now holds, for each reduced-string rank, the
        // occurrence-index (position within the ascending LMS sequence)
        // of the suffix at that rank.
    } else {
        // names are already pairwise distinct: the reduced string is
        // its own suffix array's inverse permutation (spec Sec 4.7).
        for i in 0..n1 {
            let name = sa[n - n1 + i];
            sa[name as usize] = i as i32;
        }
    }

    // map reduced-string occurrence-indices back to real LMS positions:
    // gather real LMS positions ascending into sa[n1..2*n1).
    let mut j = n1;
    for i in 1..n {
        if types.is_lms(i) {
            sa[j] = i as i32;
            j += 1;
        }
    }
    debug_assert_eq!(j, 2 * n1);
    for i in 0..n1 {
        let occ = sa[i] as usize;
        sa[i] = sa[n1 + occ];
    }

    // reconstruct and run the final inducer (spec Sec 4.7/4.8).
    place_lms_sorted(s, sa, &mut bkt, n1);
    induce_final(s, &types, sa, &mut bkt);
}

fn naive_sort<T: Symbol>(s: &[T], sa: &mut [i32]) {
    let n = s.len();
    for i in 0..n {
        sa[i] = i as i32;
    }
    sa[..n].sort_by(|&i, &j| s[i as usize..].cmp(&s[j as usize..]));
}
