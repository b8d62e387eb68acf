//! Induced sorting (spec Sec 4.4, 4.8): the two-scan L-type/S-type
//! propagation used both to sort LMS substrings and, after recursion, to
//! produce the final suffix array.
//!
//! Grounded on the teacher's `sais::mod::induce_by_lms`
//! (push_front/push_back two-scan shape) and `construct/sacak0/
//! mod.rs::induce_by_lms`'s `T[q-1] >= T[q]` / `T[q-1] > T[q]`
//! refinement bits, which are the standard SA-IS L/S class refinement
//! spec Sec 4.4 names explicitly.

use super::bucket::Bucket;
use super::symbol::Symbol;
use super::types::Types;

const EMPTY: i32 = i32::MIN;

/// Two-scan induced sort producing a provisional order of LMS
/// substrings, given LMS positions already scattered into the tails of
/// their symbol buckets (spec Sec 4.4). `sa[0..s.len())` is mutated in
/// place.
///
/// This crate does not implement the NEGATIVE-marker distinct-name side
/// table spec Sec 4.4/Sec 9 describes for the 6k/4k tiers: `name.rs`
/// always recovers LMS-substring equality by explicit comparison
/// instead (the path spec Sec 4.4 already mandates for 2k/1k), so every
/// tier is correct by the same single code path. See DESIGN.md.
pub(crate) fn induce_lms<T: Symbol>(s: &[T], types: &Types, sa: &mut [i32], bkt: &mut Bucket) {
    let n = s.len();
    bkt.l_reset();

    let seed = n - 1;
    let c0 = s[seed].index();
    let slot = bkt.l_place(c0);
    sa[slot] = seed as i32;

    let mut i = 0usize;
    while i < n {
        let v = sa[i];
        if v != EMPTY {
            let p = v as usize;
            if p > 0 && !types.get(p - 1) {
                let q = p - 1;
                let c = s[q].index();
                let slot = bkt.l_place(c);
                sa[slot] = q as i32;
            }
        }
        i += 1;
    }

    bkt.s_reset();
    let mut i = n;
    while i > 0 {
        i -= 1;
        let v = sa[i];
        if v != EMPTY {
            let p = v as usize;
            if p > 0 && types.get(p - 1) {
                let q = p - 1;
                let c = s[q].index();
                let slot = bkt.s_place(c);
                sa[slot] = q as i32;
            }
        }
    }
}

/// Re-place the `n1` fully sorted LMS positions (at `sa[0..n1)`) into
/// the tails of their symbol buckets, preserving their relative order
/// (spec Sec 4.7's reconstruction step feeding Sec 4.8's final induce).
pub(crate) fn place_lms_sorted<T: Symbol>(s: &[T], sa: &mut [i32], bkt: &mut Bucket, n1: usize) {
    let n = s.len();
    for i in (0..n1).rev() {
        sa[n - n1 + i] = sa[i];
    }
    for x in sa[..n - n1].iter_mut() {
        *x = EMPTY;
    }
    bkt.s_reset();
    for i in (0..n1).rev() {
        let pos = sa[n - n1 + i] as usize;
        sa[n - n1 + i] = EMPTY;
        let c = s[pos].index();
        let slot = bkt.s_place(c);
        sa[slot] = pos as i32;
    }
}

/// Final two-scan induce (spec Sec 4.8), producing the complete suffix
/// array of `s` in `sa[0..s.len())` from the LMS positions already
/// seeded at their bucket tails by `place_lms_sorted`.
pub(crate) fn induce_final<T: Symbol>(s: &[T], types: &Types, sa: &mut [i32], bkt: &mut Bucket) {
    let n = s.len();
    bkt.l_reset();
    if n > 0 {
        let c = s[n - 1].index();
        let slot = bkt.l_place(c);
        sa[slot] = (n - 1) as i32;
    }

    let mut i = 0usize;
    while i < n {
        let v = sa[i];
        if v != EMPTY {
            let p = v as usize;
            if p > 0 && !types.get(p - 1) {
                let q = p - 1;
                let c = s[q].index();
                let slot = bkt.l_place(c);
                sa[slot] = q as i32;
            }
        }
        i += 1;
    }

    bkt.s_reset();
    let mut i = n;
    while i > 0 {
        i -= 1;
        let v = sa[i];
        if v != EMPTY {
            let p = v as usize;
            if p > 0 && types.get(p - 1) {
                let q = p - 1;
                let c = s[q].index();
                let slot = bkt.s_place(c);
                sa[slot] = q as i32;
            }
        }
    }
}
