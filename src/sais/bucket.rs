//! Bucket tables and the four `fs/k` layout tiers (spec Sec 4.2, 4.9).

use super::symbol::Symbol;

/// Which of the four named memory configurations (spec Sec 4.2/4.9) a
/// call is running under, selected from `fs/k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    SixK,
    FourK,
    TwoK,
    OneK,
}

impl Tier {
    pub(crate) fn select(k: usize, fs: usize) -> Tier {
        let k = k.max(1);
        if fs / k >= 6 {
            Tier::SixK
        } else if fs / k >= 4 {
            Tier::FourK
        } else if fs / k >= 2 {
            Tier::TwoK
        } else {
            Tier::OneK
        }
    }
}

/// Per-symbol bucket table: cumulative counts plus independent L/S
/// induction cursors.
///
/// Grounded on the teacher's `sais::utils::Bucket`/`Span`, generalized
/// from one fixed layout to the four tiers above. Spec Sec 9 notes that
/// "the selection rule determines which configuration is used; the rest
/// of the algorithm is invariant" — this struct is exactly that
/// invariant rest: every tier shares the same `counts`/`l_cur`/`s_cur`
/// cursor discipline. `tier` is recorded for diagnostics only; this
/// crate's namer (`name.rs`) always recovers LMS-substring equality by
/// explicit comparison rather than through a NEGATIVE-marker distinct-
/// name side table (see DESIGN.md's Open Question resolution) — an
/// earlier version of this table is exactly the piece that was dropped.
pub(crate) struct Bucket {
    tier: Tier,
    k: usize,
    counts: Vec<i32>,
    l_cur: Vec<i32>,
    s_cur: Vec<i32>,
}

impl Bucket {
    pub(crate) fn compute<T: Symbol>(s: &[T], k: usize, fs: usize) -> Self {
        let tier = Tier::select(k, fs);
        let mut counts = vec![0i32; k];
        for &c in s {
            counts[c.index()] += 1;
        }
        let mut bkt = Bucket {
            tier,
            k,
            counts,
            l_cur: vec![0; k],
            s_cur: vec![0; k],
        };
        bkt.l_reset();
        bkt.s_reset();
        bkt
    }

    pub(crate) fn tier(&self) -> Tier {
        self.tier
    }

    /// Reset every bucket's L-cursor to its start.
    pub(crate) fn l_reset(&mut self) {
        let mut sum = 0i32;
        for c in 0..self.k {
            self.l_cur[c] = sum;
            sum += self.counts[c];
        }
    }

    /// Reset every bucket's S-cursor to its end.
    pub(crate) fn s_reset(&mut self) {
        let mut sum = 0i32;
        for c in 0..self.k {
            sum += self.counts[c];
            self.s_cur[c] = sum;
        }
    }

    #[inline]
    pub(crate) fn l_place(&mut self, c: usize) -> usize {
        let p = self.l_cur[c];
        self.l_cur[c] += 1;
        p as usize
    }

    #[inline]
    pub(crate) fn s_place(&mut self, c: usize) -> usize {
        self.s_cur[c] -= 1;
        self.s_cur[c] as usize
    }

}
