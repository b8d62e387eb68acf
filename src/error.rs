//! Error taxonomy (spec Sec 7), expanded per `SPEC_FULL.md` Sec F.3.

use std::error::Error;
use std::fmt;

/// Failure modes of the `try_*` entry points.
///
/// Mirrors spec Sec 7's two-way taxonomy (`-1` invalid argument, `-2`
/// allocation failure) as an idiomatic `std::error::Error`, rather than
/// pulling in `thiserror`: the teacher crate already favors a hand-rolled
/// `std::error::Error` impl (see its `pack` feature's use of
/// `std::io::Error`) over an error-derive crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SacaError {
    /// A precondition on the arguments was violated (length mismatch,
    /// input longer than `MAX_LENGTH`, ...).
    InvalidArgument(&'static str),
    /// Reserved for FFI-contract parity with spec Sec 7's `-2` code.
    /// Not currently reachable: this crate's internal allocations use
    /// the global allocator's default abort-on-OOM behavior rather than
    /// `Vec::try_reserve`, matching the teacher crate's own style, which
    /// never threads allocation failure through a `Result` either.
    AllocationFailure,
}

impl fmt::Display for SacaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SacaError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            SacaError::AllocationFailure => write!(f, "allocation failure"),
        }
    }
}

impl Error for SacaError {}
