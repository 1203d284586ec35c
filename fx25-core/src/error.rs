//! Crate-wide error type.

use thiserror::Error;

/// All errors produced by fx25-core.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("division by zero in GF(2^8)")]
    FieldDivByZero,

    #[error("AX.25 payload of {len} bytes exceeds {max}-byte frame limit")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("FX.25 information field of {len} bytes exceeds K={max}")]
    InfoFieldTooLarge { len: usize, max: usize },

    #[error("RS block uncorrectable: {0}")]
    UncorrectableBlock(#[from] DecodeInconsistency),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Why a Berlekamp-Massey/Chien/Forney run was rejected as uncorrectable.
///
/// Distinguished from a plain `FxError::UncorrectableBlock` only so callers
/// that care can match on it; the decode pipeline (C9) treats all of these
/// the same way: pass the block through uncorrected and count it as failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeInconsistency {
    #[error("error-locator degree {0} exceeds correction capability T=16")]
    TooManyErrors(usize),
    #[error("Chien search found {found} roots, expected {expected} from deg(Lambda)")]
    RootCountMismatch { found: usize, expected: usize },
    #[error("formal derivative of error locator vanished at a claimed root")]
    VanishingDerivative,
}

pub type Result<T> = std::result::Result<T, FxError>;
