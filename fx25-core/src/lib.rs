//! GF(2^8) arithmetic, CCSDS RS(255,223) codec, and AX.25/FX.25 framing.
//!
//! No I/O: every operation here is a pure function over in-memory buffers.
//! The CLI binaries in the companion `fx25-cli` crate own files, stdin/
//! stdout, and argument parsing.

pub mod ax25;
pub mod bitflip;
pub mod error;
pub mod fx25;
pub mod gf;
pub mod rs;

pub use error::{DecodeInconsistency, FxError, Result};
