//! RS(255,223) codec: GF(2^8) arithmetic atop [`crate::gf`], generator
//! polynomial (C2), systematic encoder (C3), and syndrome/Berlekamp-Massey/
//! Chien/Forney decoder (C4).

pub mod decoder;
pub mod encoder;
pub mod generator;

/// Total codeword length.
pub const N: usize = 255;
/// Information symbols per codeword.
pub const K: usize = 223;
/// Parity symbols per codeword (2*T).
pub const PARITY: usize = 32;
/// Maximum correctable symbol errors per codeword.
pub const T: usize = 16;

pub use decoder::decode;
pub use encoder::encode;

/// Explicit codec handle for callers who would rather pass an object around
/// than call free functions.
///
/// Holds no state of its own: the GF tables and generator polynomial are
/// process-wide compile-time constants (see [`crate::gf`] and
/// [`generator`]), so constructing and cloning an `RsCodec` is free.
#[derive(Debug, Default, Clone, Copy)]
pub struct RsCodec;

impl RsCodec {
    pub fn new() -> Self {
        RsCodec
    }

    /// Systematically encode `data` into a 255-byte codeword. Total, infallible.
    pub fn encode(&self, data: &[u8; K]) -> [u8; N] {
        encoder::encode(data)
    }

    /// Decode a 255-byte received word, correcting up to `T` symbol errors.
    pub fn decode(&self, received: &[u8; N]) -> crate::error::Result<([u8; N], usize)> {
        decoder::decode(received)
    }
}
