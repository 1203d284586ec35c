//! RS(255,223) systematic encoder (C3).

use crate::gf;
use crate::rs::generator::generator;
use crate::rs::{K, N, PARITY};

/// Systematically encode 223 data symbols into a 255-symbol codeword.
///
/// `codeword[..K]` is a copy of `data`; `codeword[K..]` is the remainder of
/// `data(x) * x^PARITY` divided by the generator polynomial, computed with a
/// feedback shift register. Total operation, no failure mode.
pub fn encode(data: &[u8; K]) -> [u8; N] {
    let g = generator();
    let mut codeword = [0u8; N];
    codeword[..K].copy_from_slice(data);

    let mut remainder = [0u8; PARITY];
    for &byte in data.iter() {
        let feedback = byte ^ remainder[PARITY - 1];
        for j in (1..PARITY).rev() {
            remainder[j] = remainder[j - 1] ^ gf::mul(g[j], feedback);
        }
        remainder[0] = gf::mul(g[0], feedback);
    }
    codeword[K..].copy_from_slice(&remainder);
    codeword
}
