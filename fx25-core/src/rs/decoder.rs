//! RS(255,223) decoder (C4): syndromes, Berlekamp-Massey, Chien search, Forney.

use crate::error::{DecodeInconsistency, FxError, Result};
use crate::gf;
use crate::rs::{N, PARITY, T};

fn compute_syndromes(received: &[u8; N]) -> [u8; PARITY] {
    let mut s = [0u8; PARITY];
    for (i, si) in s.iter_mut().enumerate() {
        let alpha_i = gf::pow(gf::alpha(), i as i32);
        let mut acc = 0u8;
        for (j, &rj) in received.iter().enumerate() {
            acc ^= gf::mul(rj, gf::pow(alpha_i, j as i32));
        }
        *si = acc;
    }
    s
}

/// Berlekamp-Massey key-equation solver.
///
/// Textbook formulation (Blahut / MacWilliams-Sloane), not the idiosyncratic
/// `new_deg`/`deg_prev` bookkeeping in the reference decoder this crate was
/// distilled from. Returns the error-locator polynomial (lowest-degree
/// coefficient first) and its degree `L`.
fn berlekamp_massey(s: &[u8; PARITY]) -> Result<([u8; PARITY + 1], usize)> {
    let mut lambda = [0u8; PARITY + 1];
    let mut b = [0u8; PARITY + 1];
    lambda[0] = 1;
    b[0] = 1;
    let mut l = 0usize;
    let mut m = 1usize;
    let mut prev_disc = 1u8;

    for k in 0..PARITY {
        let mut delta = s[k];
        for i in 1..=l {
            delta ^= gf::mul(lambda[i], s[k - i]);
        }

        if delta == 0 {
            m += 1;
            continue;
        }

        let coef = gf::div(delta, prev_disc)?;
        let prev_lambda = lambda;
        for j in 0..=(PARITY - m) {
            lambda[j + m] ^= gf::mul(coef, b[j]);
        }

        if 2 * l <= k {
            l = k + 1 - l;
            b = prev_lambda;
            prev_disc = delta;
            m = 1;
        } else {
            m += 1;
        }
    }

    if l > T {
        return Err(FxError::UncorrectableBlock(
            DecodeInconsistency::TooManyErrors(l),
        ));
    }
    Ok((lambda, l))
}

fn compute_omega(s: &[u8; PARITY], lambda: &[u8; PARITY + 1], l: usize) -> [u8; PARITY] {
    let mut omega = [0u8; PARITY];
    for (i, oi) in omega.iter_mut().enumerate() {
        let mut acc = 0u8;
        for j in 0..=l.min(i) {
            acc ^= gf::mul(s[i - j], lambda[j]);
        }
        *oi = acc;
    }
    omega
}

fn chien_search(lambda: &[u8; PARITY + 1], l: usize) -> Result<Vec<usize>> {
    let mut positions = Vec::with_capacity(T);
    for i in 0..N {
        let x_inv = gf::pow(gf::alpha(), -(i as i32));
        let mut sum = 0u8;
        for j in 0..=l {
            if lambda[j] != 0 {
                sum ^= gf::mul(lambda[j], gf::pow(x_inv, j as i32));
            }
        }
        if sum == 0 {
            positions.push(i);
            if positions.len() > T {
                return Err(FxError::UncorrectableBlock(
                    DecodeInconsistency::TooManyErrors(positions.len()),
                ));
            }
        }
    }
    if positions.len() != l {
        return Err(FxError::UncorrectableBlock(
            DecodeInconsistency::RootCountMismatch {
                found: positions.len(),
                expected: l,
            },
        ));
    }
    Ok(positions)
}

fn forney_correct(
    lambda: &[u8; PARITY + 1],
    omega: &[u8; PARITY],
    l: usize,
    positions: &[usize],
    corrected: &mut [u8; N],
) -> Result<()> {
    for &i in positions {
        let x_inv = gf::pow(gf::alpha(), -(i as i32));

        let mut omega_val = 0u8;
        for (j, &oj) in omega.iter().enumerate() {
            if oj != 0 {
                omega_val ^= gf::mul(oj, gf::pow(x_inv, j as i32));
            }
        }

        let mut lambda_prime = 0u8;
        let mut j = 1;
        while j <= l {
            if lambda[j] != 0 {
                lambda_prime ^= gf::mul(lambda[j], gf::pow(x_inv, (j - 1) as i32));
            }
            j += 2;
        }

        if lambda_prime == 0 {
            return Err(FxError::UncorrectableBlock(
                DecodeInconsistency::VanishingDerivative,
            ));
        }
        let magnitude = gf::div(omega_val, lambda_prime)?;
        corrected[i] ^= magnitude;
    }
    Ok(())
}

/// Decode one 255-byte received word.
///
/// Returns the corrected codeword and the number of errors found, or
/// propagates [`FxError::UncorrectableBlock`] when more than `T`=16 errors
/// are present or the locator/root-count/derivative checks are inconsistent.
pub fn decode(received: &[u8; N]) -> Result<([u8; N], usize)> {
    let syndromes = compute_syndromes(received);
    if syndromes.iter().all(|&s| s == 0) {
        return Ok((*received, 0));
    }

    let (lambda, l) = berlekamp_massey(&syndromes)?;
    let omega = compute_omega(&syndromes, &lambda, l);
    let positions = chien_search(&lambda, l)?;

    let mut corrected = *received;
    forney_correct(&lambda, &omega, l, &positions, &mut corrected)?;
    Ok((corrected, positions.len()))
}
