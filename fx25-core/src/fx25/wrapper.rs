//! FX.25 outer-layer wrapping: correlation tag + RS(255,223) codeword (C7).

use crate::error::{FxError, Result};
use crate::rs::{RsCodec, K, N};

/// Fixed 8-byte tag that precedes every FX.25 codeword, used by a receiver
/// to distinguish FX.25 frames from plain AX.25 on the same channel.
pub const CORRELATION_TAG: [u8; 8] = [0xCC, 0x8F, 0x8A, 0xE4, 0x85, 0xE2, 0x98, 0x01];

/// Wrap one AX.25 frame (or any payload up to `K`=223 bytes) in an FX.25
/// frame: the correlation tag followed by a zero-padded, RS-encoded
/// 255-byte codeword.
pub fn wrap(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > K {
        return Err(FxError::InfoFieldTooLarge {
            len: payload.len(),
            max: K,
        });
    }

    let mut block = [0u8; K];
    block[..payload.len()].copy_from_slice(payload);

    let codeword = RsCodec::new().encode(&block);

    let mut frame = Vec::with_capacity(CORRELATION_TAG.len() + N);
    frame.extend_from_slice(&CORRELATION_TAG);
    frame.extend_from_slice(&codeword);
    Ok(frame)
}

/// Split a wrapped FX.25 frame into its correlation tag and RS codeword.
///
/// Returns `None` if `frame` is shorter than `CORRELATION_TAG.len() + N`.
pub fn split(frame: &[u8]) -> Option<(&[u8; 8], &[u8; N])> {
    if frame.len() < CORRELATION_TAG.len() + N {
        return None;
    }
    let tag: &[u8; 8] = frame[..8].try_into().ok()?;
    let codeword: &[u8; N] = frame[8..8 + N].try_into().ok()?;
    Some((tag, codeword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_frame_starts_with_correlation_tag() {
        let frame = wrap(b"hello").unwrap();
        assert_eq!(&frame[..8], &CORRELATION_TAG[..]);
        assert_eq!(frame.len(), 8 + N);
    }

    #[test]
    fn payload_is_zero_padded_before_encoding() {
        let frame = wrap(b"x").unwrap();
        let (_, codeword) = split(&frame).unwrap();
        assert_eq!(codeword[0], b'x');
        assert_eq!(codeword[1], 0);
        assert_eq!(codeword[K - 1], 0);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = vec![0u8; K + 1];
        assert!(matches!(wrap(&payload), Err(FxError::InfoFieldTooLarge { .. })));
    }

    #[test]
    fn split_rejects_short_frames() {
        assert!(split(&[0u8; 10]).is_none());
    }

    #[test]
    fn wrap_then_split_then_decode_round_trips() {
        let frame = wrap(b"CQ CQ DE N0CALL").unwrap();
        let (tag, codeword) = split(&frame).unwrap();
        assert_eq!(tag, &CORRELATION_TAG);
        let (corrected, errors) = RsCodec::new().decode(codeword).unwrap();
        assert_eq!(errors, 0);
        assert_eq!(&corrected[..15], b"CQ CQ DE N0CALL");
    }
}
