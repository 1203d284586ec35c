//! Single-bit error injection for testing the RS/FX.25 pipeline (C8).

/// Flip the low-order bit of the byte at `position` in `data`, in place.
///
/// `position` past the end of `data` is a no-op: this is a test-fixture
/// helper, not a protocol operation, so out-of-range offsets are silently
/// ignored rather than treated as an error.
pub fn flip_bit(data: &mut [u8], position: usize) {
    if let Some(byte) = data.get_mut(position) {
        *byte ^= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_low_bit_at_position() {
        let mut data = vec![0b1010_1010u8, 0x00];
        flip_bit(&mut data, 0);
        assert_eq!(data[0], 0b1010_1011);
    }

    #[test]
    fn leaves_other_bytes_untouched() {
        let mut data = vec![1, 2, 3];
        flip_bit(&mut data, 1);
        assert_eq!(data, vec![1, 3, 3]);
    }

    #[test]
    fn out_of_range_position_is_a_no_op() {
        let mut data = vec![1, 2, 3];
        flip_bit(&mut data, 99);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn double_flip_restores_original_byte() {
        let mut data = vec![0x5Au8];
        flip_bit(&mut data, 0);
        flip_bit(&mut data, 0);
        assert_eq!(data[0], 0x5A);
    }
}
