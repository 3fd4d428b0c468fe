//! Raw Value Decoding
//!
//! Reconstructs integers from the little-endian raw value field of a SMART
//! attribute. Callers pass a byte width taken from the attribute catalog, so
//! a buffer shorter than that width is a catalog bug and panics.

/// Reinterpret the first four raw bytes as an unsigned little-endian integer.
///
/// # Panics
///
/// Panics if `raw` holds fewer than four bytes.
#[inline]
pub fn decode_unsigned32(raw: &[u8]) -> u32 {
    assert!(raw.len() >= 4, "raw value needs 4 bytes, got {}", raw.len());
    u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])
}

/// Assemble a little-endian integer from `width` raw bytes and sign-extend it
/// from the top bit of byte `width - 1`.
///
/// Width 4 is already the native width and is returned as is.
///
/// # Panics
///
/// Panics if `width` is outside `1..=4` or `raw` is shorter than `width`.
pub fn decode_signed(raw: &[u8], width: usize) -> i32 {
    assert!(
        (1..=4).contains(&width),
        "signed raw width must be between 1 and 4, got {}",
        width
    );
    assert!(
        raw.len() >= width,
        "raw value needs {} bytes, got {}",
        width,
        raw.len()
    );

    let mut value = raw[..width]
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, byte)| acc | (u32::from(*byte) << (8 * i)));

    if width < 4 && raw[width - 1] & 0x80 != 0 {
        value |= u32::MAX << (width * 8);
    }

    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned32() {
        assert_eq!(decode_unsigned32(&[0x01, 0x00, 0x00, 0x00]), 1);
        assert_eq!(decode_unsigned32(&[0xFF, 0xFF, 0xFF, 0xFF]), 4_294_967_295);
        assert_eq!(decode_unsigned32(&[0x78, 0x56, 0x34, 0x12, 0xAA, 0xBB]), 0x1234_5678);
    }

    #[test]
    fn test_signed_one_byte() {
        assert_eq!(decode_signed(&[0xFF], 1), -1);
        assert_eq!(decode_signed(&[0x7F], 1), 127);
        assert_eq!(decode_signed(&[0x80], 1), -128);
        // Bytes past the width are ignored
        assert_eq!(decode_signed(&[0x2A, 0xFF, 0xFF], 1), 42);
    }

    #[test]
    fn test_signed_two_and_three_bytes() {
        assert_eq!(decode_signed(&[0xFF, 0xFF], 2), -1);
        assert_eq!(decode_signed(&[0xFF, 0x7F], 2), 32767);
        assert_eq!(decode_signed(&[0x00, 0x00, 0x80], 3), -8_388_608);
        assert_eq!(decode_signed(&[0xFF, 0xFF, 0x7F], 3), 8_388_607);
    }

    #[test]
    fn test_signed_matches_twos_complement() {
        for byte in 0..=u8::MAX {
            assert_eq!(decode_signed(&[byte], 1), i32::from(byte as i8));
        }
        for word in [0u16, 1, 0x7FFF, 0x8000, 0xFFFE, 0xABCD] {
            assert_eq!(decode_signed(&word.to_le_bytes(), 2), i32::from(word as i16));
        }
    }

    #[test]
    fn test_signed_four_bytes_native() {
        assert_eq!(decode_signed(&[0xFF, 0xFF, 0xFF, 0xFF], 4), -1);
        assert_eq!(decode_signed(&[0x01, 0x00, 0x00, 0x00], 4), 1);
    }

    #[test]
    #[should_panic(expected = "raw value needs 3 bytes")]
    fn test_signed_short_buffer_panics() {
        decode_signed(&[0x01, 0x02], 3);
    }

    #[test]
    #[should_panic(expected = "signed raw width")]
    fn test_signed_bad_width_panics() {
        decode_signed(&[0x01; 6], 5);
    }

    #[test]
    #[should_panic(expected = "raw value needs 4 bytes")]
    fn test_unsigned_short_buffer_panics() {
        decode_unsigned32(&[0x01, 0x02]);
    }
}
