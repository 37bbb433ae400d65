//! Checksum helpers shared by the decoder and the encoder.

/// Reflected generator polynomial of the P1 checksum (x^16 + x^15 + x^2 + 1).
const CRC16_POLYNOMIAL: u16 = 0xA001;

/// Calc checksum according to the P1 companion standard.
///
/// This is a CRC16 processing the least significant bit first, starting with a
/// register value of zero and without a final XOR.
///
/// # Examples
///
/// ```rust
/// use dsmr_p1::utils::calc_checksum;
///
/// assert_eq!(0x0000, calc_checksum(&[]));
/// assert_eq!(0xBB3D, calc_checksum(b"123456789"));
/// ```
pub fn calc_checksum(buf: &[u8]) -> u16 {
    buf.iter().fold(0, |crc, &b| {
        (0..8).fold(crc ^ u16::from(b), |crc, _| {
            if crc & 1 != 0 {
                (crc >> 1) ^ CRC16_POLYNOMIAL
            } else {
                crc >> 1
            }
        })
    })
}

/// Returns the value of an uppercase hex digit.
pub fn hex_digit_value(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'A'..=b'F' => Some(u16::from(b - b'A') + 10),
        _ => None,
    }
}

/// Format a checksum the way it is transmitted in the trailer.
pub fn fmt_checksum(checksum: u16) -> String {
    format!("{:04X}", checksum)
}

/// Returns the position of the first occurrence of `needle` in `haystack`.
pub fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
