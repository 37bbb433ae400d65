//! Functions in this module find the boundaries of P1 frames within a stream of bytes.
//!
//! The splitter only looks at the start marker `/`, the trailer marker `!` and the number
//! of bytes following the trailer. Everything else is left to the
//! [`frame_decoder`](../frame_decoder/index.html).

/// The byte starting every frame.
pub const START_MARKER: u8 = b'/';

/// The byte introducing the checksum trailer of every frame.
pub const TRAILER_MARKER: u8 = b'!';

/// Number of bytes following the trailer marker: four hex digits and CR LF.
pub const TRAILER_SUFFIX_LEN: usize = 6;

/// Splits the next token off the front of `buf`.
///
/// Returns the number of bytes to consume and the token to emit, if any. A token
/// is either a candidate frame starting with `/`, the noise in front of the next `/`,
/// or (if `at_eof` is set) whatever remains of the stream. A `(0, None)` result
/// means that more bytes are needed.
///
/// # Examples
///
/// ```rust
/// use dsmr_p1::frame_splitter::split_frame;
///
/// let buf = b"noise/XXX5\r\n\r\n!4B22\r\n";
///
/// assert_eq!((5, Some(&b"noise"[..])), split_frame(buf, false));
/// assert_eq!((16, Some(&buf[5..])), split_frame(&buf[5..], false));
/// assert_eq!((0, None), split_frame(&buf[5..20], false));
/// assert_eq!((15, Some(&buf[5..20])), split_frame(&buf[5..20], true));
/// ```
pub fn split_frame(buf: &[u8], at_eof: bool) -> (usize, Option<&[u8]>) {
    match buf.iter().position(|&b| b == START_MARKER) {
        Some(0) => {
            let frame_len = buf
                .iter()
                .position(|&b| b == TRAILER_MARKER)
                .map(|idx| idx + 1 + TRAILER_SUFFIX_LEN)
                .filter(|&len| len <= buf.len());

            match frame_len {
                Some(len) => (len, Some(&buf[..len])),
                None => remainder(buf, at_eof),
            }
        }
        Some(idx) => (idx, Some(&buf[..idx])),
        None => remainder(buf, at_eof),
    }
}

fn remainder(buf: &[u8], at_eof: bool) -> (usize, Option<&[u8]>) {
    if at_eof && !buf.is_empty() {
        (buf.len(), Some(buf))
    } else {
        (0, None)
    }
}
