//! Functions in the module can be used to convert a `Telegram` into its P1 frame
//! representation, including a freshly calculated checksum.

use crate::{
    frame_decoder::{LINE_TERMINATOR, VERSION},
    frame_splitter::{START_MARKER, TRAILER_MARKER, TRAILER_SUFFIX_LEN},
    telegram::Telegram,
    utils::{calc_checksum, fmt_checksum},
};

/// Returns the number of bytes that the frame representation of the `Telegram` needs.
pub fn length_from_telegram(tgram: &Telegram) -> usize {
    let header_len = 1 + tgram.manufacturer().len() + 1 + tgram.identifier().len() + 4;
    let fields_len: usize = tgram
        .fields()
        .iter()
        .map(|(code, value)| code.len() + value.len() + LINE_TERMINATOR.len())
        .sum();
    header_len + fields_len + 1 + TRAILER_SUFFIX_LEN
}

/// Appends the frame representation of the `Telegram` to the provided buffer.
///
/// The manufacturer flag, identifier and field values are written as they are;
/// it is up to the caller to keep them free of line terminators.
pub fn extend_from_telegram(tgram: &Telegram, buf: &mut Vec<u8>) {
    let start = buf.len();

    buf.push(START_MARKER);
    buf.extend_from_slice(tgram.manufacturer().as_bytes());
    buf.push(VERSION);
    buf.extend_from_slice(tgram.identifier().as_bytes());
    buf.extend_from_slice(LINE_TERMINATOR);
    buf.extend_from_slice(LINE_TERMINATOR);

    for (code, value) in tgram.fields() {
        buf.extend_from_slice(code.as_bytes());
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(LINE_TERMINATOR);
    }

    let checksum = calc_checksum(&buf[start..]);

    buf.push(TRAILER_MARKER);
    buf.extend_from_slice(fmt_checksum(checksum).as_bytes());
    buf.extend_from_slice(LINE_TERMINATOR);
}

/// Returns the frame representation of the `Telegram`.
///
/// # Examples
///
/// ```rust
/// use dsmr_p1::Telegram;
/// use dsmr_p1::frame_encoder::bytes_from_telegram;
///
/// let tgram = Telegram::new("XXX", "", Vec::<(String, String)>::new());
///
/// assert_eq!(&b"/XXX5\r\n\r\n!4B22\r\n"[..], &bytes_from_telegram(&tgram)[..]);
/// ```
pub fn bytes_from_telegram(tgram: &Telegram) -> Vec<u8> {
    let mut buf = Vec::with_capacity(length_from_telegram(tgram));
    extend_from_telegram(tgram, &mut buf);
    buf
}
