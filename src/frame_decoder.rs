//! Functions in this module can be used to decode byte slices of data conforming to the
//! P1 companion standard into `Telegram` values.
//!
//! A frame looks like this on the wire:
//!
//! ```text
//! /XXX5<identifier>\r\n
//! \r\n
//! <field code>(<value>)[(<value>)...]\r\n
//! ...
//! !<checksum>\r\n
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::{DecodeError, DecodeResult, Marker},
    frame_splitter::{START_MARKER, TRAILER_SUFFIX_LEN},
    telegram::Telegram,
    utils::{calc_checksum, find_subslice, hex_digit_value},
};

/// Length of the smallest valid frame: `/XXX5\r\n\r\n!CCCC\r\n`.
pub const MIN_FRAME_LEN: usize = 16;

/// Offset of the protocol version character.
pub const VERSION_OFFSET: usize = 4;

/// The protocol version character of DSMR 5 frames.
pub const VERSION: u8 = b'5';

/// Offset where the identification text begins.
pub const IDENTIFIER_OFFSET: usize = 5;

/// The line terminator used throughout a frame.
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

const IDENTIFIER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Returns the offset of the trailer marker in a frame of the given length.
fn trailer_offset(len: usize) -> usize {
    len - 1 - TRAILER_SUFFIX_LEN
}

fn expect_marker(buf: &[u8], position: usize, marker: Marker) -> DecodeResult<()> {
    let found = buf[position];
    if found == marker.expected() {
        Ok(())
    } else {
        Err(DecodeError::MalformedFrame {
            marker,
            position,
            found,
        })
    }
}

/// Checks the length and the fixed framing bytes of a frame.
pub fn check_format(buf: &[u8]) -> DecodeResult<()> {
    let len = buf.len();
    if len < MIN_FRAME_LEN {
        return Err(DecodeError::TooShort { length: len });
    }

    expect_marker(buf, 0, Marker::Start)?;
    expect_marker(buf, VERSION_OFFSET, Marker::Version)?;
    expect_marker(buf, trailer_offset(len), Marker::Trailer)?;
    expect_marker(buf, len - 2, Marker::CarriageReturn)?;
    expect_marker(buf, len - 1, Marker::LineFeed)?;

    Ok(())
}

/// Parses the four hex digits of the trailer of a format-checked frame.
pub fn checksum_from_bytes(buf: &[u8]) -> DecodeResult<u16> {
    let start = buf.len() - 6;
    buf[start..start + 4]
        .iter()
        .enumerate()
        .try_fold(0u16, |acc, (idx, &b)| match hex_digit_value(b) {
            Some(digit) => Ok((acc << 4) | digit),
            None => Err(DecodeError::InvalidChecksumDigits {
                position: start + idx,
                found: b,
            }),
        })
}

/// Compares the transmitted checksum of a format-checked frame with the calculated one.
pub fn verify_checksum(buf: &[u8]) -> DecodeResult<()> {
    let expected = checksum_from_bytes(buf)?;
    let calculated = calc_checksum(&buf[..trailer_offset(buf.len())]);
    if expected == calculated {
        Ok(())
    } else {
        debug!(
            "checksum mismatch: parsed {:04X}, calculated {:04X}",
            expected, calculated
        );
        Err(DecodeError::ChecksumMismatch {
            expected,
            calculated,
        })
    }
}

fn text(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).into_owned()
}

/// Splits the data lines between `start` and the trailer marker into a field map.
fn fields_from_bytes(buf: &[u8], start: usize, end: usize) -> DecodeResult<BTreeMap<String, String>> {
    let mut fields = BTreeMap::new();
    let mut line_start = start;

    while line_start < end {
        let rest = &buf[line_start..end];

        let line_len = find_subslice(rest, LINE_TERMINATOR).ok_or(
            DecodeError::MissingFieldTerminator {
                position: line_start,
            },
        )?;
        let line = &rest[..line_len];

        let paren_idx = line.iter().position(|&b| b == b'(').ok_or(
            DecodeError::MalformedField {
                position: line_start,
            },
        )?;

        // duplicates overwrite earlier values
        fields.insert(text(&line[..paren_idx]), text(&line[paren_idx..]));

        line_start += line_len + LINE_TERMINATOR.len();
    }

    Ok(fields)
}

/// Convert a slice of bytes containing exactly one frame to a `Telegram`.
///
/// # Examples
///
/// ```rust
/// use dsmr_p1::frame_decoder::telegram_from_bytes;
///
/// let tgram = telegram_from_bytes(b"/XXX5ABC\r\n\r\n0-0:1.0.0(210101120000S)\r\n!337B\r\n").unwrap();
///
/// assert_eq!("ABC", tgram.identifier());
/// assert_eq!(Some("(210101120000S)"), tgram.get("0-0:1.0.0"));
/// ```
pub fn telegram_from_bytes(buf: &[u8]) -> DecodeResult<Telegram> {
    check_format(buf)?;
    verify_checksum(buf)?;

    let trailer = trailer_offset(buf.len());

    let identifier_len = find_subslice(&buf[IDENTIFIER_OFFSET..trailer], IDENTIFIER_TERMINATOR)
        .ok_or(DecodeError::MissingIdentifierTerminator)?;
    let identifier_end = IDENTIFIER_OFFSET + identifier_len;

    let fields = fields_from_bytes(buf, identifier_end + IDENTIFIER_TERMINATOR.len(), trailer)?;

    Ok(Telegram::new(
        text(&buf[1..VERSION_OFFSET]),
        text(&buf[IDENTIFIER_OFFSET..identifier_end]),
        fields,
    ))
}

/// Returns whether the slice of bytes begins like a frame.
pub fn has_start_marker(buf: &[u8]) -> bool {
    buf.first() == Some(&START_MARKER)
}
