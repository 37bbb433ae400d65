use std::fmt;

use thiserror::Error as ThisError;

/// The structural markers checked by the frame decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// The `/` at the start of every frame.
    Start,

    /// The fixed protocol version character `5` at offset 4.
    Version,

    /// The `!` introducing the checksum trailer.
    Trailer,

    /// The carriage return of the final line terminator.
    CarriageReturn,

    /// The line feed of the final line terminator.
    LineFeed,
}

impl Marker {
    /// The byte this marker is expected to be.
    pub fn expected(self) -> u8 {
        match self {
            Marker::Start => b'/',
            Marker::Version => b'5',
            Marker::Trailer => b'!',
            Marker::CarriageReturn => b'\r',
            Marker::LineFeed => b'\n',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Marker::Start => "start marker",
            Marker::Version => "version",
            Marker::Trailer => "trailer marker",
            Marker::CarriageReturn => "carriage return",
            Marker::LineFeed => "line feed",
        };
        write!(f, "{} {:?}", name, char::from(self.expected()))
    }
}

/// The reasons why a frame or a field value could not be decoded.
///
/// Every variant is local to one frame (or one field value): the stream that
/// produced it can still be processed further.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame is shorter than the smallest possible telegram.
    #[error("frame too short: {length} bytes (min 16)")]
    TooShort {
        /// Length of the rejected frame.
        length: usize,
    },

    /// One of the fixed framing bytes is wrong.
    #[error("malformed frame: expected {marker} at offset {position}, got 0x{found:02X}")]
    MalformedFrame {
        /// The marker that failed to match.
        marker: Marker,
        /// Offset of the checked byte.
        position: usize,
        /// The byte found instead.
        found: u8,
    },

    /// The trailer does not contain four uppercase hex digits.
    #[error("invalid checksum digit 0x{found:02X} at offset {position}")]
    InvalidChecksumDigits {
        /// Offset of the offending byte.
        position: usize,
        /// The offending byte.
        found: u8,
    },

    /// The transmitted checksum does not match the frame contents.
    #[error("checksum mismatch: parsed {expected:04X}, calculated {calculated:04X}")]
    ChecksumMismatch {
        /// Checksum transmitted in the trailer.
        expected: u16,
        /// Checksum calculated over the frame.
        calculated: u16,
    },

    /// The identification line is not followed by an empty line.
    #[error("identification line not terminated by an empty line")]
    MissingIdentifierTerminator,

    /// A data line without an opening parenthesis.
    #[error("malformed data line at offset {position}")]
    MalformedField {
        /// Offset of the start of the line.
        position: usize,
    },

    /// The last data line runs into the trailer without a line terminator.
    #[error("data line at offset {position} not terminated")]
    MissingFieldTerminator {
        /// Offset of the start of the line.
        position: usize,
    },

    /// The TST value ends in neither `S` nor `W`.
    #[error("unknown DST flag {found:?}, expected 'S' or 'W'")]
    UnknownDstFlag {
        /// The character found in place of the flag.
        found: char,
    },

    /// The TST value does not describe a valid point in time.
    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },
}

/// The result type of the decoding functions.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// A common error type for operations that read from a stream.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Reading from the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame was read but could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A common result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::{test_clone_derive, test_copy_derive, test_debug_derive, test_eq_derive};

    #[test]
    fn test_derived_impls() {
        let marker = Marker::Trailer;
        test_debug_derive(&marker);
        test_copy_derive(&marker);
        test_eq_derive(&marker);

        let error = DecodeError::TooShort { length: 3 };
        test_debug_derive(&error);
        test_clone_derive(&error);
        test_eq_derive(&error);
    }

    #[test]
    fn test_marker_expected() {
        assert_eq!(b'/', Marker::Start.expected());
        assert_eq!(b'5', Marker::Version.expected());
        assert_eq!(b'!', Marker::Trailer.expected());
        assert_eq!(b'\r', Marker::CarriageReturn.expected());
        assert_eq!(b'\n', Marker::LineFeed.expected());
    }

    #[test]
    fn test_display_fmt() {
        let error = DecodeError::MalformedFrame {
            marker: Marker::Version,
            position: 4,
            found: b'4',
        };
        assert_eq!(
            "malformed frame: expected version '5' at offset 4, got 0x34",
            format!("{}", error)
        );

        let error = DecodeError::ChecksumMismatch {
            expected: 0xE40F,
            calculated: 0x00AB,
        };
        assert_eq!(
            "checksum mismatch: parsed E40F, calculated 00AB",
            format!("{}", error)
        );

        let error = DecodeError::UnknownDstFlag { found: 'X' };
        assert_eq!("unknown DST flag 'X', expected 'S' or 'W'", format!("{}", error));
    }

    #[test]
    fn test_from_io_error() {
        use std::io;

        let cause = io::Error::new(io::ErrorKind::Other, "Other error");

        let error = Error::from(cause);

        assert_eq!("I/O error: Other error", format!("{}", error));
    }

    #[test]
    fn test_from_decode_error() {
        let error = Error::from(DecodeError::MissingIdentifierTerminator);

        match error {
            Error::Decode(DecodeError::MissingIdentifierTerminator) => {}
            other => panic!("Unexpected error {:?}", other),
        }
    }
}
