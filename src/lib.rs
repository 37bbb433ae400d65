// This is part of dsmr-p1.rs.
// See README.md for details.

//! # dsmr-p1.rs
//!
//! A Rust library for reading and decoding the telegrams that DSMR smart meters send
//! over their P1 port.
//!
//!
//! ## Features
//!
//! - Splits a live or recorded P1 byte stream into frames, resynchronizing after line noise
//! - Validates frames including their CRC16 checksum
//! - Decodes frames into `Telegram` values (identification line plus data lines by field code)
//! - Decodes TST date-time stamps into UTC
//! - Encodes `Telegram` values back into frames
//!
//!
//! ## Not implemented
//!
//! - Interpretation of the individual data lines (values and units are kept as raw text)
//! - Management of the serial device itself
//!
//!
//! ## Examples
//!
//! ### Print the meter readings of a recorded P1 stream
//!
//! ```rust
//! use dsmr_p1::{Error, FrameReader};
//!
//! let recording: &[u8] = b"\
//!     noise/XXX5ABC\r\n\
//!     \r\n\
//!     0-0:1.0.0(210101120000S)\r\n\
//!     !337B\r\n\
//!     ";
//!
//! let mut fr = FrameReader::new(recording);
//!
//! let mut count = 0;
//! loop {
//!     match fr.read_telegram() {
//!         Ok(Some(tgram)) => {
//!             let timestamp = tgram.timestamp().unwrap().unwrap();
//!             assert_eq!("2021-01-01T10:00:00+00:00", timestamp.to_rfc3339());
//!
//!             for (code, value) in tgram.fields() {
//!                 println!("{}\t{}", code, value);
//!             }
//!             count += 1;
//!         }
//!         Ok(None) => break,
//!         // the leading noise ends up here, reading continues afterwards
//!         Err(Error::Decode(err)) => println!("skipped: {}", err),
//!         Err(err) => panic!("{}", err),
//!     }
//! }
//!
//! assert_eq!(1, count);
//! ```

#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub use chrono;

#[cfg(test)]
mod test_data;

#[cfg(test)]
mod test_utils;

pub mod utils;

mod error;
pub use error::{DecodeError, DecodeResult, Error, Marker, Result};

mod telegram;
pub use telegram::{Telegram, TIMESTAMP_FIELD_CODE};

pub mod timestamp;

pub mod frame_splitter;

pub mod frame_decoder;

pub mod frame_encoder;

mod frame_buffer;
pub use frame_buffer::FrameBuffer;

mod frame_reader;
pub use frame_reader::FrameReader;
