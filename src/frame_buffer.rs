use std::ops::Deref;

use log::{debug, trace};

use crate::{
    error::DecodeResult,
    frame_decoder::{has_start_marker, telegram_from_bytes},
    frame_splitter::split_frame,
    telegram::Telegram,
};

/// A size-adapting buffer that supports splitting a P1 byte stream into frames.
///
/// Bytes are appended as they arrive. Each successful read hands out the next token
/// (a candidate frame or a span of noise) and drops it from the buffer before the
/// next read or append.
///
/// # Examples
///
/// ```rust
/// use dsmr_p1::FrameBuffer;
///
/// let mut fb = FrameBuffer::new();
/// fb.extend_from_slice(b"/XXX5\r\n\r\n!01");
///
/// assert_eq!(None, fb.read_frame(false));
///
/// fb.extend_from_slice(b"0B\r\n");
///
/// assert_eq!(Some(&b"/XXX5\r\n\r\n!4B22\r\n"[..]), fb.read_frame(false));
/// assert_eq!(None, fb.read_frame(true));
/// ```
#[derive(Debug, Default)]
pub struct FrameBuffer {
    buf: Vec<u8>,
    start: usize,
    offset: usize,
    previous_length: usize,
}

impl FrameBuffer {
    /// Constructs a `FrameBuffer`.
    pub fn new() -> FrameBuffer {
        FrameBuffer::default()
    }

    fn consume_previous(&mut self) {
        if self.previous_length > 0 {
            self.start += self.previous_length;
            self.offset += self.previous_length;
            self.previous_length = 0;
        }
    }

    /// Write bytes to the internal buffer.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.consume_previous();

        if self.start > 0 {
            drop(self.buf.drain(0..self.start));
            self.start = 0;
        }

        self.buf.extend_from_slice(bytes);
    }

    /// Try to peek length of the next token in the internal buffer.
    ///
    /// `at_eof` signals that no more bytes will be appended, so that an incomplete
    /// remainder is returned as a final token instead of waiting for more data.
    pub fn peek_length(&mut self, at_eof: bool) -> Option<usize> {
        self.consume_previous();

        match split_frame(&**self, at_eof) {
            (length, Some(_)) => Some(length),
            (_, None) => None,
        }
    }

    /// Try to read the next token from the internal buffer.
    pub fn read_frame(&mut self, at_eof: bool) -> Option<&[u8]> {
        let length = self.peek_length(at_eof)?;
        self.previous_length = length;

        let frame = &self.buf[self.start..self.start + length];
        if has_start_marker(frame) {
            trace!("frame of {} bytes at offset {}", length, self.offset);
        } else {
            trace!("{} bytes of noise at offset {}", length, self.offset);
        }
        Some(frame)
    }

    /// Try to read the next token from the internal buffer and decode it as a `Telegram`.
    pub fn read_telegram(&mut self, at_eof: bool) -> Option<DecodeResult<Telegram>> {
        let offset = self.offset;
        let result = self.read_frame(at_eof).map(telegram_from_bytes);
        if let Some(Err(ref err)) = result {
            debug!("rejected frame at offset {}: {}", offset, err);
        }
        result
    }

    /// Get amount of already read bytes.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the unread byte length of the internal buffer.
    pub fn len(&self) -> usize {
        self.buf.len() - self.start - self.previous_length
    }

    /// Whether all buffered bytes have been read.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Deref for FrameBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf[self.start + self.previous_length..]
    }
}
