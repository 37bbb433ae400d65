use std::io::{ErrorKind, Read};

use crate::{error::Result, frame_buffer::FrameBuffer, telegram::Telegram};

/// Allows reading frames and `Telegram` values from a `Read` trait object.
///
/// A frame that fails to decode is reported as an error, but it is consumed
/// nevertheless: the next call continues with the following frame.
///
/// # Examples
///
/// ```rust,no_run
/// use std::fs::File;
///
/// use dsmr_p1::{Error, FrameReader};
///
/// let file = File::open("/dev/ttyUSB0").unwrap();
///
/// let mut fr = FrameReader::new(file);
///
/// loop {
///     match fr.read_telegram() {
///         Ok(Some(tgram)) => println!("{}: {} fields", tgram.identifier(), tgram.len()),
///         Ok(None) => break,
///         Err(Error::Decode(err)) => eprintln!("skipping frame: {}", err),
///         Err(err) => panic!("{}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct FrameReader<R: Read> {
    buf: FrameBuffer,
    reader: R,
    at_eof: bool,
}

impl<R: Read> FrameReader<R> {
    /// Constructs a `FrameReader`.
    pub fn new(reader: R) -> FrameReader<R> {
        FrameReader {
            buf: FrameBuffer::new(),
            reader,
            at_eof: false,
        }
    }

    /// Consumes this `FrameReader`, returning its inner `Read` value.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_to_buf(&mut self) -> Result<usize> {
        let mut buf = [0u8; 4096];

        let size = loop {
            match self.reader.read(&mut buf) {
                Ok(size) => break size,
                Err(ref err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        };

        if size == 0 {
            self.at_eof = true;
        } else {
            self.buf.extend_from_slice(&buf[0..size]);
        }

        Ok(size)
    }

    /// Read from the stream until the next frame (or span of noise) is complete.
    ///
    /// Returns `None` once the stream has ended and all bytes have been handed out.
    pub fn read_frame(&mut self) -> Result<Option<&[u8]>> {
        loop {
            if self.buf.peek_length(self.at_eof).is_some() {
                break;
            }

            if self.at_eof {
                return Ok(None);
            }

            self.read_to_buf()?;
        }

        Ok(self.buf.read_frame(self.at_eof))
    }

    /// Read from the stream until the next frame is complete and decode it.
    pub fn read_telegram(&mut self) -> Result<Option<Telegram>> {
        loop {
            if let Some(result) = self.buf.read_telegram(self.at_eof) {
                break Ok(Some(result?));
            }

            if self.at_eof {
                break Ok(None);
            }

            self.read_to_buf()?;
        }
    }

    /// Get amount of bytes already handed out as frames or noise.
    pub fn offset(&self) -> usize {
        self.buf.offset()
    }
}

impl<R: Read> AsRef<R> for FrameReader<R> {
    fn as_ref(&self) -> &R {
        &self.reader
    }
}

impl<R: Read> AsMut<R> for FrameReader<R> {
    fn as_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}
