#![allow(dead_code)]

use std::io::{Error, ErrorKind, Read, Result};

/// A `Read` implementation that hands out its bytes in chunks of limited size,
/// optionally failing every n-th call with `ErrorKind::Interrupted`.
pub struct ChunkedReader<'a> {
    bytes: &'a [u8],
    chunk_len: usize,
    interrupt_every: Option<usize>,
    read_call_count: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(bytes: &'a [u8], chunk_len: usize) -> ChunkedReader<'a> {
        ChunkedReader {
            bytes,
            chunk_len,
            interrupt_every: None,
            read_call_count: 0,
        }
    }

    pub fn interrupt_every(&mut self, n: usize) {
        self.interrupt_every = Some(n);
    }

    pub fn read_call_count(&self) -> usize {
        self.read_call_count
    }
}

impl<'a> Read for ChunkedReader<'a> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.read_call_count += 1;

        if let Some(n) = self.interrupt_every {
            if self.read_call_count % n == 0 {
                return Err(Error::new(ErrorKind::Interrupted, "interrupted"));
            }
        }

        let len = self.chunk_len.min(buf.len()).min(self.bytes.len());
        buf[..len].copy_from_slice(&self.bytes[..len]);
        self.bytes = &self.bytes[len..];
        Ok(len)
    }
}

pub fn to_hex_string(buf: &[u8]) -> String {
    buf.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<String>>()
        .concat()
}

pub fn test_debug_derive<T: std::fmt::Debug>(t: &T) {
    drop(format!("{t:?}"));
}

pub fn test_clone_derive<T: Clone>(t: &T) {
    drop(t.clone());
}

pub fn test_copy_derive<T: Copy>(t: &T) {
    let _ = *t;
}

pub fn test_partial_eq_derive<T: PartialEq>(t: &T) {
    drop(t.eq(t));
}

pub fn test_eq_derive<T: Eq>(t: &T) {
    drop(t.eq(t));
}

#[test]
fn test_chunked_reader() {
    let mut reader = ChunkedReader::new(&[0x01, 0x23, 0x45, 0x67, 0x89], 2);
    let mut buf = [0u8; 16];

    assert_eq!(2, reader.read(&mut buf).unwrap());
    assert_eq!(&[0x01, 0x23], &buf[..2]);
    assert_eq!(2, reader.read(&mut buf).unwrap());
    assert_eq!(&[0x45, 0x67], &buf[..2]);
    assert_eq!(1, reader.read(&mut buf).unwrap());
    assert_eq!(&[0x89], &buf[..1]);
    assert_eq!(0, reader.read(&mut buf).unwrap());
    assert_eq!(4, reader.read_call_count());

    let mut reader = ChunkedReader::new(&[0x01, 0x23, 0x45], 1);
    reader.interrupt_every(2);

    assert_eq!(1, reader.read(&mut buf).unwrap());
    assert_eq!(
        ErrorKind::Interrupted,
        reader.read(&mut buf).unwrap_err().kind()
    );
    assert_eq!(1, reader.read(&mut buf).unwrap());
}

#[test]
fn test_to_hex_string() {
    assert_eq!("", to_hex_string(&[]));
    assert_eq!("01234567", to_hex_string(&[0x01, 0x23, 0x45, 0x67]));
}
