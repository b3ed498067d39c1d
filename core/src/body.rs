//! Request payloads that can be hashed and then sent.

use std::fmt::Debug;
use std::io::Cursor;
use std::io::Read;

use bytes::Bytes;

use crate::Error;
use crate::Result;

/// SignableBody is a request body whose payload can be buffered for hashing.
///
/// After `buffer` returns, successfully or not, the body must still yield its full
/// payload from the start when the request is sent.
pub trait SignableBody {
    /// Buffer the complete payload.
    fn buffer(&mut self) -> Result<Bytes>;
}

impl SignableBody for Bytes {
    fn buffer(&mut self) -> Result<Bytes> {
        Ok(self.clone())
    }
}

impl SignableBody for Vec<u8> {
    fn buffer(&mut self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(self))
    }
}

impl SignableBody for String {
    fn buffer(&mut self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(self.as_bytes()))
    }
}

impl SignableBody for &'static str {
    fn buffer(&mut self) -> Result<Bytes> {
        Ok(Bytes::from_static(self.as_bytes()))
    }
}

impl SignableBody for &'static [u8] {
    fn buffer(&mut self) -> Result<Bytes> {
        Ok(Bytes::from_static(self))
    }
}

impl SignableBody for () {
    fn buffer(&mut self) -> Result<Bytes> {
        Ok(Bytes::new())
    }
}

/// ReaderBody turns a one-shot reader into a replayable body.
///
/// The first call to [`SignableBody::buffer`] drains the reader into memory; from then on
/// the body replays that buffer. If the reader fails midway, the bytes read so far are
/// kept in front of the unread rest.
pub struct ReaderBody<R> {
    state: State<R>,
}

enum State<R> {
    Streaming { head: Cursor<Vec<u8>>, reader: R },
    Buffered(Cursor<Bytes>),
}

impl<R: Read> ReaderBody<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            state: State::Streaming {
                head: Cursor::new(Vec::new()),
                reader,
            },
        }
    }

    /// Returns true once the payload lives in memory.
    pub fn is_buffered(&self) -> bool {
        matches!(self.state, State::Buffered(_))
    }
}

impl<R> Debug for ReaderBody<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            State::Streaming { head, .. } => f
                .debug_struct("ReaderBody")
                .field("buffered", &false)
                .field("head_len", &head.get_ref().len())
                .finish(),
            State::Buffered(buf) => f
                .debug_struct("ReaderBody")
                .field("buffered", &true)
                .field("len", &buf.get_ref().len())
                .finish(),
        }
    }
}

impl<R: Read> SignableBody for ReaderBody<R> {
    fn buffer(&mut self) -> Result<Bytes> {
        match &mut self.state {
            State::Buffered(buf) => {
                buf.set_position(0);
                Ok(buf.get_ref().clone())
            }
            State::Streaming { head, reader } => {
                // Bytes kept from a failed attempt come first.
                head.set_position(0);
                let data = head.get_mut();
                if let Err(err) = reader.read_to_end(data) {
                    return Err(
                        Error::body_unreadable("failed to read request body for hashing")
                            .with_source(err),
                    );
                }

                let payload = Bytes::from(std::mem::take(data));
                self.state = State::Buffered(Cursor::new(payload.clone()));
                Ok(payload)
            }
        }
    }
}

impl<R: Read> Read for ReaderBody<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.state {
            State::Buffered(cursor) => cursor.read(buf),
            State::Streaming { head, reader } => {
                let n = head.read(buf)?;
                if n > 0 {
                    return Ok(n);
                }
                reader.read(buf)
            }
        }
    }
}
