use crate::error::{Error, Result};
use crate::stream;
use input_linux_sys::{input_event, EV_ABS, EV_KEY, EV_MSC, EV_REL, MSC_SCAN};
use std::fs::File;
use std::io::{self, Read, Write};
use std::mem::size_of;

/// Size of one native `input_event` record on the wire.
pub const EVENT_SIZE: usize = size_of::<input_event>();

/// Reinterprets exactly one record's worth of bytes as an `input_event`.
pub fn decode(buf: &[u8; EVENT_SIZE]) -> input_event {
    // SAFETY: `input_event` is plain old data and `buf` holds exactly
    // `size_of::<input_event>()` bytes. The buffer may be unaligned.
    unsafe { std::ptr::read_unaligned(buf.as_ptr() as *const input_event) }
}

/// Native byte representation of one record.
pub fn encode(event: &input_event) -> [u8; EVENT_SIZE] {
    let mut buf = [0u8; EVENT_SIZE];
    // SAFETY: `event` is a valid input_event; we copy its raw bytes.
    let src: &[u8] =
        unsafe { std::slice::from_raw_parts(event as *const _ as *const u8, EVENT_SIZE) };
    buf.copy_from_slice(src);
    buf
}

/// Reads whole `input_event` records from a byte stream.
pub struct EventReader<R> {
    inner: R,
}

impl EventReader<File> {
    /// Reader over an unbuffered, blocking duplicate of stdin.
    pub fn stdin() -> Result<Self> {
        stream::unbuffered_stdin().map(Self::new).map_err(Error::Setup)
    }
}

impl<R: Read> EventReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads a single record. Returns `Ok(None)` on a clean end of stream.
    ///
    /// A stream that ends after some but not all bytes of a record is an
    /// error: the producer never closes mid-record under correct operation.
    pub fn read_event(&mut self) -> Result<Option<input_event>> {
        let mut buf = [0u8; EVENT_SIZE];
        let mut filled = 0;
        while filled < EVENT_SIZE {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Read(e)),
            }
        }
        match filled {
            0 => Ok(None),
            EVENT_SIZE => Ok(Some(decode(&buf))),
            n => Err(Error::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("stream ended inside a record ({n} of {EVENT_SIZE} bytes)"),
            ))),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Writes whole `input_event` records to a byte stream.
pub struct EventWriter<W> {
    inner: W,
}

impl EventWriter<File> {
    /// Writer over an unbuffered, blocking duplicate of stdout.
    pub fn stdout() -> Result<Self> {
        stream::unbuffered_stdout().map(Self::new).map_err(Error::Setup)
    }
}

impl<W: Write> EventWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one record with a single `write` call. Anything short of the full
    /// record is fatal; the remainder is never retried.
    pub fn write_event(&mut self, event: &input_event) -> Result<()> {
        let buf = encode(event);
        loop {
            match self.inner.write(&buf) {
                Ok(EVENT_SIZE) => return Ok(()),
                Ok(n) => {
                    return Err(Error::Write(io::Error::new(
                        io::ErrorKind::WriteZero,
                        format!("short write ({n} of {EVENT_SIZE} bytes)"),
                    )))
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Write(e)),
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Calculates the event timestamp in microseconds from its timeval.
///
/// Returns `None` when the timeval does not fit in a `u64` microsecond count.
/// Negative fields count as zero.
#[inline]
pub fn event_microseconds(event: &input_event) -> Option<u64> {
    let secs = u64::try_from(event.time.tv_sec.max(0)).ok()?;
    let usecs = u64::try_from(event.time.tv_usec.max(0)).ok()?;
    secs.checked_mul(1_000_000)?.checked_add(usecs)
}

#[inline]
pub fn is_key_event(event: &input_event) -> bool {
    i32::from(event.type_) == EV_KEY
}

/// Relative or absolute axis motion.
#[inline]
pub fn is_axis_event(event: &input_event) -> bool {
    matches!(i32::from(event.type_), EV_REL | EV_ABS)
}

/// `EV_MSC`/`MSC_SCAN`: the raw hardware scan code that accompanies a key event.
#[inline]
pub fn is_scan_code_echo(event: &input_event) -> bool {
    i32::from(event.type_) == EV_MSC && i32::from(event.code) == MSC_SCAN
}
