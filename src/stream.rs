//! Unbuffered handles on the process's standard streams.
//!
//! `std::io::stdin()` sits behind an 8 KiB `BufReader` and `stdout()` behind a
//! `LineWriter`, so neither is usable for a real-time event pipe. Instead we
//! duplicate fd 0 / fd 1 into plain `File`s, where every `read`/`write` call is
//! exactly one system call.

use std::fs::File;
use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, OwnedFd};

/// Returns an unbuffered, blocking handle on standard input.
pub fn unbuffered_stdin() -> io::Result<File> {
    unbuffered(io::stdin().as_fd())
}

/// Returns an unbuffered, blocking handle on standard output.
pub fn unbuffered_stdout() -> io::Result<File> {
    unbuffered(io::stdout().as_fd())
}

fn unbuffered(fd: BorrowedFd<'_>) -> io::Result<File> {
    let owned: OwnedFd = fd.try_clone_to_owned()?;
    set_blocking(&owned)?;
    Ok(File::from(owned))
}

/// Clears `O_NONBLOCK` so reads wait for the next record instead of failing
/// with `EAGAIN`.
fn set_blocking(fd: &impl AsRawFd) -> io::Result<()> {
    let raw = fd.as_raw_fd();
    // SAFETY: `raw` is a valid open descriptor owned by the caller for the
    // duration of this call; F_GETFL/F_SETFL do not touch memory.
    let flags = unsafe { libc::fcntl(raw, libc::F_GETFL) };
    if flags < 0 {
        return Err(io::Error::last_os_error());
    }
    if flags & libc::O_NONBLOCK != 0 {
        // SAFETY: same descriptor as above; F_SETFL only takes an int argument.
        let res = unsafe { libc::fcntl(raw, libc::F_SETFL, flags & !libc::O_NONBLOCK) };
        if res < 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}
