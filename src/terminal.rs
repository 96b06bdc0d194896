//! Controlling terminal size query.

use std::io;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

/// Query the size of the terminal attached to stdout.
///
/// # Errors
/// Returns an error if stdout is not a terminal or reports a zero size.
#[cfg(unix)]
pub fn size() -> io::Result<TermSize> {
    // SAFETY: winsize is plain old data and TIOCGWINSZ only writes into it.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if ret != 0 {
        return Err(io::Error::last_os_error());
    }
    if ws.ws_col == 0 || ws.ws_row == 0 {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "terminal reported zero size",
        ));
    }
    Ok(TermSize {
        cols: ws.ws_col,
        rows: ws.ws_row,
    })
}

#[cfg(not(unix))]
pub fn size() -> io::Result<TermSize> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "terminal size query not supported on this platform",
    ))
}
