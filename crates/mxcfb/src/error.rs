//! Error types for the driver
//!
//! Every variant carries the originating system error where one exists, so
//! callers can still inspect the errno behind a failed open or mapping.

use std::io;

/// Errors that can occur while bringing up or addressing the framebuffer
///
/// All of these are fatal for the device: there is no degraded mode in
/// which rendering may proceed without an open, queried, and mapped
/// framebuffer.
#[derive(Debug)]
pub enum Error {
    /// Opening the framebuffer device node failed
    Open(io::Error),
    /// One of the screen-info queries (fixed or variable) failed
    Query(io::Error),
    /// Mapping the display memory into the process failed
    Map(io::Error),
    /// The device reports a pixel layout the 16-bit cell model cannot address
    ///
    /// Either the depth is not 16 bits per pixel, or the reported line
    /// length is too short to hold a virtual scanline.
    UnsupportedLayout {
        /// Reported depth in bits per pixel
        bits_per_pixel: u32,
        /// Reported scanline stride in bytes
        line_length: u32,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Open(e) => write!(f, "opening framebuffer device: {e}"),
            Error::Query(e) => write!(f, "querying screen info: {e}"),
            Error::Map(e) => write!(f, "mapping display memory: {e}"),
            Error::UnsupportedLayout {
                bits_per_pixel,
                line_length,
            } => write!(
                f,
                "unsupported pixel layout: {bits_per_pixel} bits/pixel, {line_length} bytes/line"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open(e) | Error::Query(e) | Error::Map(e) => Some(e),
            Error::UnsupportedLayout { .. } => None,
        }
    }
}
