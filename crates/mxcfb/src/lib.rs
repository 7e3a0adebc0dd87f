//! Driver for e-paper panels behind the i.MX EPDC framebuffer.
//!
//! The EPDC exposes its panel as a Linux framebuffer device with one
//! extension: redraws are not continuous but requested per region through
//! the `MXCFB_SEND_UPDATE` ioctl. This crate owns the device handle, maps
//! the pixel memory into the process, and provides checked access to the
//! 16-bit pixel cells plus the partial-refresh request itself.
//!
//! ```rust,ignore
//! use mxcfb::{Framebuffer, Rect};
//!
//! let mut fb = Framebuffer::open()?;
//! if let Some(cell) = fb.pixel(10, 10) {
//!     *cell = 0x0000;
//! }
//! fb.request_refresh(Rect { top: 10, left: 10, width: 1, height: 1 });
//! ```
//!
//! With the default `graphics` feature the [`Framebuffer`] also implements
//! `embedded_graphics_core::draw_target::DrawTarget` for `Rgb565`, so the
//! usual embedded-graphics primitives draw straight into display memory.

mod device;
mod error;
mod geometry;
#[cfg(feature = "graphics")]
mod graphics;
mod sys;
mod update;

pub use device::{Framebuffer, DEVICE_PATH};
pub use error::Error;
pub use geometry::{Geometry, Rect};
