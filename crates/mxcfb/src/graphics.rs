//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] for [`Framebuffer`] so embedded-graphics
//! primitives render straight into the mapped display memory. The color
//! type is `Rgb565`, matching the 16-bit cells the EPDC exposes. Pixels
//! outside the visible resolution are ignored, per the `DrawTarget`
//! contract.

use core::convert::Infallible;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::raw::{RawData, RawU16},
    pixelcolor::Rgb565,
    Pixel,
};

use crate::device::Framebuffer;

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        let g = self.geometry();
        Size::new(g.xres, g.yres)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.size();
        for Pixel(Point { x, y }, color) in pixels {
            if x >= 0 && y >= 0 {
                let (x, y) = (x as u32, y as u32);
                if x < size.width && y < size.height {
                    if let Some(cell) = self.pixel(x, y) {
                        *cell = RawU16::from(color).into_inner();
                    }
                }
            }
        }
        Ok(())
    }
}
