//! Screen geometry and damage rectangles

use crate::error::Error;
use crate::sys;

/// Bytes per pixel cell; the EPDC panels this driver targets run RGB565.
pub(crate) const CELL_BYTES: u32 = 2;

/// An axis-aligned damage rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// First column to the right of the rect.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// First row below the rect.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Smallest rect covering both `self` and `other`.
    ///
    /// This is the coalescing primitive for damage tracking: merge the
    /// regions touched by several draws and issue one refresh request for
    /// the result.
    pub fn union(&self, other: &Rect) -> Rect {
        let top = self.top.min(other.top);
        let left = self.left.min(other.left);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect {
            top,
            left,
            width: right - left,
            height: bottom - top,
        }
    }
}

impl From<Rect> for sys::MxcfbRect {
    fn from(rect: Rect) -> Self {
        sys::MxcfbRect {
            top: rect.top,
            left: rect.left,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Device geometry as reported by the framebuffer, immutable after open.
///
/// `line_length` is the device-reported stride between scanlines and may
/// exceed `xres_virtual * 2` due to padding; addressing must always go
/// through it rather than recompute a stride from the resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub bits_per_pixel: u32,
    /// Stride between scanlines in bytes.
    pub line_length: u32,
}

impl Geometry {
    pub(crate) fn from_screeninfo(
        fixed: &sys::FbFixScreeninfo,
        var: &sys::FbVarScreeninfo,
    ) -> Result<Self, Error> {
        let geometry = Geometry {
            xres: var.xres,
            yres: var.yres,
            xres_virtual: var.xres_virtual,
            yres_virtual: var.yres_virtual,
            bits_per_pixel: var.bits_per_pixel,
            line_length: fixed.line_length,
        };
        // The cell model requires 16-bit pixels and a stride wide enough
        // for a full virtual scanline.
        if geometry.bits_per_pixel != CELL_BYTES * 8
            || u64::from(geometry.line_length) * 8
                < u64::from(geometry.xres_virtual) * u64::from(geometry.bits_per_pixel)
            || geometry.xres_virtual == 0
            || geometry.yres_virtual == 0
        {
            return Err(Error::UnsupportedLayout {
                bits_per_pixel: geometry.bits_per_pixel,
                line_length: geometry.line_length,
            });
        }
        Ok(geometry)
    }

    /// Pixel cells per scanline, including any padding cells.
    pub fn cells_per_line(&self) -> u32 {
        self.line_length / CELL_BYTES
    }

    /// Length of the mappable pixel buffer in bytes.
    pub fn buffer_len(&self) -> usize {
        self.xres_virtual as usize * self.yres_virtual as usize * self.bits_per_pixel as usize / 8
    }

    /// Linear cell index for `(x, y)`, or `None` outside the virtual
    /// resolution.
    pub fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.xres_virtual || y >= self.yres_virtual {
            return None;
        }
        Some(y as usize * self.cells_per_line() as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: u32, left: u32, width: u32, height: u32) -> Rect {
        Rect {
            top,
            left,
            width,
            height,
        }
    }

    #[test]
    fn union_covers_both_inputs() {
        let a = rect(10, 20, 30, 40);
        let b = rect(5, 60, 10, 10);
        let u = a.union(&b);
        assert!(u.top <= a.top && u.left <= a.left);
        assert!(u.right() >= a.right() && u.bottom() >= a.bottom());
        assert!(u.top <= b.top && u.left <= b.left);
        assert!(u.right() >= b.right() && u.bottom() >= b.bottom());
    }

    #[test]
    fn union_is_minimal() {
        let a = rect(10, 20, 30, 40);
        let b = rect(5, 60, 10, 10);
        let u = a.union(&b);
        // Each edge of the union must coincide with an edge of an input;
        // otherwise a smaller covering rect would exist.
        assert_eq!(u.top, a.top.min(b.top));
        assert_eq!(u.left, a.left.min(b.left));
        assert_eq!(u.right(), a.right().max(b.right()));
        assert_eq!(u.bottom(), a.bottom().max(b.bottom()));
    }

    #[test]
    fn union_of_nested_rects_is_outer() {
        let outer = rect(0, 0, 100, 100);
        let inner = rect(10, 10, 5, 5);
        assert_eq!(outer.union(&inner), outer);
        assert_eq!(inner.union(&outer), outer);
    }

    #[test]
    fn union_with_self_is_identity() {
        let a = rect(3, 7, 11, 13);
        assert_eq!(a.union(&a), a);
    }

    fn padded_geometry() -> Geometry {
        // 8 pixels across, but a 20-byte stride: 10 cells per line.
        Geometry {
            xres: 8,
            yres: 4,
            xres_virtual: 8,
            yres_virtual: 4,
            bits_per_pixel: 16,
            line_length: 20,
        }
    }

    #[test]
    fn cell_index_uses_device_stride() {
        let g = padded_geometry();
        assert_eq!(g.cells_per_line(), 10);
        assert_eq!(g.cell_index(0, 0), Some(0));
        assert_eq!(g.cell_index(7, 0), Some(7));
        assert_eq!(g.cell_index(0, 1), Some(10));
        assert_eq!(g.cell_index(7, 3), Some(37));
    }

    #[test]
    fn cell_index_rejects_out_of_range() {
        let g = padded_geometry();
        assert_eq!(g.cell_index(8, 0), None);
        assert_eq!(g.cell_index(0, 4), None);
        assert_eq!(g.cell_index(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn cell_index_never_collides_in_range() {
        let g = padded_geometry();
        let mut seen = std::collections::HashSet::new();
        for y in 0..g.yres_virtual {
            for x in 0..g.xres_virtual {
                let index = g.cell_index(x, y).unwrap();
                assert!(seen.insert(index), "({x}, {y}) aliases cell {index}");
            }
        }
    }

    #[test]
    fn screeninfo_validation_rejects_bad_layouts() {
        let mut fixed = sys::FbFixScreeninfo::default();
        let mut var = sys::FbVarScreeninfo::default();
        fixed.line_length = 1600;
        var.xres = 800;
        var.yres = 600;
        var.xres_virtual = 800;
        var.yres_virtual = 600;
        var.bits_per_pixel = 16;
        assert!(Geometry::from_screeninfo(&fixed, &var).is_ok());

        var.bits_per_pixel = 32;
        assert!(matches!(
            Geometry::from_screeninfo(&fixed, &var),
            Err(Error::UnsupportedLayout { .. })
        ));

        var.bits_per_pixel = 16;
        fixed.line_length = 100; // shorter than a scanline
        assert!(matches!(
            Geometry::from_screeninfo(&fixed, &var),
            Err(Error::UnsupportedLayout { .. })
        ));
    }
}
