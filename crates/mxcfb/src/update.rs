//! Partial-refresh requests to the EPDC

use std::os::unix::io::AsRawFd;

use crate::device::Framebuffer;
use crate::geometry::Rect;
use crate::sys;

/// Marker carried by every update this driver issues; completion is
/// never awaited, so one value serves every request.
const UPDATE_MARKER: u32 = 1;

impl Framebuffer {
    /// Ask the controller to redraw `region` from the mapped buffer.
    ///
    /// The request uses the fixed policy this indicator needs: the GC16
    /// full-quality waveform, a full (non-differential) update of the
    /// region, and ambient temperature compensation. Fire-and-forget: the
    /// call returns once the controller has the request; it does not wait
    /// for the physical refresh and does not inspect the outcome.
    pub fn request_refresh(&self, region: Rect) {
        let update = sys::MxcfbUpdateData {
            update_region: region.into(),
            waveform_mode: sys::WAVEFORM_MODE_GC16,
            update_mode: sys::UPDATE_MODE_FULL,
            update_marker: UPDATE_MARKER,
            temp: sys::TEMP_USE_AMBIENT,
            flags: 0,
            alt_buffer_data: sys::MxcfbAltBufferData::default(),
        };
        log::trace!(
            "refresh request: {}x{} at ({}, {})",
            region.width,
            region.height,
            region.left,
            region.top
        );
        // SAFETY: update points at a properly laid out MxcfbUpdateData
        // that outlives the call.
        let _ = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                sys::MXCFB_SEND_UPDATE as _,
                &update as *const sys::MxcfbUpdateData,
            )
        };
    }
}
