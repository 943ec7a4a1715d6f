//! Frame conversion for the display surface.
//!
//! This is the single conversion point in the pipeline: frames declare their
//! channel order and come out as RGB display images with stride 3 * width.

use crate::errors::CameraError;
use crate::types::{CameraFrame, ChannelOrder, DisplayImage};

/// Convert a captured frame into an RGB image descriptor the display can
/// paint directly.
///
/// Rejects buffers whose length does not match the declared dimensions, so a
/// short read from the device skips one repaint instead of panicking.
pub fn to_display_image(frame: &CameraFrame) -> Result<DisplayImage, CameraError> {
    let expected = frame.expected_len();
    if frame.data.len() != expected {
        return Err(CameraError::CaptureError(format!(
            "frame buffer is {} bytes, expected {} for {}x{}",
            frame.data.len(),
            expected,
            frame.width,
            frame.height
        )));
    }

    let mut pixels = frame.data.clone();
    if frame.order == ChannelOrder::Bgr {
        for pixel in pixels.chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }
    }

    Ok(DisplayImage {
        pixels,
        width: frame.width,
        height: frame.height,
        stride: frame.width * 3,
    })
}
