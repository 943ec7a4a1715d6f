//! Synthetic camera sources for offline testing.
//!
//! These backends stand in for real hardware so the session and pipeline can
//! be exercised without a camera attached.

use crate::errors::CameraError;
use crate::session::CameraSource;
use crate::types::{CameraFormat, CameraFrame, ChannelOrder};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

/// Generate a gradient test frame with content that varies per frame number.
pub fn synthetic_video_frame(frame_number: u64, width: u32, height: u32) -> CameraFrame {
    let mut data = vec![0u8; (width * height * 3) as usize];

    let base = (frame_number % 256) as u8;
    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 3) as usize;
            data[idx] = base.wrapping_add((x % 256) as u8);
            data[idx + 1] = base.wrapping_add((y % 256) as u8);
            data[idx + 2] = base.wrapping_add(((x + y) % 256) as u8);
        }
    }

    CameraFrame::new(data, width, height, "synthetic".to_string())
}

/// A source that returns the same solid-color frame on every capture.
///
/// Counters are shared so tests can observe them after the session takes
/// ownership of the boxed source.
pub struct SolidColorCamera {
    color: [u8; 3],
    order: ChannelOrder,
    format: CameraFormat,
    started: bool,
    captures: Arc<AtomicU64>,
    stops: Arc<AtomicU32>,
}

impl SolidColorCamera {
    pub fn new(color: [u8; 3], order: ChannelOrder) -> Self {
        Self {
            color,
            order,
            format: CameraFormat::low(),
            started: false,
            captures: Arc::new(AtomicU64::new(0)),
            stops: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn capture_counter(&self) -> Arc<AtomicU64> {
        self.captures.clone()
    }

    pub fn stop_counter(&self) -> Arc<AtomicU32> {
        self.stops.clone()
    }
}

impl CameraSource for SolidColorCamera {
    fn configure(&mut self, format: &CameraFormat) -> Result<(), CameraError> {
        self.format = format.clone();
        Ok(())
    }

    fn start(&mut self) -> Result<(), CameraError> {
        self.started = true;
        Ok(())
    }

    fn capture(&mut self) -> Result<CameraFrame, CameraError> {
        if !self.started {
            return Err(CameraError::StreamError("source not started".to_string()));
        }
        self.captures.fetch_add(1, Ordering::Relaxed);

        let pixels = (self.format.width * self.format.height) as usize;
        let data: Vec<u8> = self
            .color
            .iter()
            .copied()
            .cycle()
            .take(pixels * 3)
            .collect();

        Ok(
            CameraFrame::new(data, self.format.width, self.format.height, "synthetic".to_string())
                .with_order(self.order),
        )
    }

    fn stop(&mut self) -> Result<(), CameraError> {
        self.started = false;
        self.stops.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn device_id(&self) -> &str {
        "synthetic"
    }
}

/// A source whose every capture fails, for skip-a-tick error handling tests.
#[derive(Default)]
pub struct FailingCamera;

impl FailingCamera {
    pub fn new() -> Self {
        Self
    }
}

impl CameraSource for FailingCamera {
    fn configure(&mut self, _format: &CameraFormat) -> Result<(), CameraError> {
        Ok(())
    }

    fn start(&mut self) -> Result<(), CameraError> {
        Ok(())
    }

    fn capture(&mut self) -> Result<CameraFrame, CameraError> {
        Err(CameraError::CaptureError("no frame available".to_string()))
    }

    fn stop(&mut self) -> Result<(), CameraError> {
        Ok(())
    }

    fn device_id(&self) -> &str {
        "failing"
    }
}

/// A source that is missing at configure time, for fatal-startup tests.
pub struct UnavailableCamera;

impl CameraSource for UnavailableCamera {
    fn configure(&mut self, _format: &CameraFormat) -> Result<(), CameraError> {
        Err(CameraError::InitializationError(
            "no camera device found".to_string(),
        ))
    }

    fn start(&mut self) -> Result<(), CameraError> {
        Err(CameraError::InitializationError(
            "no camera device found".to_string(),
        ))
    }

    fn capture(&mut self) -> Result<CameraFrame, CameraError> {
        Err(CameraError::CaptureError("no camera device".to_string()))
    }

    fn stop(&mut self) -> Result<(), CameraError> {
        Ok(())
    }

    fn device_id(&self) -> &str {
        "unavailable"
    }
}
