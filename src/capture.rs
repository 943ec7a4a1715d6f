//! nokhwa-backed camera source.
//!
//! Uses the blocking `Camera` API: one `frame()` call per scheduler tick on
//! the GUI thread, matching the viewer's cooperative model. On the Pi this
//! goes through the native V4L2 backend.

use crate::errors::CameraError;
use crate::session::CameraSource;
use crate::types::{CameraFormat, CameraFrame};
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{
        CameraFormat as NativeFormat, CameraIndex, FrameFormat, RequestedFormat,
        RequestedFormatType, Resolution,
    },
    Camera,
};

pub struct NokhwaCamera {
    camera: Option<Camera>,
    device_index: u32,
    device_id: String,
}

impl NokhwaCamera {
    pub fn new(device_index: u32) -> Self {
        Self {
            camera: None,
            device_index,
            device_id: device_index.to_string(),
        }
    }
}

impl CameraSource for NokhwaCamera {
    fn configure(&mut self, format: &CameraFormat) -> Result<(), CameraError> {
        let native = NativeFormat::new(
            Resolution::new(format.width, format.height),
            FrameFormat::MJPEG,
            format.fps,
        );
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(native));

        let camera = Camera::new(CameraIndex::Index(self.device_index), requested).map_err(
            |e| {
                CameraError::InitializationError(format!(
                    "Failed to open camera {}: {}",
                    self.device_index, e
                ))
            },
        )?;

        self.camera = Some(camera);
        Ok(())
    }

    fn start(&mut self) -> Result<(), CameraError> {
        let camera = self.camera.as_mut().ok_or_else(|| {
            CameraError::StreamError("camera not configured".to_string())
        })?;
        camera.open_stream().map_err(|e| {
            CameraError::InitializationError(format!("Failed to start stream: {}", e))
        })
    }

    fn capture(&mut self) -> Result<CameraFrame, CameraError> {
        let camera = self.camera.as_mut().ok_or_else(|| {
            CameraError::StreamError("camera not configured".to_string())
        })?;

        let buffer = camera
            .frame()
            .map_err(|e| CameraError::CaptureError(format!("Failed to capture frame: {}", e)))?;

        // Decoding normalizes whatever the device delivered (MJPEG, YUYV)
        // into RGB, so frames from this backend carry the default Rgb order.
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::CaptureError(format!("Failed to decode frame: {}", e)))?;

        let (width, height) = (decoded.width(), decoded.height());
        Ok(CameraFrame::new(
            decoded.into_raw(),
            width,
            height,
            self.device_id.clone(),
        ))
    }

    fn stop(&mut self) -> Result<(), CameraError> {
        let camera = self.camera.as_mut().ok_or_else(|| {
            CameraError::StreamError("camera not configured".to_string())
        })?;
        camera.stop_stream().map_err(|e| {
            CameraError::InitializationError(format!("Failed to stop stream: {}", e))
        })
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }
}
