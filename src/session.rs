//! Camera session lifecycle.
//!
//! A session owns one camera source for the lifetime of the window. The
//! state machine guarantees that `stop` is a safe no-op after the first call
//! and that no capture can happen once the session is stopped.

use crate::errors::CameraError;
use crate::types::{CameraFormat, CameraFrame};

/// Contract a camera backend must satisfy.
///
/// `capture` is synchronous and blocks the caller until a frame is available;
/// the viewer deliberately runs it on the GUI thread.
pub trait CameraSource {
    fn configure(&mut self, format: &CameraFormat) -> Result<(), CameraError>;
    fn start(&mut self) -> Result<(), CameraError>;
    fn capture(&mut self) -> Result<CameraFrame, CameraError>;
    fn stop(&mut self) -> Result<(), CameraError>;
    fn device_id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Configured,
    Started,
    Stopped,
}

pub struct CameraSession {
    source: Box<dyn CameraSource>,
    state: SessionState,
}

impl CameraSession {
    /// Configure the source. Fails when the device is unavailable, which the
    /// caller treats as a fatal startup error.
    pub fn open(
        mut source: Box<dyn CameraSource>,
        format: &CameraFormat,
    ) -> Result<Self, CameraError> {
        source.configure(format)?;
        log::info!(
            "camera session open: device {} at {}x{}",
            source.device_id(),
            format.width,
            format.height
        );
        Ok(Self {
            source,
            state: SessionState::Configured,
        })
    }

    pub fn start(&mut self) -> Result<(), CameraError> {
        match self.state {
            SessionState::Started => Err(CameraError::StreamError(
                "session already started".to_string(),
            )),
            SessionState::Stopped => {
                Err(CameraError::StreamError("session is stopped".to_string()))
            }
            SessionState::Configured => {
                self.source.start()?;
                self.state = SessionState::Started;
                log::info!("camera session started");
                Ok(())
            }
        }
    }

    /// Capture one frame. Errors once the session is stopped, so a tick that
    /// races window teardown cannot touch a stopped device.
    pub fn capture_frame(&mut self) -> Result<CameraFrame, CameraError> {
        if self.state != SessionState::Started {
            return Err(CameraError::StreamError(
                "session is not started".to_string(),
            ));
        }
        self.source.capture()
    }

    /// Stop the session. Idempotent: the source's `stop` runs at most once,
    /// and repeat calls are no-ops.
    pub fn stop(&mut self) {
        if self.state == SessionState::Started {
            if let Err(e) = self.source.stop() {
                log::warn!("camera stop failed: {e}");
            }
        }
        if self.state != SessionState::Stopped {
            self.state = SessionState::Stopped;
            log::info!("camera session stopped");
        }
    }

    pub fn is_started(&self) -> bool {
        self.state == SessionState::Started
    }

    pub fn device_id(&self) -> &str {
        self.source.device_id()
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stop();
    }
}
