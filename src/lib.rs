//! Rovercam: live camera preview with directional controls.
//!
//! A single-window viewer for Raspberry Pi rovers: a fixed-period scheduler
//! captures one frame per tick from the camera, converts it to the display's
//! RGB convention, and paints it, while four directional buttons (and the
//! arrow keys, routed through the same path) emit direction notices that
//! future motion control can attach to.
//!
//! Everything runs cooperatively on the GUI event loop; the capture call
//! deliberately blocks that thread, so there is no background capture
//! thread and no locking.

pub mod app;
pub mod capture;
pub mod config;
pub mod controls;
pub mod errors;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod testing;
pub mod types;

// Re-exports for convenience
pub use errors::CameraError;
pub use session::{CameraSession, CameraSource};
pub use types::{CameraFormat, CameraFrame, ChannelOrder, Direction, DisplayImage};

/// Initialize logging for the viewer
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "rovercam=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
