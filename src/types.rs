//! Core types for the preview pipeline.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel ordering of a frame's pixel bytes.
///
/// Every frame declares its order explicitly; the display convention is RGB
/// and `render::to_display_image` is the single conversion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// One of the four directional controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Requested capture format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFormat {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub format_type: String,
}

impl CameraFormat {
    pub fn new(width: u32, height: u32, fps: u32) -> Self {
        Self {
            width,
            height,
            fps,
            format_type: "RGB8".to_string(),
        }
    }

    /// 1280x720 @ 30fps
    pub fn standard() -> Self {
        Self::new(1280, 720, 30)
    }

    /// 640x480 @ 30fps, the preview default
    pub fn low() -> Self {
        Self::new(640, 480, 30)
    }

    pub fn with_format_type(mut self, format_type: String) -> Self {
        self.format_type = format_type;
        self
    }
}

/// One captured frame: raw pixel bytes plus dimensions and channel order.
///
/// Row-major, 3 bytes per pixel. Created per capture call, consumed
/// synchronously by the conversion step, never retained past one tick.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub order: ChannelOrder,
    pub device_id: String,
    pub timestamp: DateTime<Local>,
}

impl CameraFrame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, device_id: String) -> Self {
        Self {
            data,
            width,
            height,
            order: ChannelOrder::Rgb,
            device_id,
            timestamp: Local::now(),
        }
    }

    pub fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    /// Byte count a well-formed buffer must have: 3 * width * height.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// Image descriptor handed to the display surface.
///
/// Pixels are RGB, row-major, with `stride == 3 * width` and
/// `pixels.len() == stride * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
}
