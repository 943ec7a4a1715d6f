//! The viewer window: preview surface, control pad, lifecycle.

use crate::config::ViewerConfig;
use crate::controls::{ControlPad, BUTTON_ROW};
use crate::render;
use crate::scheduler::FrameScheduler;
use crate::session::CameraSession;
use egui::load::SizedTexture;
use std::time::Instant;

const PREVIEW_TEXTURE: &str = "camera-preview";

pub struct ViewerApp {
    session: CameraSession,
    scheduler: FrameScheduler,
    pad: ControlPad,
    texture: Option<egui::TextureHandle>,
    frame_size: Option<(u32, u32)>,
    shutting_down: bool,
}

impl ViewerApp {
    /// Expects a session that is already open and started.
    pub fn new(session: CameraSession, config: &ViewerConfig) -> Self {
        Self {
            session,
            scheduler: FrameScheduler::new(config.frame_interval()),
            pad: ControlPad::default(),
            texture: None,
            frame_size: None,
            shutting_down: false,
        }
    }

    /// One tick of the capture-and-render cycle: capture, convert, upload.
    /// A failed capture skips this repaint and leaves the scheduler running.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let frame = match self.session.capture_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("capture failed, skipping repaint: {e}");
                return;
            }
        };

        let image = match render::to_display_image(&frame) {
            Ok(image) => image,
            Err(e) => {
                log::warn!("dropping malformed frame: {e}");
                return;
            }
        };

        self.frame_size = Some((image.width, image.height));
        let color_image = egui::ColorImage::from_rgb(
            [image.width as usize, image.height as usize],
            &image.pixels,
        );

        match &mut self.texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture(PREVIEW_TEXTURE, color_image, egui::TextureOptions::LINEAR))
            }
        }
    }

    /// Stop the camera before the window close proceeds. Safe to hit more
    /// than once; the session's stop is idempotent.
    fn shutdown(&mut self) {
        self.shutting_down = true;
        self.session.stop();
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shutdown();
        }

        // Arrow keys go through the same activation path as the buttons.
        let mut pressed_keys = Vec::new();
        ctx.input(|i| {
            for key in [
                egui::Key::ArrowUp,
                egui::Key::ArrowDown,
                egui::Key::ArrowLeft,
                egui::Key::ArrowRight,
            ] {
                if i.key_pressed(key) {
                    pressed_keys.push(key);
                }
            }
        });
        for key in pressed_keys {
            self.pad.key_pressed(key);
        }

        if !self.shutting_down && self.scheduler.poll(Instant::now()) {
            self.refresh_preview(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.texture {
                Some(texture) => {
                    ui.image(SizedTexture::new(texture.id(), texture.size_vec2()));
                }
                None => {
                    ui.label("Waiting for first frame...");
                }
            }

            ui.horizontal(|ui| {
                for direction in BUTTON_ROW {
                    if ui.button(direction.label()).clicked() {
                        self.pad.press(direction);
                    }
                }
            });

            ui.horizontal(|ui| {
                if let Some((width, height)) = self.frame_size {
                    ui.label(format!("{}x{}", width, height));
                }
                if let Some(direction) = self.pad.last() {
                    ui.label(format!("last: {}", direction));
                }
            });
        });

        if !self.shutting_down {
            ctx.request_repaint_after(self.scheduler.time_until_due(Instant::now()));
        }
    }
}
