use rovercam::app::ViewerApp;
use rovercam::capture::NokhwaCamera;
use rovercam::config::ViewerConfig;
use rovercam::session::CameraSession;

fn main() -> eframe::Result<()> {
    rovercam::init_logging();

    let config = ViewerConfig::load_or_default();
    if let Err(e) = config.validate() {
        log::error!("invalid configuration: {e}");
        std::process::exit(2);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_position(config.window.position)
            .with_inner_size(config.window.size),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            // A missing camera is fatal: surface it as a startup failure
            // instead of an opaque crash on the first tick.
            let source = NokhwaCamera::new(config.camera.device_index);
            let mut session = CameraSession::open(Box::new(source), &config.capture_format())?;
            session.start()?;
            Ok(Box::new(ViewerApp::new(session, &config)))
        }),
    )
}
