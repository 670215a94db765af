//! Headless gesture replay.
//!
//! Feeds a scripted pointer session through the input router and camera
//! controller and logs every uniform batch the camera publishes. Pass a
//! TOML options file as the first argument to try out a preset.
//!
//! ```text
//! RUST_LOG=info arcview presets/orbit.toml
//! ```

use std::path::Path;

use arcview::camera::CameraController;
use arcview::input::{InputEvent, InputRouter, MouseButton, Viewport};
use arcview::options::Options;
use arcview::uniforms::{UniformBatch, UniformSink};
use arcview::ArcviewError;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// Sink that writes each batch to the log.
struct LogSink;

impl UniformSink for LogSink {
    fn submit(&mut self, batch: UniformBatch) {
        log::info!(
            "#{} eye={} view_dir={} up={}",
            batch.transform_seq,
            batch.view.w_axis.truncate(),
            batch.view_dir,
            batch.up
        );
        for (slot, value) in batch.iter() {
            log::debug!("  {} = {value:?}", slot.name());
        }
    }
}

fn load_options() -> Result<Options, ArcviewError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded options from '{path}'");
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

fn script() -> Vec<InputEvent> {
    let mut events = vec![InputEvent::ButtonDown {
        x: 320.0,
        y: 240.0,
        button: MouseButton::Primary,
    }];
    for step in 1..=8 {
        let t = step as f32 / 8.0;
        events.push(InputEvent::CursorMoved {
            x: 320.0 + 160.0 * t,
            y: 240.0 - 60.0 * t,
            button: Some(MouseButton::Primary),
        });
    }
    events.push(InputEvent::ButtonUp {
        x: 480.0,
        y: 180.0,
        button: MouseButton::Primary,
    });

    events.push(InputEvent::ButtonDown {
        x: 320.0,
        y: 240.0,
        button: MouseButton::Secondary,
    });
    events.push(InputEvent::CursorMoved {
        x: 280.0,
        y: 260.0,
        button: Some(MouseButton::Secondary),
    });
    events.push(InputEvent::ButtonUp {
        x: 280.0,
        y: 260.0,
        button: MouseButton::Secondary,
    });

    events.push(InputEvent::Wheel { delta: 120.0 });
    events.push(InputEvent::Wheel { delta: -240.0 });
    events
}

fn run() -> Result<(), ArcviewError> {
    let options = load_options()?;
    let mut controller = CameraController::new(&options, WIDTH, HEIGHT, LogSink)?;
    let mut router = InputRouter::new(Viewport::new(WIDTH, HEIGHT));

    for event in script() {
        log::debug!("event: {event:?}");
        if let Some(command) = router.handle_event(event) {
            controller.execute(command);
        }
    }

    log::info!(
        "final: {} view updates, distance {:.2}, orientation {}",
        controller.camera().transform_seq(),
        controller.distance(),
        controller.arcball().orientation()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
