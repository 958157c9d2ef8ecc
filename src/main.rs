use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use boxfield::config::{Args, EngineConfig};
use boxfield::engine::Engine;
use boxfield::error::Error;
use boxfield::input::InputState;
use boxfield::window::{FpsCounter, FrameLimiter, Window, WindowEvent};

fn print_controls() {
    println!("Controls:");
    println!("  W/S, A/D, Q/E     rotate about Y, X, Z");
    println!("  Arrow keys        move the field");
    println!("  Right mouse drag  set rotation from the cursor");
    println!("  F5                reset with a new seed");
    println!("  F6                toggle perspective / orthographic");
    println!("  F12               save a screenshot");
    println!("  Esc, F4           quit");
}

/// Renders `frames` frames without opening a window and writes the last one.
fn run_headless(config: &EngineConfig, frames: u32, output: &Path) -> Result<(), Error> {
    let mut engine = Engine::new(config);
    let input = InputState::default();
    for _ in 0..frames.max(1) {
        engine.update(&input);
        engine.render();
    }
    engine.save_screenshot(output)?;
    println!("Wrote {} after {} frame(s)", output.display(), frames.max(1));
    Ok(())
}

fn run_windowed(config: &EngineConfig) -> Result<(), Error> {
    let mut engine = Engine::new(config);
    let mut window = Window::new(&engine.title(), config.width, config.height)?;
    let mut frame_limiter = FrameLimiter::new(&window, config.fps);
    let mut fps_counter = FpsCounter::new();
    let mut screenshots = 0u32;

    print_controls();

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    engine.resize(w, h);
                }
                WindowEvent::Reset => {
                    engine.reset();
                    println!("Scene reset (seed {})", engine.scene().noise_factors().seed);
                }
                WindowEvent::ToggleViewMode => {
                    let mode = engine.toggle_view_mode();
                    window.set_title(&engine.title())?;
                    println!("View mode: {mode}");
                }
                WindowEvent::Screenshot => {
                    screenshots += 1;
                    let path = format!("boxfield-{screenshots:03}.png");
                    match engine.save_screenshot(&path) {
                        Ok(()) => println!("Saved {path}"),
                        Err(e) => eprintln!("Screenshot failed: {e}"),
                    }
                }
            }
        }

        let input = window.sample_input();
        engine.update(&input);
        engine.render();
        window.present(engine.frame_buffer())?;

        let delta_ms = frame_limiter.wait_and_get_delta(&window);
        if let Some(fps) = fps_counter.tick(delta_ms) {
            window.set_title(&format!("{} | {fps} FPS", engine.title()))?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "boxfield: {}x{}x{} boxes, {}x{} @ {} fps, {} view",
        config.scene.grid.x,
        config.scene.grid.y,
        config.scene.grid.z,
        config.width,
        config.height,
        config.fps,
        config.view_mode
    );

    let result = match args.headless {
        Some(frames) => run_headless(&config, frames, &args.output),
        None => run_windowed(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
