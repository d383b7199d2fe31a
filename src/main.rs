use std::path::Path;

use anyhow::Context;
use graphics_engine::engine::Engine;
use graphics_engine::image::capture_screenshot;
use graphics_engine::version::engine_lib_version;
use graphics_engine::window_context::{Event, Key, WindowContext};
use hello_triangle::config::DemoConfig;
use hello_triangle::main_loop::MainLoop;
use hello_triangle::scene_hello_triangle::HelloTriangle;
use sdl2_graphics_engine::Sdl2GlContext;

fn take_screenshot(dest: Option<&Path>) {
    match capture_screenshot(dest) {
        Ok(path) => println!("screenshot saved to {}", path.display()),
        Err(e) => log::error!("could not capture screenshot, msg = {e}"),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;

    println!("engine-lib:");
    println!("  version: {}", engine_lib_version());

    let mut context =
        Sdl2GlContext::new(&config.context_config()).context("could not create window")?;

    let mut engine = Engine::new(|name| context.gl_get_proc_address(name))
        .context("could not initialize the engine")?;
    engine.set_background_color(config.background_color);

    let window_dimensions = context.window_dimensions();
    engine.set_viewport(window_dimensions.x, window_dimensions.y)?;

    engine.add_scene(Box::new(
        HelloTriangle::new().context("could not create the hello triangle scene")?,
    ));

    let main_loop = MainLoop::new(config.desired_fps).with_frame_limit(config.frame_limit);
    'running: for frame in main_loop.iter() {
        let mut screenshot_requested = config
            .frame_limit
            .map_or(false, |frame_limit| frame.index + 1 == frame_limit)
            && config.screenshot_path.is_some();

        for event in context.poll_events() {
            match event {
                Event::Closed | Event::KeyDown { key: Key::Escape } => break 'running,
                Event::Resized { width, height } => {
                    if let Err(e) = engine.set_viewport(width, height) {
                        log::error!("could not resize viewport, msg = {e}");
                    }
                }
                Event::KeyDown { key: Key::F12 } => screenshot_requested = true,
                _ => {}
            }
        }

        if let Err(e) = engine.render() {
            log::error!("rendering failed, msg = {e}");
            break;
        }

        // the back buffer is only defined until it is swapped
        if screenshot_requested {
            take_screenshot(config.screenshot_path.as_deref());
        }

        context.swap_buffers();
    }

    Ok(())
}
