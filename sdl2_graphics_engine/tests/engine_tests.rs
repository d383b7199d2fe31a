mod common;

use graphics_engine::clear_flags::ClearFlags;
use graphics_engine::engine::{Engine, DEFAULT_BACKGROUND_COLOR};
use graphics_engine::gl_types::ClearBit;
use graphics_engine::gl_wrappers::{pixel_store_pack_alignment, read_pixels};
use graphics_engine::image::{are_identical, capture_screenshot};
use graphics_engine::window_context::WindowContext;
use vek::Rgba;

use common::with_gl_context;

fn assert_close(actual: &[u8], expected: [u8; 4]) {
    for (actual, expected) in actual.iter().zip(expected) {
        assert!(
            (*actual as i16 - expected as i16).abs() <= 1,
            "{actual:?} != {expected:?}"
        );
    }
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn initialize_engine_with_context() {
    with_gl_context(|context, engine| {
        assert_eq!(engine.background_color(), DEFAULT_BACKGROUND_COLOR);
        assert_eq!(engine.clear_flags(), ClearFlags::color());
        assert_eq!(engine.scene_count(), 0);
        assert_eq!(context.window_dimensions().x, 640);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn second_engine_on_the_same_context_initializes() {
    with_gl_context(|context, _| {
        assert!(Engine::new(|name| context.gl_get_proc_address(name)).is_ok());
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn render_clears_to_the_background_color() {
    with_gl_context(|_, engine| {
        engine.set_background_color(Rgba::new(1.0, 0.0, 0.0, 1.0));
        engine.set_clear_flags(
            *ClearFlags::new()
                .set_bit(ClearBit::Color)
                .set_bit(ClearBit::Depth),
        );
        engine.set_viewport(640, 480).unwrap();

        engine.render().unwrap();

        pixel_store_pack_alignment(1).unwrap();
        let pixels = read_pixels(10, 10, 1, 1).unwrap();
        assert_close(&pixels, [255, 0, 0, 255]);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn screenshots_of_the_same_frame_are_identical() {
    with_gl_context(|_, engine| {
        let dir = tempfile::tempdir().unwrap();
        let png0 = dir.path().join("frame0.png");
        let png1 = dir.path().join("frame1.png");

        engine.set_viewport(640, 480).unwrap();
        engine.render().unwrap();

        assert_eq!(capture_screenshot(Some(&png0)), Ok(png0.clone()));
        assert_eq!(capture_screenshot(Some(&png1)), Ok(png1.clone()));
        assert_eq!(are_identical(&png0, &png1), Ok(true));

        engine.set_background_color(Rgba::new(0.0, 0.0, 1.0, 1.0));
        engine.render().unwrap();
        capture_screenshot(Some(&png1)).unwrap();
        assert_eq!(are_identical(&png0, &png1), Ok(false));
    });
}
