#![allow(dead_code)]

use graphics_engine::engine::Engine;
use graphics_engine::window_context::WindowContext;
use parking_lot::Mutex;
use sdl2_graphics_engine::{ContextConfig, Sdl2GlContext};

pub const BASIC_VS_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
  gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}"#;

pub const BASIC_VS_SRC_SPELLING_ERR: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
  gl_Poosition = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}"#;

pub const BASIC_FS_SRC: &str = r#"#version 330 core
out vec4 FragColor;
void main()
{
  FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}"#;

pub const BASIC_FS_SRC_UNWRITTEN_INPUT: &str = r#"#version 330 core
in vec3 vertexColor;
out vec4 FragColor;
void main()
{
  FragColor = vec4(vertexColor, 1.0f);
}"#;

static GL_LOCK: Mutex<()> = parking_lot::const_mutex(());

pub fn hidden_window_config() -> ContextConfig {
    ContextConfig {
        window_name: String::new(),
        visible: false,
        ..Default::default()
    }
}

/// Runs `test` with a hidden window whose 3.3 core context is current on the
/// calling thread. Tests of one binary run one after the other.
pub fn with_gl_context<R>(test: impl FnOnce(&mut Sdl2GlContext, &mut Engine) -> R) -> R {
    let _guard = GL_LOCK.lock();
    let _ = env_logger::builder().is_test(true).try_init();

    let mut context = Sdl2GlContext::new(&hidden_window_config()).unwrap();
    let mut engine = Engine::new(|name| context.gl_get_proc_address(name)).unwrap();

    test(&mut context, &mut engine)
}
