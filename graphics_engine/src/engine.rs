use std::ffi::c_void;
use std::marker::PhantomData;

use gl::types::GLsizei;
use vek::Rgba;

use crate::clear_flags::ClearFlags;
use crate::error::{ErrorCode, Result};
use crate::gl_wrappers;
use crate::scene::Scene;

pub const DEFAULT_BACKGROUND_COLOR: Rgba<f32> = Rgba {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

fn required_functions_loaded() -> bool {
    gl::GetError::is_loaded()
        && gl::GetString::is_loaded()
        && gl::Clear::is_loaded()
        && gl::ClearColor::is_loaded()
        && gl::CreateShader::is_loaded()
        && gl::CreateProgram::is_loaded()
        && gl::GenBuffers::is_loaded()
        && gl::GenVertexArrays::is_loaded()
        && gl::DrawArrays::is_loaded()
        && gl::ReadPixels::is_loaded()
}

/// Owns the per-context rendering state: background color, clear flags and
/// the scenes drawn every frame.
///
/// The GL context is bound to the thread that made it current, so the engine
/// is neither `Send` nor `Sync`.
pub struct Engine {
    background_color: Rgba<f32>,
    clear_flags: ClearFlags,
    scenes: Vec<Box<dyn Scene>>,
    _not_send: PhantomData<*const ()>,
}

impl Engine {
    /// Loads the GL function pointers through `loader` and verifies that a
    /// context is current on this thread.
    pub fn new<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        if !required_functions_loaded() {
            log::error!("Engine initialization failed, msg = could not load OpenGL functions");
            return Err(ErrorCode::EngineInitializationFailed);
        }

        let version = gl_wrappers::get_string(gl::VERSION)
            .map_err(|_| ErrorCode::EngineInitializationFailed)?
            .ok_or_else(|| {
                log::error!("Engine initialization failed, msg = no current OpenGL context");
                ErrorCode::EngineInitializationFailed
            })?;
        let vendor = gl_wrappers::get_string(gl::VENDOR)
            .ok()
            .flatten()
            .unwrap_or_default();
        let renderer = gl_wrappers::get_string(gl::RENDERER)
            .ok()
            .flatten()
            .unwrap_or_default();

        log::info!("OpenGL version = {version}, vendor = {vendor}, renderer = {renderer}");

        Ok(Self {
            background_color: DEFAULT_BACKGROUND_COLOR,
            clear_flags: ClearFlags::color(),
            scenes: Vec::new(),
            _not_send: PhantomData,
        })
    }

    pub fn background_color(&self) -> Rgba<f32> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Rgba<f32>) {
        self.background_color = color;
    }

    pub fn clear_flags(&self) -> ClearFlags {
        self.clear_flags
    }

    pub fn set_clear_flags(&mut self, clear_flags: ClearFlags) {
        self.clear_flags = clear_flags;
    }

    pub fn set_viewport(&self, width: usize, height: usize) -> Result<()> {
        let width = GLsizei::try_from(width).map_err(|_| ErrorCode::GlInvalidValue)?;
        let height = GLsizei::try_from(height).map_err(|_| ErrorCode::GlInvalidValue)?;

        gl_wrappers::viewport(0, 0, width, height)
    }

    pub fn clear_buffers(&self) -> Result<()> {
        gl_wrappers::clear_color(self.background_color)?;
        gl_wrappers::clear(self.clear_flags)
    }

    pub fn add_scene(&mut self, scene: Box<dyn Scene>) {
        self.scenes.push(scene);
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Clears the framebuffer and renders the scenes in the order they were
    /// added, stopping at the first failure.
    pub fn render(&self) -> Result<()> {
        self.clear_buffers()?;

        for scene in self.scenes.iter() {
            scene.render()?;
        }

        Ok(())
    }
}
