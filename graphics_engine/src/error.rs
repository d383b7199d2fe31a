use gl::types::GLenum;

/// Error codes reported by every fallible call of the engine.
///
/// The numeric values are stable and can be used to identify an error across
/// process boundaries (e.g. test logs).
#[repr(u8)]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    #[error("Engine Initialization failed.")]
    EngineInitializationFailed = 1,
    #[error("OpenGL Error: Invalid Enum.")]
    GlInvalidEnum,
    #[error("OpenGL Error: Invalid Framebuffer Operation.")]
    GlInvalidFramebufferOperation,
    #[error("OpenGL Error: Invalid Operation.")]
    GlInvalidOperation,
    #[error("OpenGL Error: Invalid Value.")]
    GlInvalidValue,
    #[error("OpenGL Error: Out Of Memory.")]
    GlOutOfMemory,
    #[error("Invalid Shader Type.")]
    InvalidShaderType,
    #[error("Scene Initialization failed.")]
    SceneInitFailure,
    #[error("Shader Error.")]
    ShaderError,
    #[error("Image Error: failed to load image.")]
    ImageLoad,
    #[error("Image Error: failed to write png.")]
    ImageWritePng,
}

pub type Result<T> = std::result::Result<T, ErrorCode>;

impl ErrorCode {
    pub const CATEGORY: &'static str = "graphics_engine::error";

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn category(&self) -> &'static str {
        Self::CATEGORY
    }
}

/// Translates a value returned by `glGetError` into an [`ErrorCode`].
///
/// `expected` lists the error codes the GL reference pages allow for
/// `function`; a mapped code outside of that list is still returned, but a
/// warning is logged so that the list can be fixed.
///
/// # Panics
///
/// Panics if `error` is not one of the GL error codes the engine knows about.
pub fn map_gl_error(function: &str, error: GLenum, expected: &[ErrorCode]) -> Result<()> {
    let error_code = match error {
        gl::NO_ERROR => return Ok(()),
        gl::INVALID_ENUM => ErrorCode::GlInvalidEnum,
        gl::INVALID_VALUE => ErrorCode::GlInvalidValue,
        gl::INVALID_OPERATION => ErrorCode::GlInvalidOperation,
        gl::INVALID_FRAMEBUFFER_OPERATION => ErrorCode::GlInvalidFramebufferOperation,
        gl::OUT_OF_MEMORY => ErrorCode::GlOutOfMemory,
        unknown => panic!("{function} failed with unmapped OpenGL error code {unknown:#06x}"),
    };

    log::error!(
        "{function} failed with error code {error:#06x}, msg = {error_code}"
    );

    if !expected.contains(&error_code) {
        log::warn!("{function} is not expected to produce {error_code:?}");
    }

    Err(error_code)
}

/// Fetches the current GL error flag and maps it with [`map_gl_error`].
///
/// Has to be called right after the GL call named by `function`.
pub fn check_gl_error(function: &str, expected: &[ErrorCode]) -> Result<()> {
    let error = unsafe { gl::GetError() };
    map_gl_error(function, error, expected)
}
