pub mod sdl2_gl_context;

pub use sdl2_gl_context::{ContextConfig, ContextCreationError, GlProfile, Sdl2GlContext};
