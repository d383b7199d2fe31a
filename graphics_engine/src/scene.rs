use crate::error::Result;

/// Something the [`crate::engine::Engine`] draws every frame.
pub trait Scene {
    fn render(&self) -> Result<()>;
}
