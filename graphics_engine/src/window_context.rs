use std::ffi::c_void;

use vek::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    F12,

    Unknown(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Closed,
    Resized { width: usize, height: usize },
    KeyDown { key: Key },
}

/// A window owning the OpenGL context the engine renders into.
pub trait WindowContext {
    fn window_dimensions(&self) -> Vec2<usize>;

    fn poll_event(&mut self) -> Option<Event>;

    fn swap_buffers(&self);

    /// Looks up an OpenGL entry point, null if it is not available.
    fn gl_get_proc_address(&self, name: &str) -> *const c_void;

    fn poll_events(&mut self) -> Vec<Event> {
        std::iter::from_fn(|| self.poll_event()).collect()
    }
}
