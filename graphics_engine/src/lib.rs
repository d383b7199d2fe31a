#![allow(
    clippy::comparison_chain,
    clippy::let_and_return,
    clippy::identity_op,
    clippy::needless_bool,
    clippy::collapsible_if
)]

pub mod clear_flags;
pub mod engine;
pub mod error;
pub mod gl_types;
pub mod gl_wrappers;
pub mod image;
pub mod opengl_utils;
pub mod scene;
pub mod shader;
pub mod triangle;
pub mod version;
pub mod window_context;

pub use vek;
