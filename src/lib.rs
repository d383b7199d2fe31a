#![allow(
    clippy::comparison_chain,
    clippy::let_and_return,
    clippy::identity_op,
    clippy::needless_bool,
    clippy::collapsible_if
)]

pub mod config;
pub mod main_loop;
pub mod scene_hello_triangle;
