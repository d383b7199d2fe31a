use std::path::PathBuf;

use graphics_engine::engine::DEFAULT_BACKGROUND_COLOR;
use sdl2_graphics_engine::{ContextConfig, GlProfile};
use vek::Rgba;

pub const SCREENSHOT_ENV_VAR: &str = "HELLO_TRIANGLE_SCREENSHOT";
pub const FRAMES_ENV_VAR: &str = "HELLO_TRIANGLE_FRAMES";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{} has to be a positive integer, value = {:?}", FRAMES_ENV_VAR, .0)]
    InvalidFrameCount(String),
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub gl_profile: GlProfile,
    pub gl_major_version: u8,
    pub gl_minor_version: u8,
    pub background_color: Rgba<f32>,
    pub desired_fps: f32,
    /// Where F12 and the final frame of a limited run write their screenshot.
    pub screenshot_path: Option<PathBuf>,
    /// Quit after rendering this many frames.
    pub frame_limit: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Hello world!".to_string(),
            window_width: 640,
            window_height: 480,
            gl_profile: GlProfile::Core,
            gl_major_version: 3,
            gl_minor_version: 3,
            background_color: DEFAULT_BACKGROUND_COLOR,
            desired_fps: 60.0,
            screenshot_path: None,
            frame_limit: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the default configuration with the overrides found in `vars`.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in vars {
            match key.as_str() {
                SCREENSHOT_ENV_VAR if !value.is_empty() => {
                    config.screenshot_path = Some(PathBuf::from(value));
                }
                FRAMES_ENV_VAR => {
                    let frame_limit = value
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|frame_limit| *frame_limit > 0)
                        .ok_or_else(|| ConfigError::InvalidFrameCount(value.clone()))?;
                    config.frame_limit = Some(frame_limit);
                }
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn context_config(&self) -> ContextConfig {
        ContextConfig {
            window_name: self.window_title.clone(),
            window_width: self.window_width,
            window_height: self.window_height,
            gl_profile: self.gl_profile,
            gl_major_version: self.gl_major_version,
            gl_minor_version: self.gl_minor_version,
            visible: true,
        }
    }
}
