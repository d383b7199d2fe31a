use std::ffi::c_void;

use graphics_engine::window_context::{Event, Key, WindowContext};
use sdl2::event as sdl2_event;
use sdl2::keyboard::Keycode;
use sdl2::video::{GLContext, Window, WindowBuildError};
use sdl2::{video, EventPump, Sdl, VideoSubsystem};
use vek::Vec2;

pub struct Sdl2GlContext {
    _sdl_context: Sdl,
    sdl_video: VideoSubsystem,
    _gl_context: GLContext,
    sdl_window: Window,
    event_pump: EventPump,
}

#[derive(thiserror::Error, Debug)]
pub enum ContextCreationError {
    #[error("could not create SDL context: {0}")]
    CouldNotCreateSdlContext(String),
    #[error("could not create SDL video subsystem: {0}")]
    CouldNotCreateVideoSystem(String),
    #[error("could not create GL context: {0}")]
    CouldNotCreateGLContext(String),
    #[error("could not create event pump: {0}")]
    CouldNotCreateEventPump(String),
    #[error("could not build window: {0}")]
    CouldNotBuildWindow(WindowBuildError),
    #[error("could not create a {gl_profile:?} context with version {gl_major_version}.{gl_minor_version}")]
    CouldNotCreateContextWithGLVersion {
        gl_profile: GlProfile,
        gl_major_version: u8,
        gl_minor_version: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlProfile {
    Core,
    Compatibility,
    GLES,
}

impl From<GlProfile> for video::GLProfile {
    fn from(gl_profile: GlProfile) -> video::GLProfile {
        match gl_profile {
            GlProfile::Compatibility => video::GLProfile::Compatibility,
            GlProfile::Core => video::GLProfile::Core,
            GlProfile::GLES => video::GLProfile::GLES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub window_name: String,
    pub window_width: u32,
    pub window_height: u32,
    pub gl_profile: GlProfile,
    pub gl_major_version: u8,
    pub gl_minor_version: u8,
    /// Hidden windows still get a working context, used by tests.
    pub visible: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            window_name: "Hello world!".to_string(),
            window_width: 640,
            window_height: 480,
            gl_profile: GlProfile::Core,
            gl_major_version: 3,
            gl_minor_version: 3,
            visible: true,
        }
    }
}

impl Sdl2GlContext {
    pub fn new(config: &ContextConfig) -> Result<Self, ContextCreationError> {
        let sdl2_gl_profile = config.gl_profile.into();
        let sdl_context = sdl2::init().map_err(ContextCreationError::CouldNotCreateSdlContext)?;
        let sdl_video = sdl_context
            .video()
            .map_err(ContextCreationError::CouldNotCreateVideoSystem)?;

        let gl_attr = sdl_video.gl_attr();
        gl_attr.set_context_profile(sdl2_gl_profile);
        gl_attr.set_context_version(config.gl_major_version, config.gl_minor_version);

        let mut window_builder =
            sdl_video.window(&config.window_name, config.window_width, config.window_height);
        window_builder.opengl().resizable();
        if !config.visible {
            window_builder.hidden();
        }

        let sdl_window = window_builder
            .build()
            .map_err(ContextCreationError::CouldNotBuildWindow)?;

        let gl_context = sdl_window
            .gl_create_context()
            .map_err(ContextCreationError::CouldNotCreateGLContext)?;

        if gl_attr.context_profile() != sdl2_gl_profile {
            return Err(ContextCreationError::CouldNotCreateContextWithGLVersion {
                gl_profile: config.gl_profile,
                gl_major_version: config.gl_major_version,
                gl_minor_version: config.gl_minor_version,
            });
        }

        let event_pump = sdl_context
            .event_pump()
            .map_err(ContextCreationError::CouldNotCreateEventPump)?;

        log::debug!(
            "created window, name = {}, size = {}x{}, gl = {:?} {}.{}",
            config.window_name,
            config.window_width,
            config.window_height,
            config.gl_profile,
            config.gl_major_version,
            config.gl_minor_version
        );

        Ok(Self {
            _sdl_context: sdl_context,
            sdl_video,
            _gl_context: gl_context,
            sdl_window,
            event_pump,
        })
    }

    fn try_from_sdl2_event_to_event(&self, sdl2_event: sdl2_event::Event) -> Option<Event> {
        log::trace!("SDL2_EVENT = {sdl2_event:?}");

        Some(match sdl2_event {
            sdl2_event::Event::Quit { .. } => Event::Closed,
            sdl2_event::Event::Window { win_event, .. } => match win_event {
                sdl2_event::WindowEvent::Resized(width, height) => Event::Resized {
                    width: width as usize,
                    height: height as usize,
                },
                sdl2_event::WindowEvent::Close => Event::Closed,
                _ => None?,
            },
            sdl2_event::Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => Event::KeyDown {
                key: from_sdl_keycode_to_key(keycode),
            },
            _ => None?,
        })
    }
}

impl WindowContext for Sdl2GlContext {
    fn window_dimensions(&self) -> Vec2<usize> {
        let (width, height) = self.sdl_window.size();
        Vec2::new(width as usize, height as usize)
    }

    fn poll_event(&mut self) -> Option<Event> {
        while let Some(sdl2_event) = self.event_pump.poll_event() {
            if let Some(event) = self.try_from_sdl2_event_to_event(sdl2_event) {
                return Some(event);
            }
        }

        None
    }

    fn swap_buffers(&self) {
        self.sdl_window.gl_swap_window()
    }

    fn gl_get_proc_address(&self, name: &str) -> *const c_void {
        self.sdl_video.gl_get_proc_address(name) as *const c_void
    }
}

fn from_sdl_keycode_to_key(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Escape => Key::Escape,
        Keycode::F12 => Key::F12,
        other => Key::Unknown(other as i32),
    }
}
