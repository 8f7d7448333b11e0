//! Window management using GLFW
//!
//! Window creation and event handling for a Vulkan client (no OpenGL
//! context is created). Fullscreen switching goes through
//! [`FullscreenState`] so the pre-fullscreen geometry is restored exactly.

pub mod fullscreen;

pub use fullscreen::{FullscreenState, WindowGeometry};

use crate::config::WindowConfig;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW itself refused to initialize
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// No primary monitor is connected
    #[error("no monitors found")]
    NoMonitor,

    /// The primary monitor reports no current video mode
    #[error("failed to get current video mode")]
    NoVideoMode,

    /// Window creation failed
    #[error("window creation failed")]
    CreationFailed,

    /// Any other GLFW-reported problem
    #[error("GLFW error: {0}")]
    Glfw(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// GLFW and the window handle are released by their own `Drop` impls in
/// reverse-creation order.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    fullscreen: FullscreenState,
}

impl Window {
    /// Create a window from configuration
    ///
    /// Logs the primary monitor's available video modes and the current
    /// one, then creates the window with no client API (Vulkan does its
    /// own surface handling). Fails when GLFW will not initialize, no
    /// monitor is present, or window creation itself fails.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;
        log::info!("initialized glfw");

        glfw.with_primary_monitor(|_, monitor| {
            let monitor = monitor.ok_or(WindowError::NoMonitor)?;

            let modes: Vec<String> = monitor
                .get_video_modes()
                .iter()
                .map(describe_video_mode)
                .collect();
            log::info!(
                "available video modes for primary monitor: {}",
                modes.join(", ")
            );

            let current = monitor.get_video_mode().ok_or(WindowError::NoVideoMode)?;
            log::info!(
                "current video mode: {}",
                describe_video_mode(&current)
            );
            Ok(())
        })?;

        // No OpenGL context; Vulkan does surface creation itself.
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);

        log::info!("created window");

        let mut created = Self {
            glfw,
            window,
            events,
            fullscreen: FullscreenState::default(),
        };
        if config.fullscreen {
            created.toggle_fullscreen();
        }
        Ok(created)
    }

    /// Whether the close flag has been set
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set the close flag checked by the run loop
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the events gathered since the last poll
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Current client area size in pixels
    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    /// Is the window currently fullscreen?
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Flip between windowed and fullscreen mode
    ///
    /// Entering fullscreen saves the current position and size and hides
    /// the cursor; leaving restores both exactly. A monitor that vanished
    /// since startup is logged and the window left as-is.
    pub fn toggle_fullscreen(&mut self) {
        let Self {
            glfw,
            window,
            fullscreen,
            ..
        } = self;

        if fullscreen.is_fullscreen() {
            if let Some(geometry) = fullscreen.leave() {
                log::info!("switching to windowed mode");
                window.set_monitor(
                    glfw::WindowMode::Windowed,
                    geometry.x,
                    geometry.y,
                    geometry.width as u32,
                    geometry.height as u32,
                    None,
                );
                window.set_cursor_mode(glfw::CursorMode::Normal);
            }
        } else {
            glfw.with_primary_monitor(|_, monitor| {
                let Some(monitor) = monitor else {
                    log::warn!("no monitor available, staying windowed");
                    return;
                };
                let Some(mode) = monitor.get_video_mode() else {
                    log::warn!("no current video mode, staying windowed");
                    return;
                };

                log::info!("switching to fullscreen mode");
                let (x, y) = window.get_pos();
                let (width, height) = window.get_size();
                fullscreen.enter(WindowGeometry {
                    x,
                    y,
                    width,
                    height,
                });
                window.set_monitor(
                    glfw::WindowMode::FullScreen(monitor),
                    0,
                    0,
                    mode.width,
                    mode.height,
                    Some(mode.refresh_rate),
                );
                window.set_cursor_mode(glfw::CursorMode::Disabled);
            });
        }
    }

    /// Instance extensions GLFW needs for surface creation
    pub fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or_else(|| WindowError::Glfw("failed to get required extensions".to_string()))
    }
}

fn describe_video_mode(mode: &glfw::VidMode) -> String {
    format!(
        "{}x{}@{}Hz R{}G{}B{}",
        mode.width, mode.height, mode.refresh_rate, mode.red_bits, mode.green_bits, mode.blue_bits
    )
}
