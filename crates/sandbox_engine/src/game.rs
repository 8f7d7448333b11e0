//! The sandbox shell
//!
//! `Game` owns the window and the Vulkan instance, performs the whole
//! init sequence at construction, and runs the synchronous poll-events
//! frame loop. Every init failure is terminal; `main` maps it to a
//! non-zero exit code.

use crate::assets::{AssetError, ImageData};
use crate::config::GameConfig;
use crate::render::vulkan::{SpirvCode, VulkanError, VulkanInstance};
use crate::window::{Window, WindowError};
use glfw::{Action, Key, WindowEvent};
use thiserror::Error;

/// Key that flips between windowed and fullscreen mode
pub const KEY_TOGGLE_FULLSCREEN: Key = Key::Escape;

/// Top-level sandbox errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Windowing-layer failure
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    /// Vulkan bring-up failure
    #[error("vulkan error: {0}")]
    Vulkan(#[from] VulkanError),

    /// Ad-hoc asset load failure
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
}

/// The sandbox application object
///
/// Single-owner, single-threaded: the window and instance handles live
/// here and nowhere else, and are released by `Drop` in reverse-creation
/// order.
pub struct Game {
    window: Window,
    // Kept alive for its Drop; nothing reads it until a device exists.
    #[allow(dead_code)]
    vulkan: VulkanInstance,
    #[allow(dead_code)] // Will feed the pipeline once one exists
    shaders: Vec<SpirvCode>,
    #[allow(dead_code)] // Will feed the texture upload once one exists
    texture: Option<ImageData>,
}

impl Game {
    /// Initialize the whole shell from configuration
    ///
    /// Creates the window, brings up Vulkan, and performs the configured
    /// one-off shader/texture loads, logging each step.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        log::info!("game starting");

        let window = Window::new(&config.window)?;

        let required_extensions = window.required_instance_extensions()?;
        let vulkan =
            VulkanInstance::new(&config.window.title, &required_extensions, &config.vulkan)?;
        log::info!("done setting up vulkan");

        let mut shaders = Vec::new();
        for path in [&config.shaders.vertex, &config.shaders.fragment]
            .into_iter()
            .flatten()
        {
            shaders.push(SpirvCode::from_file(path)?);
        }

        let texture = match &config.texture {
            Some(path) => Some(ImageData::from_file(path)?),
            None => None,
        };

        log::info!("game instantiated");
        Ok(Self {
            window,
            vulkan,
            shaders,
            texture,
        })
    }

    /// Run the frame loop until the window is closed
    ///
    /// Each iteration polls events and handles them; there is nothing to
    /// draw yet, so the "frame" is the poll itself.
    pub fn run(&mut self) {
        log::info!("entering main loop");
        while !self.window.should_close() {
            self.window.poll_events();
            let events: Vec<WindowEvent> = self
                .window
                .flush_events()
                .map(|(_, event)| event)
                .collect();
            for event in events {
                self.handle_event(event);
            }
        }
        log::info!("main loop finished");
    }

    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Key(key, _, Action::Press, _) if key == KEY_TOGGLE_FULLSCREEN => {
                self.window.toggle_fullscreen();
            }
            WindowEvent::Close => {
                self.window.set_should_close(true);
            }
            // Mouse position is observed but unused for now.
            WindowEvent::CursorPos(_, _) => {}
            _ => {}
        }
    }

}

impl Drop for Game {
    fn drop(&mut self) {
        log::info!("game destroyed");
    }
}
