//! Game Sandbox engine shell
//!
//! A small desktop application shell: opens a GLFW window, brings up a
//! Vulkan instance (with optional validation layers), registers input
//! handling, and runs a synchronous poll-events frame loop. There is no
//! rendering pipeline here; the crate covers window lifecycle, fullscreen
//! toggling, logging, configuration, and the one-off shader/texture loads
//! the sandbox experiments with.
//!
//! # Module Organization
//!
//! - [`foundation`]: logging
//! - [`config`]: serde-backed configuration types
//! - [`window`]: GLFW window wrapper with fullscreen toggle
//! - [`render`]: Vulkan instance bring-up and SPIR-V loading
//! - [`assets`]: ad-hoc image loading
//! - [`game`]: the `Game` object tying it all together

pub mod assets;
pub mod config;
pub mod foundation;
pub mod game;
pub mod render;
pub mod window;

pub use config::GameConfig;
pub use game::{Game, GameError};
