//! Minimal Vulkan bring-up
//!
//! The sandbox only creates an instance (optionally with validation layers
//! and a debug messenger) and loads SPIR-V blobs; everything past that is
//! out of scope for now.

pub mod instance;
pub mod shader;

pub use instance::VulkanInstance;
pub use shader::SpirvCode;

use ash::vk;
use thiserror::Error;

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// General Vulkan API error with result code
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// The Vulkan loader/driver could not be found
    #[error("failed to load Vulkan: {0}")]
    LoadingFailed(String),

    /// A requested instance layer is not installed
    #[error("required layer {0} not supported")]
    MissingLayer(String),

    /// A required instance extension is not available
    #[error("required extension {0} not supported")]
    MissingExtension(String),

    /// Anything else that went wrong during bring-up
    #[error("initialization failed: {0}")]
    InitializationFailed(String),
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;
