//! Rendering-side pieces of the sandbox
//!
//! Only instance bring-up and the one-off SPIR-V loads live here; there is
//! no device, swapchain, or pipeline yet.

pub mod vulkan;

pub use vulkan::{VulkanError, VulkanInstance, VulkanResult};
