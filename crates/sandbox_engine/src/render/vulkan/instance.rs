//! Vulkan instance bring-up
//!
//! A linear, pass/fail sequence: enumerate layers, enumerate extensions,
//! verify everything required is present, create the instance, and in
//! validation builds attach a debug messenger that routes into the `log`
//! facade.

use crate::config::VulkanConfig;
use crate::render::vulkan::{VulkanError, VulkanResult};
use ash::extensions::ext::DebugUtils;
use ash::vk;
use ash::{Entry, Instance};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// The Khronos validation layer requested in validation builds
pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    entry: Entry,
    instance: Instance,
    debug: Option<(DebugUtils, vk::DebugUtilsMessengerEXT)>,
}

impl VulkanInstance {
    /// Create an instance for `app_name` with the given surface extensions
    ///
    /// `required_extensions` comes from the windowing layer
    /// ([`crate::window::Window::required_instance_extensions`]). Every
    /// step failure is terminal; there is no retry policy.
    pub fn new(
        app_name: &str,
        required_extensions: &[String],
        config: &VulkanConfig,
    ) -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| VulkanError::LoadingFailed(e.to_string()))?;

        let validation = config.validation_enabled();

        // Layers first; the validation layer is the only one we ask for.
        let available_layers = entry
            .enumerate_instance_layer_properties()
            .map_err(VulkanError::Api)?;
        let validation_layer = CString::new(VALIDATION_LAYER)
            .map_err(|e| VulkanError::InitializationFailed(e.to_string()))?;
        if validation {
            if !layer_supported(&validation_layer, &available_layers) {
                log::error!("required layer {}: unsupported", VALIDATION_LAYER);
                return Err(VulkanError::MissingLayer(VALIDATION_LAYER.to_string()));
            }
            log::info!("required layer {}: supported", VALIDATION_LAYER);
        }

        let available_extensions = entry
            .enumerate_instance_extension_properties(None)
            .map_err(VulkanError::Api)?;
        log::info!(
            "available extensions: {}",
            available_extensions
                .iter()
                .map(|props| raw_name(&props.extension_name).to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(", ")
        );

        // Surface extensions from the windowing layer, plus debug utils
        // when validation is on.
        let mut enabled_extensions: Vec<CString> = required_extensions
            .iter()
            .map(|ext| CString::new(ext.as_str()))
            .collect::<Result<_, _>>()
            .map_err(|e| VulkanError::InitializationFailed(e.to_string()))?;
        if validation {
            enabled_extensions.push(DebugUtils::name().to_owned());
        }

        let mut missing = Vec::new();
        for ext in &enabled_extensions {
            let name = ext.to_string_lossy();
            if extension_supported(ext, &available_extensions) {
                log::info!("required extension {}: supported", name);
            } else {
                log::error!("required extension {}: unsupported", name);
                missing.push(name.into_owned());
            }
        }
        if !missing.is_empty() {
            return Err(VulkanError::MissingExtension(missing.join(", ")));
        }

        let app_name_cstr = CString::new(app_name)
            .map_err(|e| VulkanError::InitializationFailed(e.to_string()))?;
        let (major, minor, patch) = config.application_version;
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name_cstr)
            .application_version(vk::make_api_version(0, major, minor, patch))
            .engine_name(&app_name_cstr)
            .engine_version(vk::make_api_version(0, major, minor, patch))
            .api_version(vk::API_VERSION_1_0);

        let extension_ptrs: Vec<*const c_char> =
            enabled_extensions.iter().map(|ext| ext.as_ptr()).collect();
        let layer_ptrs: Vec<*const c_char> = if validation {
            vec![validation_layer.as_ptr()]
        } else {
            Vec::new()
        };

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe {
            entry
                .create_instance(&create_info, None)
                .map_err(VulkanError::Api)?
        };
        log::info!("created vulkan instance");

        let debug = if validation {
            let debug_utils = DebugUtils::new(&entry, &instance);
            let messenger = create_debug_messenger(&debug_utils)?;
            log::info!("created debug messenger");
            Some((debug_utils, messenger))
        } else {
            None
        };

        Ok(Self {
            entry,
            instance,
            debug,
        })
    }

    /// The raw instance, for future surface/device work
    pub fn handle(&self) -> &Instance {
        &self.instance
    }

    /// The loaded Vulkan entry point
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Whether a debug messenger is attached
    pub fn has_debug_messenger(&self) -> bool {
        self.debug.is_some()
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            if let Some((debug_utils, messenger)) = self.debug.take() {
                debug_utils.destroy_debug_utils_messenger(messenger, None);
            }
            self.instance.destroy_instance(None);
        }
        log::info!("destroyed vulkan instance");
    }
}

fn create_debug_messenger(debug_utils: &DebugUtils) -> VulkanResult<vk::DebugUtilsMessengerEXT> {
    let create_info = vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(
            vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        )
        .message_type(
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
        .pfn_user_callback(Some(debug_callback));

    unsafe {
        debug_utils
            .create_debug_utils_messenger(&create_info, None)
            .map_err(VulkanError::Api)
    }
}

/// Debug callback routing validation messages into the `log` facade
unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut std::ffi::c_void,
) -> vk::Bool32 {
    let callback_data = *callback_data;
    let message = CStr::from_ptr(callback_data.p_message).to_string_lossy();

    if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        log::error!("[vulkan] {:?} - {}", message_type, message);
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        log::warn!("[vulkan] {:?} - {}", message_type, message);
    } else {
        log::debug!("[vulkan] {:?} - {}", message_type, message);
    }

    vk::FALSE
}

fn raw_name(raw: &[c_char]) -> &CStr {
    // Property name arrays are NUL-terminated by the driver.
    unsafe { CStr::from_ptr(raw.as_ptr()) }
}

pub(crate) fn layer_supported(name: &CStr, available: &[vk::LayerProperties]) -> bool {
    available
        .iter()
        .any(|props| raw_name(&props.layer_name) == name)
}

pub(crate) fn extension_supported(name: &CStr, available: &[vk::ExtensionProperties]) -> bool {
    available
        .iter()
        .any(|props| raw_name(&props.extension_name) == name)
}
