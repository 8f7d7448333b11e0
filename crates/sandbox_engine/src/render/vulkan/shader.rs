//! Ad-hoc SPIR-V loading
//!
//! There is no device yet, so nothing is compiled into a
//! `vk::ShaderModule`; the blob is read, validated, and held as words
//! ready for the day a pipeline exists.

use crate::render::vulkan::{VulkanError, VulkanResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// First word of every valid SPIR-V blob
const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Validated SPIR-V bytecode
#[derive(Debug, Clone)]
pub struct SpirvCode {
    words: Vec<u32>,
}

impl SpirvCode {
    /// Validate raw bytes as SPIR-V
    ///
    /// Rejects blobs whose length is not a whole number of 32-bit words
    /// and blobs that do not start with the SPIR-V magic number.
    pub fn from_bytes(bytes: &[u8]) -> VulkanResult<Self> {
        if bytes.len() % 4 != 0 {
            return Err(VulkanError::InitializationFailed(format!(
                "SPIR-V length {} is not a multiple of 4",
                bytes.len()
            )));
        }

        let words: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        match words.first() {
            Some(&SPIRV_MAGIC) => Ok(Self { words }),
            _ => Err(VulkanError::InitializationFailed(
                "missing SPIR-V magic number".to_string(),
            )),
        }
    }

    /// Load and validate a SPIR-V file
    pub fn from_file<P: AsRef<Path>>(path: P) -> VulkanResult<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            VulkanError::InitializationFailed(format!(
                "failed to open shader file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            VulkanError::InitializationFailed(format!(
                "failed to read shader file {}: {}",
                path.display(),
                e
            ))
        })?;

        let code = Self::from_bytes(&bytes)?;
        log::info!("loaded shader {} ({} words)", path.display(), code.len());
        Ok(code)
    }

    /// The validated 32-bit words, as `vk::ShaderModuleCreateInfo` wants them
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of 32-bit words in the blob
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the blob holds no words at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
