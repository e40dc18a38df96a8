//! Runtime settings with compiled defaults.
//!
//! There is no config file and no environment lookup: settings are plain
//! structs passed explicitly into the components that need them.

/// Output encoding settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// JPEG quality (1-100); values outside the range are clamped
    pub jpeg_quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

/// Benchmark sweep settings.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Largest worker pool size exercised by the sweep
    pub max_pool_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { max_pool_size: 7 }
    }
}
