//! Configuration types for background removal operations

/// Default per-channel brightness cutoff for background classification
pub const WHITE_THRESHOLD_DEFAULT: u8 = 200;

/// Configuration for a white-background removal operation
///
/// Process-local, supplied once per invocation; nothing here is persisted
/// between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalConfig {
    /// Per-channel brightness cutoff. A pixel is classified as background
    /// when its red, green, and blue channels are each strictly greater
    /// than this value.
    ///
    /// `u8` makes the valid range a type invariant. The boundaries are
    /// degenerate but well defined: 255 classifies nothing as background
    /// (no channel exceeds 255), 0 classifies every pixel with all
    /// channels above zero.
    pub threshold: u8,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            threshold: WHITE_THRESHOLD_DEFAULT,
        }
    }
}

impl RemovalConfig {
    /// Create a configuration builder
    #[must_use]
    pub fn builder() -> RemovalConfigBuilder {
        RemovalConfigBuilder::default()
    }
}

/// Builder for `RemovalConfig`
#[derive(Debug, Default)]
pub struct RemovalConfigBuilder {
    config: RemovalConfig,
}

impl RemovalConfigBuilder {
    /// Set the per-channel brightness cutoff
    #[must_use]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> RemovalConfig {
        self.config
    }
}
