use harris_core::HarrisConfig;

use crate::detector::{HarrisDetector, validate_config};
use crate::error::HarrisResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete detector configuration with optional metadata
///
/// Metadata fields come before the nested table so the TOML form stays
/// serializable.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorConfig {
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Core Harris configuration
    pub core: HarrisConfig,
}

impl DetectorConfig {
    /// Create new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self
    }

    /// Convert to DetectorBuilder for further customization
    pub fn to_builder(self) -> DetectorBuilder {
        DetectorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "DetectorConfig{}: smoothing={}, structure={}, suppression={}, k={}, ratio={}",
            self.name.as_deref().map(|n| format!(" '{}'", n)).unwrap_or_default(),
            self.core.smoothing_size,
            self.core.structure_size,
            self.core.suppression_size,
            self.core.harris_k,
            self.core.threshold_ratio
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> HarrisResult<()> {
        validate_config(&self.core)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

/// Fluent API builder for detector configuration
pub struct DetectorBuilder {
    core: HarrisConfig,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorBuilder {
    /// Create new builder with default settings
    pub fn new() -> Self {
        Self {
            core: HarrisConfig::default(),
        }
    }

    /// Set gaussian smoothing window size
    pub fn smoothing_size(mut self, size: usize) -> Self {
        self.core.smoothing_size = size;
        self
    }

    /// Set structure tensor window size
    pub fn structure_size(mut self, size: usize) -> Self {
        self.core.structure_size = size;
        self
    }

    /// Set non-maximal suppression window size
    pub fn suppression_size(mut self, size: usize) -> Self {
        self.core.suppression_size = size;
        self
    }

    /// Set Harris response sensitivity constant
    pub fn harris_k(mut self, k: f32) -> Self {
        self.core.harris_k = k;
        self
    }

    /// Set detection threshold as a fraction of the maximum response
    pub fn threshold_ratio(mut self, ratio: f32) -> Self {
        self.core.threshold_ratio = ratio;
        self
    }

    /// Set number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.core.n_threads = n_threads;
        self
    }

    /// Preset that keeps weaker corners (low threshold, tight suppression)
    pub fn preset_sensitive(mut self) -> Self {
        self.core.threshold_ratio = 0.2;
        self.core.suppression_size = 5;
        self
    }

    /// Preset that keeps only a few strong corners (high threshold, wide suppression)
    pub fn preset_sparse(mut self) -> Self {
        self.core.threshold_ratio = 0.8;
        self.core.suppression_size = 13;
        self
    }

    /// Build configured detector
    pub fn build(self) -> HarrisResult<HarrisDetector> {
        HarrisDetector::new(self.core)
    }

    /// Create builder from existing configuration
    pub fn from_config(config: DetectorConfig) -> Self {
        Self { core: config.core }
    }

    /// Convert to DetectorConfig
    pub fn to_config(self) -> DetectorConfig {
        DetectorConfig {
            name: None,
            description: None,
            core: self.core,
        }
    }
}
