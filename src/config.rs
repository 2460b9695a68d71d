use crate::error::HashError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration file layout for the CLI.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub hash: HashConfig,
}

/// Parameters of the hashing core.
///
/// `grid_size` (N) is the side of the square the source image is resampled
/// to before the DCT. `block_size` (K) is the side of the low-frequency
/// block that contributes hash bits, so the hash is K² bits long.
/// Larger N improves hash quality at O(N³) cost; the defaults (32, 8) give
/// a 64-bit hash.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HashConfig {
    pub grid_size: u32,
    pub block_size: u32,
    pub grayscale: GrayscalePolicy,
}

/// How a single intensity channel is extracted from a color image.
///
/// Channel choice shifts individual hash values but not the similarity
/// properties of the hash, so it is configurable rather than hard-coded.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrayscalePolicy {
    /// Perceptually weighted luma conversion.
    #[default]
    Luma,
    /// Blue channel as a grayscale proxy.
    Blue,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            grid_size: 32,
            block_size: 8,
            grayscale: GrayscalePolicy::Luma,
        }
    }
}

impl HashConfig {
    /// Check the invariants the hashing core relies on.
    ///
    /// `block_size >= 2` keeps the threshold denominator (K² - 1) positive
    /// and `block_size <= grid_size` keeps the low-frequency block inside
    /// the transform output.
    pub fn validate(&self) -> Result<(), HashError> {
        if self.block_size < 2 {
            return Err(HashError::DegenerateInput {
                block_size: self.block_size,
            });
        }
        if self.block_size > self.grid_size {
            return Err(HashError::InvalidConfiguration {
                grid_size: self.grid_size,
                block_size: self.block_size,
            });
        }
        Ok(())
    }

    /// Number of hex digits in the rendered hash: ceil(K² / 4).
    pub fn hex_len(&self) -> usize {
        (self.block_size as usize * self.block_size as usize).div_ceil(4)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HashConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.block_size, 8);
        assert_eq!(config.hex_len(), 16);
    }

    #[test]
    fn block_larger_than_grid_is_rejected() {
        let config = HashConfig {
            grid_size: 16,
            block_size: 32,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HashError::InvalidConfiguration {
                grid_size: 16,
                block_size: 32
            })
        ));
    }

    #[test]
    fn degenerate_block_is_rejected() {
        for block_size in [0, 1] {
            let config = HashConfig {
                grid_size: 32,
                block_size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(HashError::DegenerateInput { .. })
            ));
        }
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[hash]\nblock_size = 4\n").unwrap();
        assert_eq!(config.hash.block_size, 4);
        assert_eq!(config.hash.grid_size, 32);
        assert_eq!(config.hash.grayscale, GrayscalePolicy::Luma);
        assert_eq!(config.hash.hex_len(), 4);
    }

    #[test]
    fn grayscale_policy_parses_from_toml() {
        let config: Config = toml::from_str("[hash]\ngrayscale = \"blue\"\n").unwrap();
        assert_eq!(config.hash.grayscale, GrayscalePolicy::Blue);
    }
}
