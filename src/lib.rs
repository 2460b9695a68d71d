//! Sort-friendly perceptual image hashing.
//!
//! `sorthash` computes a DCT-based perceptual hash whose bits are ordered
//! from most to least visually significant. Like any perceptual hash,
//! similar images yield hashes with small Hamming distance; in addition,
//! the significance ordering makes the hash usable as a sortable key, so
//! near-duplicates cluster in a plain sorted list or B-tree without
//! pairwise comparison.
//!
//! The pipeline per image: resample to an N×N grayscale grid, run a 2D
//! discrete cosine transform, threshold the K×K low-frequency block
//! against its mean (DC term excluded), and emit the K² bits in layer
//! order, coarsest frequencies first.
//!
//! ```
//! use sorthash::{HashConfig, Hasher, PixelGrid};
//!
//! let hasher = Hasher::new(HashConfig::default()).unwrap();
//!
//! // A 32x32 horizontal gradient supplied as a raw intensity grid.
//! let data: Vec<u8> = (0..32 * 32).map(|idx| ((idx / 32) * 8) as u8).collect();
//! let grid = PixelGrid::from_raw(32, data).unwrap();
//!
//! let hash = hasher.hash_grid(&grid).unwrap();
//! assert_eq!(hash.to_hex().len(), 16);
//! ```
//!
//! Decoded images (via the `image` crate) go through [`Hasher::hash_image`]
//! or [`Hasher::hash_path`] instead.

pub mod config;
pub mod dct;
pub mod error;
pub mod grid;
pub mod hasher;
pub mod reorder;

pub use config::{Config, GrayscalePolicy, HashConfig};
pub use error::HashError;
pub use grid::PixelGrid;
pub use hasher::{Hasher, SortableHash};
