use crate::config::HashConfig;
use crate::dct::CosTable;
use crate::error::HashError;
use crate::grid::PixelGrid;
use crate::reorder::ReorderTable;
use image::DynamicImage;
use std::fmt;
use std::path::Path;

/// A K²-bit perceptual fingerprint with bits ordered from most to least
/// visually significant.
///
/// The derived `Ord` compares the packed bits most significant first, so
/// sorting hashes (or storing them as B-tree keys) places perceptually
/// similar images near each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortableHash {
    bits: Vec<u8>,
    bit_len: usize,
}

impl SortableHash {
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Packed bits, most significant first; the trailing byte is
    /// zero-padded on the right when `bit_len` is not a multiple of 8.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Lowercase hex rendering, `ceil(bit_len / 4)` digits.
    pub fn to_hex(&self) -> String {
        let digits = self.bit_len.div_ceil(4);
        let mut hex = String::with_capacity(digits);
        for &byte in &self.bits {
            hex.push(char::from_digit((byte >> 4) as u32, 16).unwrap_or('0'));
            hex.push(char::from_digit((byte & 0xf) as u32, 16).unwrap_or('0'));
        }
        hex.truncate(digits);
        hex
    }

    /// Number of differing bits between two hashes of the same length.
    ///
    /// # Panics
    /// If the hashes were produced by differently sized configurations.
    pub fn distance(&self, other: &SortableHash) -> u32 {
        assert_eq!(
            self.bit_len, other.bit_len,
            "hashes must be the same length for comparison"
        );
        self.bits
            .iter()
            .zip(&other.bits)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl fmt::Display for SortableHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The hashing engine: a validated configuration plus its derived tables.
///
/// Construction precomputes the DCT cosine table and the bit reorder table;
/// after that the hasher is immutable, so one instance can serve any number
/// of concurrent hash calls (wrap it in an `Arc` and hand clones to worker
/// tasks). Each call allocates only its own intermediate state.
pub struct Hasher {
    config: HashConfig,
    cos: CosTable,
    reorder: ReorderTable,
}

impl Hasher {
    pub fn new(config: HashConfig) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self {
            cos: CosTable::new(config.grid_size as usize),
            reorder: ReorderTable::new(config.block_size as usize),
            config,
        })
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hash an externally prepared pixel grid.
    ///
    /// Fails with `GridMismatch` if the grid was built for a different
    /// grid size than this hasher.
    pub fn hash_grid(&self, grid: &PixelGrid) -> Result<SortableHash, HashError> {
        let n = self.config.grid_size as usize;
        if grid.size() != n {
            return Err(HashError::GridMismatch {
                expected: n * n,
                actual: grid.size() * grid.size(),
            });
        }
        Ok(self.hash_values(&grid.to_f64()))
    }

    /// Resample, grayscale and hash a decoded image.
    pub fn hash_image(&self, image: &DynamicImage) -> SortableHash {
        let grid = PixelGrid::from_image(image, self.config.grid_size, self.config.grayscale);
        self.hash_values(&grid.to_f64())
    }

    /// Open and hash an image file.
    ///
    /// A missing or undecodable file is reported as `SourceUnavailable`;
    /// the caller decides whether to skip or retry.
    pub fn hash_path<P: AsRef<Path>>(&self, path: P) -> Result<SortableHash, HashError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| HashError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.hash_image(&image))
    }

    /// Core pipeline over a grid already known to be N×N.
    ///
    /// DCT, then threshold the K×K low-frequency block against its mean
    /// with the DC term excluded (so overall luminance does not shift the
    /// threshold), then emit one bit per reorder-table entry, most
    /// significant first.
    fn hash_values(&self, values: &[f64]) -> SortableHash {
        let n = self.config.grid_size as usize;
        let k = self.config.block_size as usize;
        let dct = self.cos.transform(values);

        let mut total = 0.0;
        for u in 0..k {
            for v in 0..k {
                total += dct[u * n + v];
            }
        }
        total -= dct[0];
        // k >= 2 is enforced at construction, the denominator is positive.
        let avg = total / ((k * k - 1) as f64);

        let bit_len = self.reorder.len();
        let mut bits = Vec::with_capacity(bit_len.div_ceil(8));
        let mut acc = 0u8;
        let mut filled = 0;
        for (u, v) in self.reorder.iter() {
            acc = (acc << 1) | (dct[u * n + v] > avg) as u8;
            filled += 1;
            if filled == 8 {
                bits.push(acc);
                acc = 0;
                filled = 0;
            }
        }
        if filled > 0 {
            bits.push(acc << (8 - filled));
        }

        SortableHash { bits, bit_len }
    }
}
