use crate::config::GrayscalePolicy;
use crate::error::HashError;
use image::{DynamicImage, imageops::FilterType};

/// A square grid of grayscale intensities, ready for the DCT.
///
/// Row-major: `data[i * size + j]` is row `i`, column `j`. Consumed by a
/// single hash call; the hasher never retains it.
#[derive(Debug)]
pub struct PixelGrid {
    size: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap an externally produced intensity grid.
    pub fn from_raw(size: usize, data: Vec<u8>) -> Result<Self, HashError> {
        if data.len() != size * size {
            return Err(HashError::GridMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Resample an image to `size`×`size` and extract one intensity
    /// channel according to `policy`.
    ///
    /// Triangle filtering averages neighborhoods during downscale, which
    /// is what a reduced-resolution grid for frequency analysis wants
    /// (nearest-neighbor would alias fine detail into the low
    /// frequencies).
    pub fn from_image(image: &DynamicImage, size: u32, policy: GrayscalePolicy) -> Self {
        let resized = image.resize_exact(size, size, FilterType::Triangle);
        let data = match policy {
            GrayscalePolicy::Luma => resized.to_luma8().into_raw(),
            GrayscalePolicy::Blue => resized
                .to_rgb8()
                .pixels()
                .map(|pixel| pixel[2])
                .collect(),
        };
        Self {
            size: size as usize,
            data,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Intensities widened to `f64` for the transform.
    pub fn to_f64(&self) -> Vec<f64> {
        self.data.iter().map(|&value| value as f64).collect()
    }
}
