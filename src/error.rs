use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the hashing core.
///
/// Construction-time variants (`InvalidConfiguration`, `DegenerateInput`)
/// are fatal: the caller must fix the parameters before a `Hasher` can be
/// built. Per-call variants (`GridMismatch`, `SourceUnavailable`) are
/// recoverable: skip the input or retry with a different source. The core
/// never retries internally and never returns a partial hash.
#[derive(Debug, Error)]
pub enum HashError {
    /// The low-frequency block does not fit inside the transform output.
    #[error("invalid configuration: block size {block_size} exceeds grid size {grid_size}")]
    InvalidConfiguration { grid_size: u32, block_size: u32 },

    /// A block size below 2 makes the threshold denominator (K² - 1) zero
    /// or the hash empty. Rejected at configuration time so the division
    /// can never be reached at call time.
    #[error("degenerate block size {block_size}: must be at least 2")]
    DegenerateInput { block_size: u32 },

    /// The supplied pixel grid does not match the configured grid size.
    #[error("pixel grid holds {actual} values, expected {expected}")]
    GridMismatch { expected: usize, actual: usize },

    /// The source image could not be opened or decoded.
    #[error("source image unavailable: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
