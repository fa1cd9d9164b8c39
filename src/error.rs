use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while extracting dominant colors.
#[derive(Debug, Error)]
pub enum Error {
    /// The image file could not be opened or decoded.
    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image has no pixels.
    #[error("image has no pixels")]
    EmptyImage,

    /// Zero colors were requested.
    #[error("invalid color count: at least one color must be requested")]
    InvalidColorCount,

    /// More colors were requested than there are pixels to cluster.
    #[error("too few pixels: requested {requested} colors, but the scaled image has {available} pixels")]
    TooFewPixels { requested: usize, available: usize },

    /// More colors were requested than the clustering can label.
    #[error("too many colors: requested {requested}, at most {max} are supported")]
    TooManyColors { requested: usize, max: usize },

    /// The swatch strip would not fit in an image buffer.
    #[error("swatch strip of {colors} squares of {swatch_size} px is too large")]
    SwatchStripTooLarge { colors: usize, swatch_size: u32 },

    /// The swatch strip could not be written.
    #[error("failed to render swatch strip: {0}")]
    Render(#[from] image::ImageError),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
