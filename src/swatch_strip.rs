use crate::{
    error::{Error, Result},
    DominantColor,
};
use image::{Rgb, RgbImage};
use std::path::Path;

pub const DEFAULT_SWATCH_SIZE: u32 = 64;
pub const MAX_SWATCH_SIZE: u32 = 4096;

/// Render the colors as a single row of `swatch_size` squares, left to right in the given order.
///
/// Fails if `swatch_size` is above [`MAX_SWATCH_SIZE`] or the strip would not fit in an image buffer.
pub fn render(colors: &[DominantColor], swatch_size: u32) -> Result<RgbImage> {
    let too_large = || Error::SwatchStripTooLarge {
        colors: colors.len(),
        swatch_size,
    };

    if swatch_size > MAX_SWATCH_SIZE {
        return Err(too_large());
    }

    let swatch_size = swatch_size.max(1);
    let width = strip_width(colors.len(), swatch_size).ok_or_else(too_large)?;

    Ok(RgbImage::from_fn(width, swatch_size, |x, _| {
        colors
            .get((x / swatch_size) as usize)
            .map(|color| {
                let (r, g, b) = color.rgb();
                Rgb([r, g, b])
            })
            .unwrap_or(Rgb([0, 0, 0]))
    }))
}

fn strip_width(colors: usize, swatch_size: u32) -> Option<u32> {
    let width = u32::try_from(colors.max(1)).ok()?.checked_mul(swatch_size)?;

    // three bytes per pixel must still be addressable
    (width as usize)
        .checked_mul(swatch_size as usize)?
        .checked_mul(3)?;

    Some(width)
}

/// Render the colors and write the strip to `path`. The file extension picks the image format.
pub fn save(colors: &[DominantColor], swatch_size: u32, path: &Path) -> Result<()> {
    render(colors, swatch_size)?.save(path)?;
    tracing::info!(path = %path.display(), colors = colors.len(), "wrote swatch strip");

    Ok(())
}
