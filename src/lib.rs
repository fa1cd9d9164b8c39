// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the dominant colors from an image.
//!
//! The image is scaled down to half its size in each dimension, its pixels are clustered in RGB space with
//! [`kmeans_colors`] using a fixed seed, and the cluster centers are ranked by how many pixels belong to them.
//!
//! ```no_run
//! let colors = dominance::DominantColors::open("photo.jpg").color_count(5).extract()?;
//!
//! for color in colors.colors() {
//!     println!("{} {}", color.hex(), color.population());
//! }
//! # Ok::<(), dominance::Error>(())
//! ```

mod dominant_color;
pub mod error;
mod preprocess;
pub mod swatch_strip;

pub const DEFAULT_COLOR_COUNT: usize = 10;
pub const SCALE_FACTOR: f32 = 0.5;
pub const RANDOM_SEED: u64 = 42;
pub const MAX_ITERATIONS: usize = 300;
/// Clustering stops once the centroids move less than this in total between two iterations, on RGB channels scaled
/// to `0.0..=1.0`.
pub const CONVERGENCE: f32 = 0.0025;
/// Cluster labels are single bytes, so no more colors than this can be told apart.
pub const MAX_COLOR_COUNT: usize = 256;

pub use crate::{
    dominant_color::DominantColor,
    error::{Error, Result},
};
pub use image;

use image::DynamicImage;
use kmeans_colors::get_kmeans;
use palette::{IntoColor, Srgb};
use std::path::{Path, PathBuf};

/// Dominant colors of an image, ordered from the most to the least dominant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominantColors {
    colors: Vec<DominantColor>,
    total_population: u32,
}

enum Source {
    Image(DynamicImage),
    Path(PathBuf),
}

pub struct DominantColorsBuilder {
    source: Source,
    color_count: usize,
}

impl DominantColors {
    pub fn from_image(image: DynamicImage) -> DominantColorsBuilder {
        DominantColorsBuilder::from_image(image)
    }

    pub fn open<P>(path: P) -> DominantColorsBuilder
    where
        P: AsRef<Path>,
    {
        DominantColorsBuilder::open(path)
    }

    pub fn colors(&self) -> &[DominantColor] {
        &self.colors
    }

    pub fn rgb(&self) -> Vec<(u8, u8, u8)> {
        self.colors.iter().map(|color| color.rgb()).collect()
    }

    pub fn most_dominant(&self) -> Option<DominantColor> {
        self.colors.first().copied()
    }

    /// The number of pixels that were clustered, after scaling the image down.
    pub fn total_population(&self) -> u32 {
        self.total_population
    }

    /// The share of clustered pixels belonging to the color at `index`, in `0.0..=1.0`.
    pub fn proportion(&self, index: usize) -> Option<f32> {
        let color = self.colors.get(index)?;

        if self.total_population == 0 {
            Some(0.0)
        } else {
            Some(color.population() as f32 / self.total_population as f32)
        }
    }

    fn rank(centers: &[Srgb], counts: &[u32]) -> DominantColors {
        let mut order: Vec<usize> = (0..centers.len()).collect();

        // stable, so clusters of equal size keep their cluster order
        order.sort_by(|&lhs, &rhs| counts[rhs].cmp(&counts[lhs]));

        let colors = order
            .into_iter()
            .map(|cluster| DominantColor::new(center_to_rgb(&centers[cluster]), counts[cluster]))
            .collect();

        Self {
            colors,
            total_population: counts.iter().sum(),
        }
    }
}

impl DominantColorsBuilder {
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            source: Source::Image(image),
            color_count: DEFAULT_COLOR_COUNT,
        }
    }

    /// Build from an image file. The file is only read once [`DominantColorsBuilder::extract`] is called.
    pub fn open<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            source: Source::Path(path.as_ref().to_path_buf()),
            color_count: DEFAULT_COLOR_COUNT,
        }
    }

    pub fn color_count(self, color_count: usize) -> Self {
        Self { color_count, ..self }
    }

    pub fn extract(self) -> Result<DominantColors> {
        let image = match self.source {
            Source::Image(image) => image,
            Source::Path(path) => preprocess::load(&path)?,
        };

        extract_from(&image, self.color_count)
    }
}

/// Extract `n_colors` dominant colors from the image, most dominant first.
pub fn get_dominant_colors(image: &DynamicImage, n_colors: usize) -> Result<Vec<(u8, u8, u8)>> {
    Ok(extract_from(image, n_colors)?.rgb())
}

fn extract_from(image: &DynamicImage, color_count: usize) -> Result<DominantColors> {
    if color_count == 0 {
        return Err(Error::InvalidColorCount);
    }

    if color_count > MAX_COLOR_COUNT {
        return Err(Error::TooManyColors {
            requested: color_count,
            max: MAX_COLOR_COUNT,
        });
    }

    let samples = preprocess::pixel_matrix(image, SCALE_FACTOR)?;

    if samples.len() < color_count {
        return Err(Error::TooFewPixels {
            requested: color_count,
            available: samples.len(),
        });
    }

    tracing::debug!(samples = samples.len(), color_count, "clustering pixels");
    let result = get_kmeans(color_count, MAX_ITERATIONS, CONVERGENCE, false, &samples, RANDOM_SEED);

    let mut counts = vec![0; result.centroids.len()];
    for &index in &result.indices {
        counts[index as usize] += 1;
    }

    let colors = DominantColors::rank(&result.centroids, &counts);

    tracing::debug!(score = result.score, ?colors, "ranked dominant colors");
    Ok(colors)
}

fn center_to_rgb(center: &Srgb) -> (u8, u8, u8) {
    let channel = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;

    (channel(center.red), channel(center.green), channel(center.blue))
}

fn rgb_to_hsl(rgb: (u8, u8, u8)) -> (f32, f32, f32) {
    let raw = palette::Srgb::from_components(rgb);
    let raw_float: palette::Srgb<f32> = raw.into_format();
    let hsl: palette::Hsl = raw_float.into_color();
    let (h, s, l) = hsl.into_components();

    (h.to_positive_degrees(), s, l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_descending_population() {
        let centers = [
            Srgb::new(0.0, 0.0, 0.0),
            Srgb::new(1.0, 1.0, 1.0),
            Srgb::new(0.5, 0.5, 0.5),
        ];
        let colors = DominantColors::rank(&centers, &[5, 9, 5]);

        // equal populations keep their cluster order
        assert_eq!(colors.rgb(), vec![(255, 255, 255), (0, 0, 0), (128, 128, 128)]);
        assert_eq!(colors.total_population(), 19);
    }

    #[test]
    fn centers_round_to_the_nearest_channel_value() {
        let center = Srgb::new(11.9999 / 255.0, 1.2 / 255.0, 1.02);

        assert_eq!(center_to_rgb(&center), (12, 1, 255));
    }

    #[test]
    fn proportion_of_missing_index_is_none() {
        let colors = DominantColors::rank(&[Srgb::new(0.0, 0.0, 0.0)], &[4]);

        assert_eq!(colors.proportion(0), Some(1.0));
        assert_eq!(colors.proportion(1), None);
    }
}
