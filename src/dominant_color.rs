#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominantColor {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
}

impl DominantColor {
    pub fn new((red, green, blue): (u8, u8, u8), population: u32) -> DominantColor {
        Self {
            red,
            green,
            blue,
            population,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Hue in positive degrees, saturation and lightness in `0.0..=1.0`.
    pub fn hsl(self) -> (f32, f32, f32) {
        crate::rgb_to_hsl(self.rgb())
    }

    /// The color as a lowercase `#rrggbb` string.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// How many of the clustered pixels belong to this color.
    pub fn population(self) -> u32 {
        self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(DominantColor::new((255, 8, 0), 1).hex(), "#ff0800");
    }

    #[test]
    fn hsl_of_pure_blue() {
        let (h, s, l) = DominantColor::new((0, 0, 255), 1).hsl();

        assert!((h - 240.0).abs() < 1e-3);
        assert!((s - 1.0).abs() < 1e-6);
        assert!((l - 0.5).abs() < 1e-6);
    }
}
