// Single-hue palettes for categorical shades

use crate::error::PaletteError;
use crate::gradient;
use crate::ordered::{repeat_last, unique_in_order, NamedPalette};

/// Styling of a single-hue palette.
///
/// Build one with the styling you want, then call it for any hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuePalette {
    pub min_chroma: f64,
    pub max_chroma: f64,
    pub min_luminance: f64,
    pub max_luminance: f64,
    pub power: f64,
}

impl Default for HuePalette {
    fn default() -> Self {
        HuePalette {
            min_chroma: 20.0,
            max_chroma: 80.0,
            min_luminance: 20.0,
            max_luminance: 90.0,
            power: 1.3,
        }
    }
}

/// Output of [`HuePalette::generate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Shades {
    Unnamed(Vec<String>),
    Named(NamedPalette),
}

impl Shades {
    pub fn len(&self) -> usize {
        match self {
            Shades::Unnamed(colors) => colors.len(),
            Shades::Named(palette) => palette.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Colors in order, with or without names attached
    pub fn colors(&self) -> Vec<String> {
        match self {
            Shades::Unnamed(colors) => colors.clone(),
            Shades::Named(palette) => palette.colors().map(str::to_string).collect(),
        }
    }
}

impl HuePalette {
    pub fn chroma(mut self, min: f64, max: f64) -> Self {
        self.min_chroma = min;
        self.max_chroma = max;
        self
    }

    pub fn luminance(mut self, min: f64, max: f64) -> Self {
        self.min_luminance = min;
        self.max_luminance = max;
        self
    }

    pub fn power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// `n` colors at `hue`, dark to light.
    ///
    /// The gradient is computed with two extra steps and its darkest and
    /// lightest colors are dropped: they are too close to black and white
    /// to tell hues apart.
    pub fn colors(&self, hue: f64, n: usize) -> Vec<String> {
        let mut colors = gradient::sequential_hcl(
            n + 2,
            hue,
            (self.min_chroma, self.max_chroma),
            (self.min_luminance, self.max_luminance),
            self.power,
        );
        colors.pop();
        colors.remove(0);
        colors
    }

    /// Generate shades at `hue` for `names` and/or a count `n`.
    ///
    /// With names, one entry is produced per distinct name in order of
    /// first occurrence. `n` caps the number of distinct colors: names past
    /// the `n`th reuse the last color.
    pub fn generate<S: AsRef<str>>(
        &self,
        hue: f64,
        names: Option<&[S]>,
        n: Option<usize>,
    ) -> Result<Shades, PaletteError> {
        let names = match (names, n) {
            (None, None) => {
                return Err(PaletteError::InvalidArgument(
                    "either names or n must be supplied".to_string(),
                ))
            }
            (None, Some(n)) => return Ok(Shades::Unnamed(self.colors(hue, n))),
            (Some(names), _) => names,
        };

        let names: Vec<&str> = names.iter().map(|s| s.as_ref()).collect();
        let names = unique_in_order(&names);
        // A zero cap would leave the names without colors
        let n = match n {
            Some(n) if n > 0 => n,
            _ => names.len(),
        };

        let colors = repeat_last(self.colors(hue, n), names.len());
        Ok(Shades::Named(names.into_iter().zip(colors).collect()))
    }
}

/// Produces the named shades of one group.
///
/// Implemented by [`HuePalette`] and by closures with the same shape, so a
/// group palette can be built around any single-hue scheme.
pub trait ShadeGenerator {
    fn shades(
        &self,
        hue: f64,
        names: &[String],
        n: Option<usize>,
    ) -> Result<NamedPalette, PaletteError>;
}

impl ShadeGenerator for HuePalette {
    fn shades(
        &self,
        hue: f64,
        names: &[String],
        n: Option<usize>,
    ) -> Result<NamedPalette, PaletteError> {
        match self.generate(hue, Some(names), n)? {
            Shades::Named(palette) => Ok(palette),
            Shades::Unnamed(colors) => Ok(names.iter().cloned().zip(colors).collect()),
        }
    }
}

impl<F> ShadeGenerator for F
where
    F: Fn(f64, &[String], Option<usize>) -> Result<NamedPalette, PaletteError>,
{
    fn shades(
        &self,
        hue: f64,
        names: &[String],
        n: Option<usize>,
    ) -> Result<NamedPalette, PaletteError> {
        self(hue, names, n)
    }
}
