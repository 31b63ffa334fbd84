// Sequential single-hue gradients in HCL (polar CIE-LUV) space

use palette::{FromColor, Lchuv, Srgb};

/// One step of a sequential gradient, before conversion to sRGB
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HclStep {
    pub luminance: f64,
    pub chroma: f64,
    pub hue: f64,
}

impl HclStep {
    /// Convert to an sRGB hex string, clamping out-of-gamut colors
    pub fn to_hex(&self) -> String {
        let lch: Lchuv = Lchuv::new(
            self.luminance as f32,
            self.chroma as f32,
            self.hue as f32,
        );
        let rgb: Srgb = Srgb::from_color(lch);
        srgb_to_hex(&rgb)
    }
}

/// Compute the `n` HCL steps of a sequential gradient at a fixed hue.
///
/// Luminance rises linearly from `luminance.0` to `luminance.1` as `i`
/// goes from 1 to 0. Chroma follows a triangle over `i^power`: `chroma.0`
/// at both ends, `chroma.1` in the middle.
pub fn sequential_steps(
    n: usize,
    hue: f64,
    chroma: (f64, f64),
    luminance: (f64, f64),
    power: f64,
) -> Vec<HclStep> {
    let (min_c, max_c) = chroma;
    let (min_l, max_l) = luminance;

    (0..n)
        .map(|k| {
            let i = if n <= 1 {
                1.0
            } else {
                1.0 - k as f64 / (n - 1) as f64
            };
            let t = i.powf(power);
            let luminance = min_l + (max_l - min_l) * (1.0 - i);
            let chroma = if t <= 0.5 {
                min_c + (max_c - min_c) * t / 0.5
            } else {
                max_c - (max_c - min_c) * (t - 0.5) / 0.5
            };
            HclStep {
                luminance,
                chroma,
                hue,
            }
        })
        .collect()
}

/// Generate `n` hex colors of a sequential gradient at a fixed hue
pub fn sequential_hcl(
    n: usize,
    hue: f64,
    chroma: (f64, f64),
    luminance: (f64, f64),
    power: f64,
) -> Vec<String> {
    sequential_steps(n, hue, chroma, luminance, power)
        .iter()
        .map(HclStep::to_hex)
        .collect()
}

fn srgb_to_hex(color: &Srgb) -> String {
    let rgb: Srgb<u8> = color.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
