// Library exports for huepal

pub mod error;
pub mod gradient;
pub mod group;
pub mod hue;
pub mod ordered;
pub mod table;

pub use error::{PaletteError, Warning};
pub use group::{Assembled, GroupPalette, GroupSpec, DEFAULT_HUES};
pub use hue::{HuePalette, ShadeGenerator, Shades};
pub use ordered::{merge_after_n, NamedPalette};
pub use table::Table;
