// Error taxonomy and non-fatal warnings for palette generation

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Structural errors that abort palette generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Column '{column}' not found. Available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Not enough hues: {groups} distinct group values but only {hues} hues available")]
    InsufficientHues { groups: usize, hues: usize },
}

/// Conditions reported alongside a usable result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The same shade value was produced under more than one group value.
    /// The color of the group processed last is the one kept.
    NameCollision {
        shade_column: String,
        group_column: String,
        names: Vec<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NameCollision {
                shade_column,
                group_column,
                names,
            } => write!(
                f,
                "Values of '{}' appear under several values of '{}': {}",
                shade_column,
                group_column,
                names.join(", ")
            ),
        }
    }
}
