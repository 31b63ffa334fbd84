// Two-level palettes: one hue per group, one shade per sub-category

use crate::error::{PaletteError, Warning};
use crate::hue::{HuePalette, ShadeGenerator};
use crate::ordered::NamedPalette;
use crate::table::{cell, Table};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Hues handed out to groups, in order of first appearance
pub const DEFAULT_HUES: [f64; 12] = [
    15.0, 255.0, 135.0, 315.0, 75.0, 195.0, 45.0, 285.0, 165.0, 345.0, 105.0, 225.0,
];

/// Color used for the default "Other" override
pub const OTHER_COLOR: &str = "#BEBEBE";

/// Which column selects the hue, with optional fixed hues for some of
/// its values
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    pub column: String,
    pub hues: Vec<(String, f64)>,
}

impl GroupSpec {
    pub fn column(column: impl Into<String>) -> Self {
        GroupSpec {
            column: column.into(),
            hues: Vec::new(),
        }
    }

    /// Build from a mapping `column -> {group value -> hue}`.
    /// The mapping must name exactly one column.
    pub fn from_mapping<I, V>(mapping: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (String, V)>,
        V: IntoIterator<Item = (String, f64)>,
    {
        let mut entries: Vec<(String, V)> = mapping.into_iter().collect();
        if entries.len() != 1 {
            return Err(PaletteError::InvalidArgument(format!(
                "group mapping must name exactly one column, got {}",
                entries.len()
            )));
        }
        let (column, hues) = entries.remove(0);
        Ok(GroupSpec {
            column,
            hues: hues.into_iter().collect(),
        })
    }

    pub fn with_hue(mut self, value: impl Into<String>, hue: f64) -> Self {
        self.hues.push((value.into(), hue));
        self
    }
}

impl From<&str> for GroupSpec {
    fn from(column: &str) -> Self {
        GroupSpec::column(column)
    }
}

impl From<String> for GroupSpec {
    fn from(column: String) -> Self {
        GroupSpec::column(column)
    }
}

/// Result of [`GroupPalette::build`]
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    /// Shade name to color, in group order then shade order
    pub palette: NamedPalette,
    /// Hue used for each group value, in order of first appearance
    pub hues: Vec<(String, f64)>,
    pub warnings: Vec<Warning>,
}

/// Builder for a two-level categorical palette
pub struct GroupPalette {
    group: GroupSpec,
    shade: String,
    max_shades: Option<usize>,
    hues: Vec<f64>,
    generator: Box<dyn ShadeGenerator>,
    manual: Vec<(String, String)>,
}

impl GroupPalette {
    pub fn new(group: impl Into<GroupSpec>, shade: impl Into<String>) -> Self {
        GroupPalette {
            group: group.into(),
            shade: shade.into(),
            max_shades: None,
            hues: DEFAULT_HUES.to_vec(),
            generator: Box::new(HuePalette::default()),
            manual: vec![("Other".to_string(), OTHER_COLOR.to_string())],
        }
    }

    /// Cap on distinct shades per group; extra shades reuse the last color
    pub fn max_shades(mut self, n: usize) -> Self {
        self.max_shades = Some(n);
        self
    }

    pub fn hues(mut self, hues: impl IntoIterator<Item = f64>) -> Self {
        self.hues = hues.into_iter().collect();
        self
    }

    pub fn generator(mut self, generator: impl ShadeGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Replace the manual overrides, including the default "Other" entry
    pub fn manual<N, C>(mut self, manual: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        self.manual = manual
            .into_iter()
            .map(|(name, color)| (name.into(), color.into()))
            .collect();
        self
    }

    pub fn build(&self, table: &Table) -> Result<Assembled, PaletteError> {
        let group_idx = table.column_index(&self.group.column)?;
        let shade_idx = table.column_index(&self.shade)?;

        // 1. Partition rows by group; row order is kept within each partition
        let order = table.distinct_in_order(&self.group.column)?;
        let mut partitions: HashMap<&str, Vec<String>> = HashMap::new();
        for row in &table.rows {
            let group = cell(row, group_idx);
            partitions
                .entry(group)
                .or_default()
                .push(cell(row, shade_idx).to_string());
        }

        // 2. Assign hues
        if order.len() > self.hues.len() {
            return Err(PaletteError::InsufficientHues {
                groups: order.len(),
                hues: self.hues.len(),
            });
        }
        let mut hues: Vec<(String, f64)> = order
            .into_iter()
            .zip(self.hues.iter().copied())
            .collect();
        for (value, hue) in &self.group.hues {
            if let Some(entry) = hues.iter_mut().find(|(group, _)| group == value) {
                entry.1 = *hue;
            }
        }

        // 3. Generate and merge
        let mut palette = NamedPalette::new();
        let mut collisions: Vec<String> = Vec::new();
        for (group, hue) in &hues {
            debug!(group = %group, hue, "assigning hue");
            let names = &partitions[group.as_str()];
            let shades = self.generator.shades(*hue, names, self.max_shades)?;
            for (name, color) in shades {
                if palette.insert(name.clone(), color).is_some() && !collisions.contains(&name) {
                    collisions.push(name);
                }
            }
        }

        let mut warnings = Vec::new();
        if !collisions.is_empty() {
            let warning = Warning::NameCollision {
                shade_column: self.shade.clone(),
                group_column: self.group.column.clone(),
                names: collisions,
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        // 4. Manual overrides win over everything
        for (name, color) in &self.manual {
            palette.insert(name.clone(), color.clone());
        }

        Ok(Assembled {
            palette,
            hues,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn continents() -> Table {
        let rows = [
            ("Europe", "France"),
            ("Asia", "Japan"),
            ("Europe", "Spain"),
            ("Africa", "Kenya"),
            ("Asia", "India"),
            ("Europe", "Italy"),
        ];
        Table::new(["continent", "country"], rows.iter().map(|(c, p)| [*c, *p]))
    }

    #[test]
    fn test_hues_follow_first_appearance() {
        let result = GroupPalette::new("continent", "country")
            .hues([10.0, 20.0, 30.0])
            .build(&continents())
            .unwrap();
        assert_eq!(
            result.hues,
            vec![
                ("Europe".to_string(), 10.0),
                ("Asia".to_string(), 20.0),
                ("Africa".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn test_palette_order_is_group_then_shade() {
        let result = GroupPalette::new("continent", "country")
            .manual(Vec::<(String, String)>::new())
            .build(&continents())
            .unwrap();
        assert_eq!(
            result.palette.names().collect::<Vec<_>>(),
            vec!["France", "Spain", "Italy", "Japan", "India", "Kenya"]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_shades_use_group_hue() {
        let hue_palette = HuePalette::default();
        let result = GroupPalette::new("continent", "country")
            .hues([10.0, 20.0, 30.0])
            .build(&continents())
            .unwrap();
        let europe = hue_palette.colors(10.0, 3);
        assert_eq!(result.palette.get("France"), Some(europe[0].as_str()));
        assert_eq!(result.palette.get("Italy"), Some(europe[2].as_str()));
        assert_eq!(result.palette.get("Kenya"), Some(hue_palette.colors(30.0, 1)[0].as_str()));
    }

    #[test]
    fn test_missing_group_column() {
        let err = GroupPalette::new("region", "country").build(&continents()).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::MissingColumn { ref column, .. } if column == "region"
        ));
    }

    #[test]
    fn test_group_order_includes_empty_group_value() {
        let table = Table::new(
            ["g", "s"],
            [["b", "x"], ["a", "y"], ["b", "z"], ["", "w"], ["a", "v"]],
        );
        let result = GroupPalette::new("g", "s")
            .hues([1.0, 2.0, 3.0])
            .manual(Vec::<(String, String)>::new())
            .build(&table)
            .unwrap();
        assert_eq!(
            result.hues,
            vec![
                ("b".to_string(), 1.0),
                ("a".to_string(), 2.0),
                ("".to_string(), 3.0),
            ]
        );
        assert_eq!(
            result.palette.names().collect::<Vec<_>>(),
            vec!["x", "z", "y", "v", "w"]
        );
    }

    #[test]
    fn test_missing_shade_column() {
        let err = GroupPalette::new("continent", "city").build(&continents()).unwrap_err();
        assert!(matches!(err, PaletteError::MissingColumn { ref column, .. } if column == "city"));
    }

    #[test]
    fn test_insufficient_hues() {
        let err = GroupPalette::new("continent", "country")
            .hues([10.0, 20.0])
            .build(&continents())
            .unwrap_err();
        assert_eq!(err, PaletteError::InsufficientHues { groups: 3, hues: 2 });
    }

    #[test]
    fn test_explicit_group_hue_replaces_assignment() {
        let group = GroupSpec::column("continent").with_hue("Asia", 90.0);
        let result = GroupPalette::new(group, "country")
            .hues([10.0, 20.0, 30.0])
            .build(&continents())
            .unwrap();
        assert_eq!(result.hues[0].1, 10.0);
        assert_eq!(result.hues[1], ("Asia".to_string(), 90.0));
        assert_eq!(result.hues[2].1, 30.0);
        assert_eq!(
            result.palette.get("Japan"),
            Some(HuePalette::default().colors(90.0, 2)[0].as_str())
        );
    }

    #[test]
    fn test_from_mapping_rejects_several_columns() {
        let mapping = vec![
            ("continent".to_string(), vec![("Asia".to_string(), 90.0)]),
            ("region".to_string(), vec![]),
        ];
        let err = GroupSpec::from_mapping(mapping).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_mapping_single_column() {
        let mapping = vec![("continent".to_string(), vec![("Asia".to_string(), 90.0)])];
        let spec = GroupSpec::from_mapping(mapping).unwrap();
        assert_eq!(spec, GroupSpec::column("continent").with_hue("Asia", 90.0));
    }

    #[test]
    fn test_default_other_override() {
        let table = Table::new(["g", "s"], [["a", "x"], ["a", "Other"]]);
        let result = GroupPalette::new("g", "s").build(&table).unwrap();
        assert_eq!(result.palette.get("Other"), Some(OTHER_COLOR));
        assert_eq!(result.palette.len(), 2);
    }

    #[test]
    fn test_manual_adds_new_names() {
        let table = Table::new(["g", "s"], [["a", "x"]]);
        let result = GroupPalette::new("g", "s")
            .manual([("Missing", "black")])
            .build(&table)
            .unwrap();
        assert_eq!(result.palette.names().collect::<Vec<_>>(), vec!["x", "Missing"]);
        assert_eq!(result.palette.get("Missing"), Some("black"));
    }

    #[test]
    fn test_collision_later_group_wins() {
        let table = Table::new(["g", "s"], [["a", "X"], ["a", "y"], ["b", "X"]]);
        let result = GroupPalette::new("g", "s")
            .hues([10.0, 200.0])
            .build(&table)
            .unwrap();

        assert_eq!(result.palette.len(), 3);
        let later = HuePalette::default().colors(200.0, 1);
        assert_eq!(result.palette.get("X"), Some(later[0].as_str()));
        assert_eq!(
            result.warnings,
            vec![Warning::NameCollision {
                shade_column: "s".to_string(),
                group_column: "g".to_string(),
                names: vec!["X".to_string()],
            }]
        );
    }

    #[test]
    fn test_custom_generator_receives_max_shades() {
        let generator = |hue: f64,
                         names: &[String],
                         n: Option<usize>|
         -> Result<NamedPalette, PaletteError> {
            assert_eq!(n, Some(4));
            Ok(names
                .iter()
                .map(|name| (name.clone(), format!("hue-{}", hue)))
                .collect())
        };
        let result = GroupPalette::new("continent", "country")
            .hues([1.0, 2.0, 3.0])
            .max_shades(4)
            .generator(generator)
            .build(&continents())
            .unwrap();
        assert_eq!(result.palette.get("India"), Some("hue-2"));
    }

    #[test]
    fn test_generator_error_propagates() {
        let failing = |_: f64,
                       _: &[String],
                       _: Option<usize>|
         -> Result<NamedPalette, PaletteError> {
            Err(PaletteError::InvalidArgument("boom".to_string()))
        };
        let result = GroupPalette::new("continent", "country")
            .generator(failing)
            .build(&continents());
        assert!(matches!(result, Err(PaletteError::InvalidArgument(_))));
    }
}
