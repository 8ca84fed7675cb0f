use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use wayfind_core::DatasetSpec;

/// The named datasets offered by the menu.
pub struct Registry {
    specs: Vec<DatasetSpec>,
}

impl Registry {
    /// The built-in table: the SNAP road networks plus the weighted OSM
    /// extract with coordinates, all expected under `data/`.
    pub fn builtin() -> Self {
        let specs = vec![
            DatasetSpec {
                name: "roadNet-CA".to_string(),
                edge_list: "data/roadNet-CA.txt".into(),
                weighted: false,
                delimiter: "\t".to_string(),
                coords: None,
                has_header: true,
            },
            DatasetSpec {
                name: "roadNet-TX".to_string(),
                edge_list: "data/roadNet-TX.txt".into(),
                weighted: false,
                delimiter: "\t".to_string(),
                coords: None,
                has_header: true,
            },
            DatasetSpec {
                name: "OSM-Florida".to_string(),
                edge_list: "data/osm_florida_edges.txt".into(),
                weighted: true,
                delimiter: " ".to_string(),
                coords: Some("data/osm_florida_coords.csv".into()),
                has_header: true,
            },
        ];
        Registry { specs }
    }

    /// Load a replacement registry from a JSON array of dataset specs.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading dataset registry {}", path.display()))?;
        let specs: Vec<DatasetSpec> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing dataset registry {}", path.display()))?;
        anyhow::ensure!(!specs.is_empty(), "dataset registry {} is empty", path.display());
        Ok(Registry { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn specs(&self) -> &[DatasetSpec] {
        &self.specs
    }
}
