use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::{NodeId, WeightedGraph};

/// How to load one named dataset: a line-oriented edge list plus an
/// optional coordinate file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub name: String,
    pub edge_list: PathBuf,
    /// When false, a third field on an edge line is ignored and every edge
    /// weighs 1.0.
    #[serde(default)]
    pub weighted: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub coords: Option<PathBuf>,
    /// Whether the coordinate file starts with a header row.
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_delimiter() -> String {
    " ".to_string()
}

fn default_has_header() -> bool {
    true
}

/// Summary of a loaded dataset, reported by the shell.
#[derive(Clone, Debug, Serialize)]
pub struct DatasetMeta {
    pub name: String,
    pub nodes: usize,
    pub edges: usize,
    pub weighted: bool,
    pub has_coords: bool,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?}:{line}: unparseable weight {field:?}")]
    BadWeight {
        path: PathBuf,
        line: usize,
        field: String,
    },
    #[error("{path:?}:{line}: negative weight {weight}")]
    NegativeWeight {
        path: PathBuf,
        line: usize,
        weight: f64,
    },
    #[error("{path:?}:{line}: unparseable coordinate row {row:?}")]
    BadCoord {
        path: PathBuf,
        line: usize,
        row: String,
    },
}

impl LoadError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load an undirected graph from a `a b [w]` edge list.
///
/// Blank lines and lines starting with `#` are skipped, as are lines with
/// fewer than two fields. Empty fields are dropped after splitting, so a
/// run of delimiters behaves like a single separator. The weight field is
/// consulted only when `weighted` is set; otherwise, and when the field is
/// absent, the edge weighs 1.0.
pub fn load_edge_list(
    path: &Path,
    weighted: bool,
    delimiter: &str,
) -> Result<WeightedGraph, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut graph = WeightedGraph::new();
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.map_err(|e| LoadError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).filter(|f| !f.is_empty()).collect();
        if fields.len() < 2 {
            continue;
        }

        let a = NodeId::parse(fields[0]);
        let b = NodeId::parse(fields[1]);
        let weight = if weighted && fields.len() >= 3 {
            let w: f64 = fields[2].parse().map_err(|_| LoadError::BadWeight {
                path: path.to_path_buf(),
                line: lineno,
                field: fields[2].to_string(),
            })?;
            if !w.is_finite() {
                return Err(LoadError::BadWeight {
                    path: path.to_path_buf(),
                    line: lineno,
                    field: fields[2].to_string(),
                });
            }
            if w < 0.0 {
                return Err(LoadError::NegativeWeight {
                    path: path.to_path_buf(),
                    line: lineno,
                    weight: w,
                });
            }
            w
        } else {
            1.0
        };
        graph.add_edge(a, b, weight);
    }

    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Attach positions from a `node_id, x, y` file to nodes already in the
/// graph. Rows naming unknown nodes are ignored. Returns how many
/// positions were attached.
pub fn attach_positions(
    graph: &mut WeightedGraph,
    path: &Path,
    has_header: bool,
) -> Result<usize, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut attached = 0;
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.map_err(|e| LoadError::io(path, e))?;
        if has_header && idx == 0 {
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 3 {
            continue;
        }
        let node = NodeId::parse(fields[0]);
        let (Ok(x), Ok(y)) = (fields[1].parse::<f64>(), fields[2].parse::<f64>()) else {
            return Err(LoadError::BadCoord {
                path: path.to_path_buf(),
                line: lineno,
                row: line.to_string(),
            });
        };
        if graph.contains(&node) {
            graph.set_position(node, (x, y));
            attached += 1;
        }
    }

    debug!(path = %path.display(), attached, "attached positions");
    Ok(attached)
}

/// Load the edge list named by `spec` and, when configured, enrich it with
/// coordinates.
pub fn load_dataset(spec: &DatasetSpec) -> Result<(WeightedGraph, DatasetMeta), LoadError> {
    info!(name = %spec.name, path = %spec.edge_list.display(), "loading dataset");
    let mut graph = load_edge_list(&spec.edge_list, spec.weighted, &spec.delimiter)?;

    if let Some(coords) = &spec.coords {
        attach_positions(&mut graph, coords, spec.has_header)?;
    }

    let meta = DatasetMeta {
        name: spec.name.clone(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        weighted: spec.weighted,
        has_coords: graph.has_positions(),
    };
    info!(nodes = meta.nodes, edges = meta.edges, "dataset ready");
    Ok((graph, meta))
}
