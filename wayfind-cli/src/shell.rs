use std::fmt::Write as _;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{error, info};

use wayfind_core::{
    astar, dijkstra, load_dataset, DatasetMeta, HeuristicMode, NodeId, WeightedGraph,
};

use crate::bench::{measure, Measured};
use crate::registry::Registry;

const RULE_WIDTH: usize = 56;

/// The interactive menu: pick a dataset, then repeatedly pick endpoints
/// and an algorithm, and read the comparison table.
pub struct Shell {
    editor: DefaultEditor,
    registry: Registry,
}

impl Shell {
    pub fn new(registry: Registry) -> Result<Self> {
        Ok(Shell {
            editor: DefaultEditor::new()?,
            registry,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        print_banner();
        loop {
            let Some(idx) = self.select_dataset()? else {
                return Ok(());
            };
            let spec = self.registry.specs()[idx].clone();

            println!("\nLoading graph... (this may take some time)");
            let (graph, meta) = match load_dataset(&spec) {
                Ok(loaded) => loaded,
                Err(e) => {
                    error!(dataset = %spec.name, error = %e, "dataset load failed");
                    println!("Failed to load '{}': {e}", spec.name);
                    continue;
                }
            };
            println!(
                "Loaded '{}' with {} nodes and {} edges.",
                meta.name, meta.nodes, meta.edges
            );
            if !meta.has_coords {
                println!(
                    "Note: No coordinate information found. \
                     A* will fall back to h(n)=0 (equivalent to Dijkstra)."
                );
            }
            return self.session(&graph, &meta);
        }
    }

    /// The per-dataset query loop. Returns when the user exits.
    fn session(&mut self, graph: &WeightedGraph, meta: &DatasetMeta) -> Result<()> {
        loop {
            println!("\n{}", "-".repeat(40));
            let Some(start) = self.read_node("Enter Start Node: ")? else {
                return Ok(());
            };
            let Some(goal) = self.read_node("Enter End Node: ")? else {
                return Ok(());
            };
            if !graph.contains(&start) || !graph.contains(&goal) {
                println!("Either the start or end node does not exist in the graph.");
                continue;
            }

            println!("\nSelect Algorithm:");
            println!("  (1) Dijkstra");
            println!("  (2) A*");
            let Some(choice) = self.read_line("Choice [1-2]: ")? else {
                return Ok(());
            };
            let choice = choice.trim().to_string();

            println!("\nOptions:");
            println!("  [R] Run selected algorithm");
            println!("  [C] Compare both algorithms");
            println!("  [E] Exit");
            let Some(action) = self.read_line("Select action [R/C/E]: ")? else {
                return Ok(());
            };

            let mut runs: Vec<(&str, Measured)> = Vec::new();
            match action.trim().to_lowercase().as_str() {
                "e" => {
                    println!("Exiting...");
                    return Ok(());
                }
                "r" => match choice.as_str() {
                    "1" => {
                        println!("\nRunning Dijkstra...");
                        runs.push(self.run_dijkstra(graph, &start, &goal));
                    }
                    "2" => {
                        println!("\nRunning A*...");
                        let Some(mode) = self.read_heuristic(meta)? else {
                            return Ok(());
                        };
                        runs.push(self.run_astar(graph, &start, &goal, mode));
                    }
                    _ => {
                        println!("Invalid algorithm selection.");
                        continue;
                    }
                },
                "c" => {
                    println!("\nRunning Dijkstra and A* for comparison...");
                    let Some(mode) = self.read_heuristic(meta)? else {
                        return Ok(());
                    };
                    runs.push(self.run_dijkstra(graph, &start, &goal));
                    runs.push(self.run_astar(graph, &start, &goal, mode));
                }
                _ => {
                    println!("Invalid action.");
                    continue;
                }
            }

            print!("{}", render_table(&runs));
            for (name, measured) in &runs {
                let res = &measured.result;
                if res.is_reachable() {
                    println!(
                        "{name} found a path with length {} and total distance {:.2}.",
                        res.path.len(),
                        res.distance
                    );
                } else {
                    println!("{name} could not find a path between the given nodes.");
                }
            }
        }
    }

    fn run_dijkstra(
        &self,
        graph: &WeightedGraph,
        start: &NodeId,
        goal: &NodeId,
    ) -> (&'static str, Measured) {
        info!(%start, %goal, "running dijkstra");
        ("Dijkstra", measure(|| dijkstra(graph, start, goal)))
    }

    fn run_astar(
        &self,
        graph: &WeightedGraph,
        start: &NodeId,
        goal: &NodeId,
        mode: HeuristicMode,
    ) -> (&'static str, Measured) {
        info!(%start, %goal, ?mode, "running astar");
        ("A*", measure(|| astar(graph, start, goal, mode)))
    }

    fn select_dataset(&mut self) -> Result<Option<usize>> {
        println!("\nAvailable Datasets:");
        for (i, spec) in self.registry.specs().iter().enumerate() {
            println!("  ({}) {}", i + 1, spec.name);
        }
        let count = self.registry.len();
        loop {
            let Some(line) = self.read_line(&format!("Select Dataset [1-{count}]: "))? else {
                return Ok(None);
            };
            if let Ok(num) = line.trim().parse::<usize>() {
                if (1..=count).contains(&num) {
                    println!("\nSelected Dataset: [{}]", self.registry.specs()[num - 1].name);
                    return Ok(Some(num - 1));
                }
            }
            println!("Invalid selection. Please try again.");
        }
    }

    /// Prompt until a non-empty node id arrives. `None` means EOF/interrupt.
    fn read_node(&mut self, prompt: &str) -> Result<Option<NodeId>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                println!("Input cannot be empty.");
                continue;
            }
            return Ok(Some(NodeId::parse(trimmed)));
        }
    }

    /// Heuristic mode for A*. Skipped (euclidean, h=0 anyway) when the
    /// dataset carries no coordinates.
    fn read_heuristic(&mut self, meta: &DatasetMeta) -> Result<Option<HeuristicMode>> {
        if !meta.has_coords {
            return Ok(Some(HeuristicMode::Euclidean));
        }
        let Some(line) = self.read_line("Heuristic [euclidean/manhattan] (default euclidean): ")?
        else {
            return Ok(None);
        };
        Ok(Some(HeuristicMode::from_name(line.trim())))
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn print_banner() {
    let rule = "-".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("|{:<width$}|", " Pathfinding Comparison Interface", width = RULE_WIDTH - 2);
    println!("{rule}");
}

/// The results table, one row per run.
fn render_table(runs: &[(&str, Measured)]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Results");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<10} | {:>10} | {:>14} | {:>10}",
        "Algorithm", "Time (ms)", "Expanded Nodes", "Mem (MB)"
    );
    let _ = writeln!(out, "{rule}");
    for (name, measured) in runs {
        let mem = measured
            .memory_mb
            .map(|m| format!("{m:.2}"))
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            out,
            "{:<10} | {:>10.2} | {:>14} | {:>10}",
            name, measured.time_ms, measured.result.expanded, mem
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(expanded: u64, time_ms: f64, memory_mb: Option<f64>) -> Measured {
        Measured {
            result: wayfind_core::SearchResult {
                path: Vec::new(),
                distance: f64::INFINITY,
                expanded,
            },
            time_ms,
            memory_mb,
        }
    }

    #[test]
    fn table_lists_every_run() {
        let runs = vec![
            ("Dijkstra", measured(120, 3.25, Some(1.5))),
            ("A*", measured(48, 1.75, None)),
        ];
        let table = render_table(&runs);
        assert!(table.contains("Dijkstra"));
        assert!(table.contains("A*"));
        assert!(table.contains("120"));
        assert!(table.contains("1.50"));
        assert!(table.contains("N/A"));
    }

    #[test]
    fn table_has_a_header_row() {
        let table = render_table(&[]);
        assert!(table.contains("Algorithm"));
        assert!(table.contains("Expanded Nodes"));
    }
}
