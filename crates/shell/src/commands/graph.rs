//! Build a graph and write its edges without running the test.

use std::path::Path;

use graph_perm::{LabelCodes, ProximityGraph, SampleTable};

use super::InputArgs;
use crate::{data, rules::RuleArgs};

/// Builds the graph under the chosen rule, classifies its edges by `label`
/// and writes them to `out_path`.
pub fn run(inputs: &InputArgs, rule: &RuleArgs, label: &str, out_path: &Path) -> Result<(), String> {
    let matrix = data::read_distances(&inputs.distances)?;
    let table = data::read_metadata(&inputs.metadata)?;
    if matrix.cardinality() != table.cardinality() {
        return Err(format!(
            "The distance matrix has {} samples but the metadata has {}.",
            matrix.cardinality(),
            table.cardinality()
        ));
    }

    let connectivity = rule.connectivity()?;
    let labels = LabelCodes::new(table.require_column(label).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())?;
    let mut graph = ProximityGraph::build(&matrix, connectivity)
        .map_err(|e| e.to_string())?
        .classify(&labels);
    if rule.drop_isolates {
        graph = graph.drop_isolates();
    }

    println!(
        "{}: {} nodes, {} edges, {} pure.",
        graph.connectivity(),
        graph.node_count(),
        graph.edge_count(),
        graph.pure_edge_count()
    );
    graph.write_csv(&out_path, table.sample_names()).map_err(|e| e.to_string())?;
    ftlog::info!("Wrote edges to {out_path:?}.");

    Ok(())
}
