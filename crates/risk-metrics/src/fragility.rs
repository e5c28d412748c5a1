//! Structural fragility scoring for dependency nodes.

use risk_core::signals::DependencyNode;

const FAN_WEIGHT: f64 = 5.0;
const CENTRALITY_WEIGHT: f64 = 50.0;
const DEPTH_WEIGHT: f64 = 10.0;
const MAX_SCORE: f64 = 100.0;

/// Bounded `[0, 100]` proxy for the structural risk of a dependency node.
///
/// Combines how many modules touch the node (fan-in plus fan-out), how
/// central it is to the graph, and how deep its transitive closure reaches:
///
/// ```text
/// fragility = min(100, (fan_in + fan_out) * 5
///                      + centrality_score * 50
///                      + transitive_depth * 10)
/// ```
#[must_use]
pub fn fragility_score(node: &DependencyNode) -> f64 {
    // Summed in f64 so extreme fan counts cannot overflow.
    let fan_weight = (f64::from(node.fan_in) + f64::from(node.fan_out)) * FAN_WEIGHT;
    let centrality_weight = node.centrality_score * CENTRALITY_WEIGHT;
    let depth_weight = f64::from(node.transitive_depth) * DEPTH_WEIGHT;
    (fan_weight + centrality_weight + depth_weight).min(MAX_SCORE)
}
