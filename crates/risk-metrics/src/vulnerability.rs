//! Vulnerability insight over a dependency node/link set.
//!
//! Identifies the highest-fragility junction in the graph and estimates how
//! much of the graph a change there can reach in one hop.

use risk_core::Provenance;
use risk_core::signals::{DependencyLink, DependencyNode};
use serde::Serialize;

use crate::fragility::fragility_score;

/// Downstream link most likely to absorb a cascade from the focus node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CascadeTarget {
    pub node_id: String,
    pub link_weight: f64,
}

/// The highest-fragility node and its one-hop cascade estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VulnerabilityInsight {
    /// Node with the maximum fragility score (ties broken by input order).
    pub node_id: String,
    pub fragility: f64,
    /// Estimated percentage of the graph reachable in one hop from the
    /// focus node. Zero for single-node graphs.
    pub cascading_probability: u8,
    /// Heaviest downstream link, if the focus node has any.
    pub target: Option<CascadeTarget>,
    pub source: Provenance,
}

/// Compute the vulnerability insight for a dependency graph.
///
/// Returns `None` when there are zero nodes — callers render "insufficient
/// dependency data" rather than a fabricated score.
#[must_use]
pub fn vulnerability_insight(
    nodes: &[DependencyNode],
    links: &[DependencyLink],
) -> Option<VulnerabilityInsight> {
    let focus = nodes.iter().fold(None::<(&DependencyNode, f64)>, |best, node| {
        let score = fragility_score(node);
        match best {
            // Strict comparison keeps the first-encountered node on ties.
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((node, score)),
        }
    })?;
    let (focus_node, fragility) = focus;

    let mut downstream: Vec<&DependencyLink> =
        links.iter().filter(|l| l.source == focus_node.id).collect();
    downstream.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let cascading_probability = if nodes.len() > 1 {
        let ratio = downstream.len() as f64 / (nodes.len() - 1) as f64;
        (ratio * 100.0).round().min(f64::from(u8::MAX)) as u8
    } else {
        0
    };

    let target = downstream.first().map(|link| CascadeTarget {
        node_id: link.target.clone(),
        link_weight: link.weight,
    });

    Some(VulnerabilityInsight {
        node_id: focus_node.id.clone(),
        fragility,
        cascading_probability,
        target,
        source: Provenance::GraphDerived,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use risk_core::signals::RiskCategory;

    fn node(id: &str, fan_in: u32, fan_out: u32, centrality: f64, depth: u32) -> DependencyNode {
        DependencyNode {
            id: id.to_string(),
            fan_in,
            fan_out,
            centrality_score: centrality,
            transitive_depth: depth,
        }
    }

    fn link(source: &str, target: &str, weight: f64) -> DependencyLink {
        DependencyLink {
            source: source.to_string(),
            target: target.to_string(),
            category: RiskCategory::Structural,
            weight,
        }
    }

    #[test]
    fn empty_graph_yields_none() {
        assert_eq!(vulnerability_insight(&[], &[]), None);
    }

    #[test]
    fn picks_highest_fragility_node() {
        let nodes = vec![
            node("low", 1, 0, 0.1, 0),
            node("high", 8, 6, 0.9, 3),
            node("mid", 3, 2, 0.4, 1),
        ];
        let insight = vulnerability_insight(&nodes, &[]).unwrap();
        assert_eq!(insight.node_id, "high");
        assert_eq!(insight.target, None);
        assert_eq!(insight.source, Provenance::GraphDerived);
    }

    #[test]
    fn fragility_tie_keeps_first_encountered() {
        let nodes = vec![
            node("first", 3, 2, 0.4, 1),
            node("second", 3, 2, 0.4, 1),
        ];
        let insight = vulnerability_insight(&nodes, &[]).unwrap();
        assert_eq!(insight.node_id, "first");
    }

    #[test]
    fn cascading_probability_counts_one_hop_reach() {
        let nodes = vec![
            node("hub", 10, 10, 1.0, 5),
            node("a", 0, 0, 0.0, 0),
            node("b", 0, 0, 0.0, 0),
            node("c", 0, 0, 0.0, 0),
            node("d", 0, 0, 0.0, 0),
        ];
        let links = vec![
            link("hub", "a", 1.0),
            link("hub", "b", 2.0),
            link("a", "c", 9.0),
        ];
        let insight = vulnerability_insight(&nodes, &links).unwrap();
        // 2 downstream of 4 other nodes.
        assert_eq!(insight.cascading_probability, 50);
    }

    #[test]
    fn single_node_graph_has_zero_probability() {
        let nodes = vec![node("only", 10, 10, 1.0, 5)];
        let insight = vulnerability_insight(&nodes, &[]).unwrap();
        assert_eq!(insight.cascading_probability, 0);
    }

    #[test]
    fn target_is_heaviest_downstream_link() {
        let nodes = vec![node("hub", 10, 10, 1.0, 5), node("a", 0, 0, 0.0, 0)];
        let links = vec![
            link("hub", "a", 1.5),
            link("hub", "b", 4.0),
            link("other", "hub", 9.0),
        ];
        let insight = vulnerability_insight(&nodes, &links).unwrap();
        let target = insight.target.unwrap();
        assert_eq!(target.node_id, "b");
        assert_eq!(target.link_weight, 4.0);
    }

    #[test]
    fn target_weight_tie_keeps_first_encountered() {
        let nodes = vec![node("hub", 10, 10, 1.0, 5)];
        let links = vec![link("hub", "x", 2.0), link("hub", "y", 2.0)];
        let insight = vulnerability_insight(&nodes, &links).unwrap();
        assert_eq!(insight.target.unwrap().node_id, "x");
    }
}
