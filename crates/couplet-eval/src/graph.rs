//! Graph problem definitions for the QAOA Max-Cut workload.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// An undirected weighted graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of nodes.
    pub n_nodes: usize,
    /// Edges as (`node_a`, `node_b`, weight).
    pub edges: Vec<(usize, usize, f64)>,
}

impl Graph {
    /// Create an unweighted graph (all weights 1.0).
    pub fn new(n_nodes: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            n_nodes,
            edges: edges.into_iter().map(|(a, b)| (a, b, 1.0)).collect(),
        }
    }

    /// Create a weighted graph.
    pub fn weighted(n_nodes: usize, edges: Vec<(usize, usize, f64)>) -> Self {
        Self { n_nodes, edges }
    }

    /// Complete graph K_n: every node pair connected.
    ///
    /// The canonical workload for the connectivity comparison — on
    /// all-to-all hardware every cost term maps to a native interaction.
    pub fn complete(n_nodes: usize) -> Self {
        let mut edges = vec![];
        for i in 0..n_nodes {
            for j in (i + 1)..n_nodes {
                edges.push((i, j));
            }
        }
        Self::new(n_nodes, edges)
    }

    /// Ring graph: 0-1-…-(n-1)-0.
    pub fn ring(n_nodes: usize) -> Self {
        let edges = (0..n_nodes).map(|i| (i, (i + 1) % n_nodes)).collect();
        Self::new(n_nodes, edges)
    }

    /// Random graph with the given edge probability, reproducible per
    /// seed.
    pub fn random(n_nodes: usize, edge_probability: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = vec![];
        for i in 0..n_nodes {
            for j in (i + 1)..n_nodes {
                if rng.r#gen::<f64>() < edge_probability {
                    edges.push((i, j));
                }
            }
        }
        Self::new(n_nodes, edges)
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Largest node index referenced by an edge, if any.
    pub fn max_edge_node(&self) -> Option<usize> {
        self.edges.iter().map(|&(a, b, _)| a.max(b)).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_graph() {
        let g = Graph::complete(5);
        assert_eq!(g.n_nodes, 5);
        assert_eq!(g.num_edges(), 10);
    }

    #[test]
    fn test_ring_graph() {
        let g = Graph::ring(6);
        assert_eq!(g.num_edges(), 6);
        assert!(g.edges.contains(&(5, 0, 1.0)));
    }

    #[test]
    fn test_random_graph_deterministic() {
        let a = Graph::random(8, 0.5, 42);
        let b = Graph::random(8, 0.5, 42);
        assert_eq!(a, b);

        let c = Graph::random(8, 0.5, 43);
        // Different seeds overwhelmingly give different edge sets
        assert!(a != c || a.num_edges() == c.num_edges());
    }

    #[test]
    fn test_max_edge_node() {
        let g = Graph::new(4, vec![(0, 2), (1, 3)]);
        assert_eq!(g.max_edge_node(), Some(3));
        assert_eq!(Graph::new(3, vec![]).max_edge_node(), None);
    }
}
