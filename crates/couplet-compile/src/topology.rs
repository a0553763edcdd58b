//! Topology models and coupling maps.
//!
//! A [`TopologyModel`] is a declared connectivity policy: which physical
//! qubit pairs may interact directly. The three variants cover the
//! comparison this toolkit exists for — all-to-all trapped-ion style
//! connectivity against linear-chain and grid lattices. Each model lowers
//! to a [`CouplingMap`], the explicit adjacency graph the routing pass
//! works on.

use serde::{Deserialize, Serialize};

/// A named connectivity policy over physical qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopologyModel {
    /// Every pair of qubits may interact directly.
    AllToAll {
        /// Number of physical qubits.
        num_qubits: u32,
    },
    /// Qubits form a chain; only `i ↔ i+1` may interact.
    Linear {
        /// Number of physical qubits.
        num_qubits: u32,
    },
    /// Qubits form a rows×cols lattice in row-major order; only
    /// horizontal and vertical neighbors may interact.
    Grid {
        /// Number of lattice rows.
        rows: u32,
        /// Number of lattice columns.
        cols: u32,
    },
}

impl TopologyModel {
    /// All-to-all model over `n` qubits.
    pub fn all_to_all(n: u32) -> Self {
        TopologyModel::AllToAll { num_qubits: n }
    }

    /// Linear chain over `n` qubits.
    pub fn linear(n: u32) -> Self {
        TopologyModel::Linear { num_qubits: n }
    }

    /// Explicit rows×cols grid.
    pub fn grid(rows: u32, cols: u32) -> Self {
        TopologyModel::Grid { rows, cols }
    }

    /// Near-square grid holding at least `n` qubits:
    /// rows = ⌊√n⌋ (min 1), cols = ⌈n / rows⌉.
    pub fn grid_for(n: u32) -> Self {
        let rows = (f64::from(n).sqrt().floor() as u32).max(1);
        let cols = n.div_ceil(rows);
        TopologyModel::Grid { rows, cols }
    }

    /// Parse a model from its CLI name.
    pub fn from_name(name: &str, n: u32) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "all-to-all" | "alltoall" | "full" => Some(Self::all_to_all(n)),
            "linear" | "line" | "chain" => Some(Self::linear(n)),
            "grid" | "lattice" => Some(Self::grid_for(n)),
            _ => None,
        }
    }

    /// Human-readable name of the model variant.
    pub fn name(&self) -> &'static str {
        match self {
            TopologyModel::AllToAll { .. } => "all-to-all",
            TopologyModel::Linear { .. } => "linear",
            TopologyModel::Grid { .. } => "grid",
        }
    }

    /// Number of physical qubits in the model.
    pub fn num_qubits(&self) -> u32 {
        match *self {
            TopologyModel::AllToAll { num_qubits } | TopologyModel::Linear { num_qubits } => {
                num_qubits
            }
            TopologyModel::Grid { rows, cols } => rows * cols,
        }
    }

    /// Adjacency predicate: may physical qubits `i` and `j` interact
    /// directly under this model?
    pub fn adjacent(&self, i: u32, j: u32) -> bool {
        let n = self.num_qubits();
        if i == j || i >= n || j >= n {
            return false;
        }
        match *self {
            TopologyModel::AllToAll { .. } => true,
            TopologyModel::Linear { .. } => i.abs_diff(j) == 1,
            TopologyModel::Grid { cols, .. } => {
                let (ri, ci) = (i / cols, i % cols);
                let (rj, cj) = (j / cols, j % cols);
                (ri == rj && ci.abs_diff(cj) == 1) || (ci == cj && ri.abs_diff(rj) == 1)
            }
        }
    }

    /// Lower the model to an explicit coupling map.
    pub fn coupling_map(&self) -> CouplingMap {
        let n = self.num_qubits();
        let mut edges = vec![];
        for i in 0..n {
            for j in (i + 1)..n {
                if self.adjacent(i, j) {
                    edges.push((i, j));
                }
            }
        }
        CouplingMap::from_edges(n, edges)
    }
}

impl std::fmt::Display for TopologyModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            TopologyModel::Grid { rows, cols } => write!(f, "grid({rows}x{cols})"),
            other => write!(f, "{}({})", other.name(), other.num_qubits()),
        }
    }
}

/// Explicit adjacency graph over physical qubits.
///
/// All-pairs shortest paths are precomputed on construction with one BFS
/// per node, giving O(1) distance lookups and O(path) reconstruction via
/// a first-hop matrix. `u32::MAX` marks unreachable pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingMap {
    /// Number of physical qubits.
    num_qubits: u32,
    /// Undirected edge list (deduplicated).
    edges: Vec<(u32, u32)>,
    /// Adjacency lists indexed by qubit.
    #[serde(skip)]
    adjacency: Vec<Vec<u32>>,
    /// dist[i][j]: shortest-path length, `u32::MAX` if unreachable.
    #[serde(skip)]
    dist: Vec<Vec<u32>>,
    /// hop[i][j]: first hop on a shortest path i→j, `u32::MAX` if none.
    #[serde(skip)]
    hop: Vec<Vec<u32>>,
}

impl CouplingMap {
    /// Build a coupling map from an undirected edge list.
    ///
    /// Duplicate edges (including reversed pairs), self-loops, and edges
    /// referencing qubits ≥ `num_qubits` are silently dropped.
    pub fn from_edges(num_qubits: u32, edges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let n = num_qubits as usize;
        let mut adjacency = vec![vec![]; n];
        let mut kept = vec![];

        for (a, b) in edges {
            if a == b || a >= num_qubits || b >= num_qubits {
                continue;
            }
            let (lo, hi) = (a.min(b), a.max(b));
            if kept.contains(&(lo, hi)) {
                continue;
            }
            kept.push((lo, hi));
            adjacency[lo as usize].push(hi);
            adjacency[hi as usize].push(lo);
        }

        let mut map = Self {
            num_qubits,
            edges: kept,
            adjacency,
            dist: vec![],
            hop: vec![],
        };
        map.precompute_paths();
        map
    }

    /// One BFS per source node fills the distance and first-hop matrices.
    fn precompute_paths(&mut self) {
        let n = self.num_qubits as usize;
        self.dist = vec![vec![u32::MAX; n]; n];
        self.hop = vec![vec![u32::MAX; n]; n];

        for src in 0..n {
            self.dist[src][src] = 0;
            let mut queue = std::collections::VecDeque::new();
            queue.push_back(src as u32);

            while let Some(current) = queue.pop_front() {
                let cur = current as usize;
                for &nb in &self.adjacency[cur] {
                    let nbi = nb as usize;
                    if self.dist[src][nbi] != u32::MAX {
                        continue;
                    }
                    self.dist[src][nbi] = self.dist[src][cur] + 1;
                    // First hop toward nb: the neighbor itself when leaving
                    // src directly, otherwise whatever hop reached `current`.
                    self.hop[src][nbi] = if cur == src { nb } else { self.hop[src][cur] };
                    queue.push_back(nb);
                }
            }
        }
    }

    /// Rebuild the adjacency lists and path matrices from the edge list.
    /// Must be called after deserialization.
    pub fn rebuild_caches(&mut self) {
        let n = self.num_qubits as usize;
        self.adjacency = vec![vec![]; n];
        for &(a, b) in &self.edges {
            self.adjacency[a as usize].push(b);
            self.adjacency[b as usize].push(a);
        }
        self.precompute_paths();
    }

    /// Check if two qubits are directly connected.
    #[inline]
    pub fn is_connected(&self, q1: u32, q2: u32) -> bool {
        self.adjacency
            .get(q1 as usize)
            .is_some_and(|nbs| nbs.contains(&q2))
    }

    /// Get the number of physical qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the coupling edges.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Neighbors of a qubit.
    pub fn neighbors(&self, qubit: u32) -> impl Iterator<Item = u32> + '_ {
        self.adjacency
            .get(qubit as usize)
            .map(|v| v.iter().copied())
            .into_iter()
            .flatten()
    }

    /// Shortest-path distance, `None` if unreachable.
    pub fn distance(&self, from: u32, to: u32) -> Option<u32> {
        let d = *self.dist.get(from as usize)?.get(to as usize)?;
        (d != u32::MAX).then_some(d)
    }

    /// Shortest path from→to including both endpoints, `None` if
    /// unreachable.
    pub fn shortest_path(&self, from: u32, to: u32) -> Option<Vec<u32>> {
        if from >= self.num_qubits || to >= self.num_qubits {
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }
        self.distance(from, to)?;

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.hop[current as usize][to as usize];
            path.push(current);
        }
        Some(path)
    }
}
