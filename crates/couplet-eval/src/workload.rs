//! Workload generators: the circuit families behind the ten demos.
//!
//! Each generator produces a [`Circuit`] from a small parameter set and
//! validates its inputs up front. All generators are deterministic —
//! the `Random` family is seeded.

use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use couplet_ir::{Circuit, ClbitId, ParameterExpression, QubitId};

use crate::error::{EvalError, EvalResult};
use crate::graph::Graph;

/// Available workload families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Workload {
    /// GHZ state preparation (nearest-neighbor friendly baseline).
    Ghz,
    /// Quantum Fourier Transform (all-pairs controlled phases).
    Qft,
    /// Integer comparator: the core step of option-exercise logic.
    Comparator,
    /// Two-local variational ansatz with full CZ entanglement.
    TwoLocal,
    /// Bernstein–Vazirani with a phase oracle.
    BernsteinVazirani,
    /// QAOA Max-Cut on a complete graph.
    QaoaMaxcut,
    /// Trotterized Heisenberg spin-chain time evolution.
    Heisenberg,
    /// Steane [[7,1,3]] encoding pattern.
    Steane,
    /// Seeded random SU(4) pair layers.
    Random,
    /// One CZ per qubit pair.
    AllPairs,
}

impl Workload {
    /// Parse a workload name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ghz" => Some(Self::Ghz),
            "qft" => Some(Self::Qft),
            "comparator" => Some(Self::Comparator),
            "two-local" | "twolocal" | "ansatz" => Some(Self::TwoLocal),
            "bernstein-vazirani" | "bv" => Some(Self::BernsteinVazirani),
            "qaoa" | "maxcut" => Some(Self::QaoaMaxcut),
            "heisenberg" => Some(Self::Heisenberg),
            "steane" => Some(Self::Steane),
            "random" => Some(Self::Random),
            "all-pairs" | "allpairs" => Some(Self::AllPairs),
            _ => None,
        }
    }

    /// Canonical CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ghz => "ghz",
            Self::Qft => "qft",
            Self::Comparator => "comparator",
            Self::TwoLocal => "two-local",
            Self::BernsteinVazirani => "bernstein-vazirani",
            Self::QaoaMaxcut => "qaoa",
            Self::Heisenberg => "heisenberg",
            Self::Steane => "steane",
            Self::Random => "random",
            Self::AllPairs => "all-pairs",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ghz => "GHZ state preparation - entangles N qubits in a chain",
            Self::Qft => "Quantum Fourier Transform - every qubit pair interacts",
            Self::Comparator => "Integer comparator - ripple carry against a constant",
            Self::TwoLocal => "Two-local variational ansatz with full entanglement",
            Self::BernsteinVazirani => "Bernstein-Vazirani phase oracle (seeded secret)",
            Self::QaoaMaxcut => "QAOA Max-Cut layers on a complete graph",
            Self::Heisenberg => "Trotterized Heisenberg spin-chain evolution",
            Self::Steane => "Steane [[7,1,3]] encoding pattern (7 qubits)",
            Self::Random => "Seeded random SU(4) pair layers",
            Self::AllPairs => "One CZ per qubit pair",
        }
    }

    /// All workload families.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Ghz,
            Self::Qft,
            Self::Comparator,
            Self::TwoLocal,
            Self::BernsteinVazirani,
            Self::QaoaMaxcut,
            Self::Heisenberg,
            Self::Steane,
            Self::Random,
            Self::AllPairs,
        ]
    }
}

/// Parameters for a workload instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// The workload family.
    pub workload: Workload,
    /// Problem size in qubits.
    pub n_qubits: u32,
    /// Repetition count where applicable (ansatz reps, QAOA layers,
    /// Trotter steps, random layers).
    pub layers: u32,
    /// Seed for seeded workloads (random layers, BV secret).
    pub seed: u64,
}

impl WorkloadSpec {
    /// Create a spec with one layer and a fixed default seed.
    pub fn new(workload: Workload, n_qubits: u32) -> Self {
        Self {
            workload,
            n_qubits,
            layers: 1,
            seed: 7,
        }
    }

    /// Set the repetition count.
    #[must_use]
    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the circuit for this spec.
    pub fn build(&self) -> EvalResult<Circuit> {
        if self.n_qubits == 0 {
            return Err(EvalError::InvalidParameter(
                "workload requires at least 1 qubit".into(),
            ));
        }
        if self.layers == 0 {
            return Err(EvalError::InvalidParameter(
                "layer count must be at least 1".into(),
            ));
        }

        let n = self.n_qubits;
        match self.workload {
            Workload::Ghz => Ok(Circuit::ghz(n)?),
            Workload::Qft => Ok(Circuit::qft(n)?),
            // Compare against the midpoint of the register range, offset
            // so the two's complement has mixed bits.
            Workload::Comparator => {
                if !(2..63).contains(&n) {
                    return Err(EvalError::InvalidParameter(format!(
                        "comparator supports 2..=62 state qubits, got {n}"
                    )));
                }
                comparator(n, (1u64 << (n - 1)) + 1)
            }
            Workload::TwoLocal => two_local(n, self.layers),
            Workload::BernsteinVazirani => bernstein_vazirani(n, self.seed),
            Workload::QaoaMaxcut => qaoa_maxcut(&Graph::complete(n as usize), self.layers),
            Workload::Heisenberg => heisenberg(n, self.layers),
            Workload::Steane => {
                if n != 7 {
                    return Err(EvalError::InvalidParameter(format!(
                        "Steane encoding is fixed at 7 qubits, got {n}"
                    )));
                }
                steane_encoding()
            }
            Workload::Random => random_layers(n, self.layers, self.seed),
            Workload::AllPairs => all_pairs(n),
        }
    }
}

/// Ripple integer comparator: flips the result qubit when the state
/// register, read as an unsigned integer, is ≥ `value`.
///
/// Register layout: `n` state qubits, `n−1` carry ancillas, 1 result
/// qubit (2n total). The carry chain adds the two's complement of
/// `value`; the final carry is the comparison flag.
pub fn comparator(n_state: u32, value: u64) -> EvalResult<Circuit> {
    if n_state < 2 {
        return Err(EvalError::InvalidParameter(format!(
            "comparator requires at least 2 state qubits, got {n_state}"
        )));
    }
    if n_state >= 63 || value >= (1u64 << n_state) {
        return Err(EvalError::InvalidParameter(format!(
            "comparison value {value} does not fit in {n_state} bits"
        )));
    }

    let n = n_state;
    let mut circuit = Circuit::with_size("comparator", 2 * n, 1);

    let state = |i: u32| QubitId(i);
    let carry = |i: u32| QubitId(n + i);
    let result = QubitId(2 * n - 1);

    // Two's complement of the comparison value.
    let twos = (1u64 << n) - value;

    for i in 0..n {
        let bit_set = (twos >> i) & 1 == 1;
        let target = if i == n - 1 { result } else { carry(i) };

        if i == 0 {
            if bit_set {
                circuit.cx(state(0), target)?;
            }
        } else if bit_set {
            // carry_i = state_i OR carry_{i-1}
            or_into(&mut circuit, state(i), carry(i - 1), target)?;
        } else {
            // carry_i = state_i AND carry_{i-1}
            circuit.ccx(state(i), carry(i - 1), target)?;
        }
    }

    circuit.measure(result, ClbitId(0))?;
    Ok(circuit)
}

/// Emit `target ⊕= a OR b` as X-conjugated Toffoli.
fn or_into(circuit: &mut Circuit, a: QubitId, b: QubitId, target: QubitId) -> EvalResult<()> {
    circuit.x(a)?;
    circuit.x(b)?;
    circuit.ccx(a, b, target)?;
    circuit.x(a)?;
    circuit.x(b)?;
    circuit.x(target)?;
    Ok(())
}

/// Two-local variational ansatz: Ry/Rz rotation layers with full CZ
/// entanglement between repetitions, plus a closing rotation layer.
/// Rotation angles stay symbolic — routing cost does not depend on them.
pub fn two_local(n: u32, reps: u32) -> EvalResult<Circuit> {
    let mut circuit = Circuit::with_size("two_local", n, 0);
    let mut param = 0usize;
    let mut next_symbol = || {
        let s = ParameterExpression::symbol(format!("θ[{param}]"));
        param += 1;
        s
    };

    for _ in 0..reps {
        for q in 0..n {
            circuit.ry(next_symbol(), QubitId(q))?;
        }
        for q in 0..n {
            circuit.rz(next_symbol(), QubitId(q))?;
        }
        for i in 0..n {
            for j in (i + 1)..n {
                circuit.cz(QubitId(i), QubitId(j))?;
            }
        }
    }
    for q in 0..n {
        circuit.ry(next_symbol(), QubitId(q))?;
    }
    for q in 0..n {
        circuit.rz(next_symbol(), QubitId(q))?;
    }

    Ok(circuit)
}

/// Bernstein–Vazirani circuit with the secret string taken from the low
/// `n` bits of `seed`. Uses a phase oracle (CZ onto the ancilla).
pub fn bernstein_vazirani(n: u32, seed: u64) -> EvalResult<Circuit> {
    let mut circuit = Circuit::with_size("bernstein_vazirani", n + 1, n);
    let ancilla = QubitId(n);

    for q in 0..n {
        circuit.h(QubitId(q))?;
    }
    circuit.x(ancilla)?;
    circuit.h(ancilla)?;

    for q in 0..n {
        if (seed >> q) & 1 == 1 {
            circuit.cz(QubitId(q), ancilla)?;
        }
    }

    for q in 0..n {
        circuit.h(QubitId(q))?;
    }
    for q in 0..n {
        circuit.measure(QubitId(q), ClbitId(q))?;
    }

    Ok(circuit)
}

/// QAOA for Max-Cut: `p` alternating cost/mixer layers over the graph.
///
/// Cost terms use the CX·RZ·CX decomposition of RZZ; parameters follow a
/// linear ramp (γ rising, β falling) across layers.
pub fn qaoa_maxcut(graph: &Graph, p: u32) -> EvalResult<Circuit> {
    if graph.n_nodes == 0 {
        return Err(EvalError::InvalidParameter("graph has no nodes".into()));
    }
    if let Some(max) = graph.max_edge_node() {
        if max >= graph.n_nodes {
            return Err(EvalError::InvalidParameter(format!(
                "graph edge references node {max} but the graph has {} nodes",
                graph.n_nodes
            )));
        }
    }

    let n = u32::try_from(graph.n_nodes)
        .map_err(|_| EvalError::InvalidParameter("graph too large".into()))?;
    let mut circuit = Circuit::with_size("qaoa_maxcut", n, n);

    for q in 0..n {
        circuit.h(QubitId(q))?;
    }

    for layer in 0..p {
        let frac = f64::from(layer + 1) / f64::from(p);
        let gamma = 0.8 * frac;
        let beta = 0.35 * (1.0 - frac) + 0.05;

        for &(i, j, weight) in &graph.edges {
            let (qi, qj) = (QubitId::from(i), QubitId::from(j));
            circuit.cx(qi, qj)?;
            circuit.rz(gamma * weight, qj)?;
            circuit.cx(qi, qj)?;
        }
        for q in 0..n {
            circuit.rx(2.0 * beta, QubitId(q))?;
        }
    }

    circuit.measure_all()?;
    Ok(circuit)
}

/// Trotterized time evolution of an isotropic Heisenberg spin chain:
/// per step, RXX/RYY/RZZ on every nearest-neighbor pair, starting from a
/// single excitation at the chain center.
pub fn heisenberg(n_spins: u32, steps: u32) -> EvalResult<Circuit> {
    if n_spins < 2 {
        return Err(EvalError::InvalidParameter(format!(
            "Heisenberg chain requires at least 2 spins, got {n_spins}"
        )));
    }

    let mut circuit = Circuit::with_size("heisenberg", n_spins, 0);
    let dt = 1.0 / f64::from(steps);
    let coupling = 1.0;
    let angle = 2.0 * coupling * dt;

    circuit.x(QubitId(n_spins / 2))?;

    for _ in 0..steps {
        for i in 0..n_spins - 1 {
            let (a, b) = (QubitId(i), QubitId(i + 1));
            circuit.rxx(angle, a, b)?;
            circuit.ryy(angle, a, b)?;
            circuit.rzz(angle, a, b)?;
        }
    }

    Ok(circuit)
}

/// Steane [[7,1,3]] encoding pattern: superposition on the first three
/// qubits, X-stabilizer CX fan-ins, then the Hadamard-conjugated
/// Z-stabilizer checks.
pub fn steane_encoding() -> EvalResult<Circuit> {
    let mut circuit = Circuit::with_size("steane_encoding", 7, 0);
    let q = |i: u32| QubitId(i);

    for i in 0..3 {
        circuit.h(q(i))?;
    }

    // X-stabilizer fan-ins
    circuit.cx(q(0), q(3))?;
    circuit.cx(q(1), q(3))?;
    circuit.cx(q(2), q(3))?;

    circuit.cx(q(0), q(4))?;
    circuit.cx(q(1), q(4))?;
    circuit.cx(q(4), q(5))?;

    circuit.cx(q(0), q(6))?;
    circuit.cx(q(2), q(6))?;
    circuit.cx(q(4), q(6))?;

    // Z-stabilizer checks, conjugated by Hadamards
    for group in [[0u32, 1, 2, 3], [0, 1, 4, 5], [0, 2, 4, 6]] {
        for &i in &group {
            circuit.h(q(i))?;
        }
        match group {
            [0, 1, 2, 3] => {
                circuit.cx(q(0), q(3))?;
                circuit.cx(q(1), q(3))?;
                circuit.cx(q(2), q(3))?;
            }
            [0, 1, 4, 5] => {
                circuit.cx(q(0), q(4))?;
                circuit.cx(q(1), q(4))?;
                circuit.cx(q(4), q(5))?;
            }
            _ => {
                circuit.cx(q(0), q(6))?;
                circuit.cx(q(2), q(6))?;
                circuit.cx(q(4), q(6))?;
            }
        }
        for &i in &group {
            circuit.h(q(i))?;
        }
    }

    Ok(circuit)
}

/// Seeded random circuit: per layer, a random qubit pairing with a
/// simplified SU(4) block (1q rotations around a CX) on each pair.
pub fn random_layers(n: u32, layers: u32, seed: u64) -> EvalResult<Circuit> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut circuit = Circuit::with_size("random_layers", n, 0);

    for _ in 0..layers {
        let mut available: Vec<u32> = (0..n).collect();
        while available.len() >= 2 {
            let i1 = rng.gen_range(0..available.len());
            let q1 = available.remove(i1);
            let i2 = rng.gen_range(0..available.len());
            let q2 = available.remove(i2);

            let angles: [f64; 6] = std::array::from_fn(|_| rng.gen_range(0.0..2.0 * PI));

            circuit.rz(angles[0], QubitId(q1))?;
            circuit.ry(angles[1], QubitId(q1))?;
            circuit.rz(angles[2], QubitId(q2))?;
            circuit.ry(angles[3], QubitId(q2))?;
            circuit.cx(QubitId(q1), QubitId(q2))?;
            circuit.ry(angles[4], QubitId(q1))?;
            circuit.ry(angles[5], QubitId(q2))?;
        }
    }

    Ok(circuit)
}

/// One CZ per qubit pair, lexicographic order.
pub fn all_pairs(n: u32) -> EvalResult<Circuit> {
    let mut circuit = Circuit::with_size("all_pairs", n, 0);
    for i in 0..n {
        for j in (i + 1)..n {
            circuit.cz(QubitId(i), QubitId(j))?;
        }
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for workload in Workload::all() {
            assert_eq!(Workload::from_name(workload.name()), Some(workload));
        }
        assert_eq!(Workload::from_name("bv"), Some(Workload::BernsteinVazirani));
        assert!(Workload::from_name("shor").is_none());
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let spec = WorkloadSpec::new(Workload::Qft, 0);
        assert!(matches!(
            spec.build(),
            Err(EvalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_layers_rejected() {
        let spec = WorkloadSpec::new(Workload::QaoaMaxcut, 4).with_layers(0);
        assert!(matches!(
            spec.build(),
            Err(EvalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_comparator_shape() {
        let circuit = comparator(4, 9).unwrap();
        assert_eq!(circuit.num_qubits(), 8); // 4 state + 3 carry + 1 result
        assert_eq!(circuit.num_clbits(), 1);
        assert!(circuit.num_ops() > 0);
    }

    #[test]
    fn test_comparator_value_out_of_range() {
        assert!(matches!(
            comparator(3, 8),
            Err(EvalError::InvalidParameter(_))
        ));
        assert!(matches!(
            comparator(1, 0),
            Err(EvalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_two_local_parameter_count() {
        let circuit = two_local(3, 2).unwrap();
        // 2 reps × (3 ry + 3 rz + 3 cz) + closing 3 ry + 3 rz
        assert_eq!(circuit.num_ops(), 2 * 9 + 6);
    }

    #[test]
    fn test_bernstein_vazirani_secret_changes_oracle() {
        let none = bernstein_vazirani(4, 0).unwrap();
        let all = bernstein_vazirani(4, 0b1111).unwrap();
        // Four extra CZ oracle gates
        assert_eq!(all.num_ops(), none.num_ops() + 4);
    }

    #[test]
    fn test_qaoa_rejects_out_of_range_edges() {
        let graph = Graph::new(3, vec![(0, 5)]);
        assert!(matches!(
            qaoa_maxcut(&graph, 1),
            Err(EvalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_qaoa_complete_graph_ops() {
        let circuit = qaoa_maxcut(&Graph::complete(4), 2).unwrap();
        // 4 H + 2 layers × (6 edges × 3 + 4 rx) + 4 measures
        assert_eq!(circuit.num_ops(), 4 + 2 * (18 + 4) + 4);
    }

    #[test]
    fn test_heisenberg_ops() {
        let circuit = heisenberg(4, 3).unwrap();
        // initial X + 3 steps × 3 pairs × 3 rotations
        assert_eq!(circuit.num_ops(), 1 + 3 * 3 * 3);
        assert!(matches!(
            heisenberg(1, 3),
            Err(EvalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_steane_fixed_size() {
        let circuit = steane_encoding().unwrap();
        assert_eq!(circuit.num_qubits(), 7);
        // 3 H + 9 CX + 3 × (4 H + 3 CX + 4 H)
        assert_eq!(circuit.num_ops(), 3 + 9 + 3 * 11);

        let spec = WorkloadSpec::new(Workload::Steane, 6);
        assert!(matches!(
            spec.build(),
            Err(EvalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_random_layers_deterministic() {
        let a = random_layers(6, 3, 42).unwrap();
        let b = random_layers(6, 3, 42).unwrap();
        assert_eq!(a.dag().op_names(), b.dag().op_names());
        assert_eq!(a.depth(), b.depth());
    }

    #[test]
    fn test_all_pairs_count() {
        let circuit = all_pairs(5).unwrap();
        assert_eq!(circuit.num_ops(), 10);
    }

    #[test]
    fn test_all_workloads_respect_qubit_bounds() {
        for workload in Workload::all() {
            let n = if workload == Workload::Steane { 7 } else { 5 };
            let circuit = WorkloadSpec::new(workload, n)
                .with_layers(2)
                .build()
                .unwrap();
            let total = circuit.num_qubits();
            for (_, inst) in circuit.dag().topological_ops() {
                for q in &inst.qubits {
                    assert!(
                        q.index() < total,
                        "{}: qubit {q} out of range",
                        workload.name()
                    );
                }
            }
        }
    }
}
