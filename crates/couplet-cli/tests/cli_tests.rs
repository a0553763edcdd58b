//! CLI utility tests.
//!
//! The CLI is a binary crate, so these tests exercise the equivalent
//! logic through the underlying crates: name parsing, workload
//! construction, and the full compare path a CLI invocation drives.

use couplet_compile::{CompileBackend, PassCompiler, TopologyModel};
use couplet_eval::{Workload, WorkloadSpec, compare};

// ============================================================================
// Topology name parsing
// ============================================================================

mod topology_parsing {
    use super::*;

    #[test]
    fn test_linear() {
        let model = TopologyModel::from_name("linear", 8).unwrap();
        assert_eq!(model, TopologyModel::linear(8));
        assert_eq!(model.num_qubits(), 8);
    }

    #[test]
    fn test_chain_alias() {
        assert_eq!(
            TopologyModel::from_name("chain", 4),
            Some(TopologyModel::linear(4))
        );
    }

    #[test]
    fn test_grid() {
        let model = TopologyModel::from_name("grid", 9).unwrap();
        assert_eq!(model, TopologyModel::grid(3, 3));
    }

    #[test]
    fn test_all_to_all() {
        let model = TopologyModel::from_name("all-to-all", 6).unwrap();
        assert_eq!(model, TopologyModel::all_to_all(6));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(TopologyModel::from_name("Linear", 4).is_some());
        assert!(TopologyModel::from_name("GRID", 4).is_some());
        assert!(TopologyModel::from_name("All-To-All", 4).is_some());
    }

    #[test]
    fn test_unknown_topology() {
        assert!(TopologyModel::from_name("heavy-hex", 4).is_none());
    }
}

// ============================================================================
// Workload name parsing
// ============================================================================

mod workload_parsing {
    use super::*;

    #[test]
    fn test_every_listed_name_parses() {
        for workload in Workload::all() {
            assert_eq!(Workload::from_name(workload.name()), Some(workload));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Workload::from_name("maxcut"), Some(Workload::QaoaMaxcut));
        assert_eq!(Workload::from_name("ansatz"), Some(Workload::TwoLocal));
        assert_eq!(
            Workload::from_name("bv"),
            Some(Workload::BernsteinVazirani)
        );
    }

    #[test]
    fn test_unknown_workload() {
        assert!(Workload::from_name("grover9000").is_none());
    }

    #[test]
    fn test_descriptions_nonempty() {
        for workload in Workload::all() {
            assert!(!workload.description().is_empty());
        }
    }
}

// ============================================================================
// End-to-end: what a `couplet compare` invocation runs
// ============================================================================

mod compare_flow {
    use super::*;

    #[test]
    fn test_default_invocation_flow() {
        // couplet compare --workload qft --n-qubits 6
        let circuit = WorkloadSpec::new(Workload::Qft, 6).build().unwrap();
        let n = u32::try_from(circuit.num_qubits()).unwrap();

        let result = compare(
            &PassCompiler::new(),
            &circuit,
            &TopologyModel::from_name("linear", n).unwrap(),
            &TopologyModel::all_to_all(n),
        )
        .unwrap();

        assert_eq!(result.reference.routing_ops, 0);
        assert!(result.depth_ratio >= 1.0);
    }

    #[test]
    fn test_comparator_sizes_models_from_circuit() {
        // The comparator uses ancillas: models must cover 2n qubits, the
        // way the CLI sizes them from the built circuit.
        let circuit = WorkloadSpec::new(Workload::Comparator, 4).build().unwrap();
        assert_eq!(circuit.num_qubits(), 8);

        let n = u32::try_from(circuit.num_qubits()).unwrap();
        let compiled = PassCompiler::new()
            .compile(&circuit, &TopologyModel::linear(n))
            .unwrap();
        assert_eq!(compiled.total_ops, circuit.num_ops() + compiled.routing_ops);
    }

    #[test]
    fn test_invalid_size_surfaces_error() {
        // couplet compare --workload qft --n-qubits 0 → non-zero exit
        let err = WorkloadSpec::new(Workload::Qft, 0).build().unwrap_err();
        assert!(err.to_string().contains("Invalid parameter"));
    }
}
