//! Rendering of comparison results for human and machine consumption.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::compare::{ComparisonResult, TopologySummary};

/// Report schema version, bumped on breaking layout changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Timestamped envelope around a comparison result, for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Schema version for forward compatibility.
    pub schema_version: String,
    /// Timestamp of the comparison.
    pub timestamp: DateTime<Utc>,
    /// The comparison payload.
    pub result: ComparisonResult,
}

impl ComparisonReport {
    /// Wrap a result with the current timestamp.
    pub fn new(result: ComparisonResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.into(),
            timestamp: Utc::now(),
            result,
        }
    }
}

/// CSV header used by [`render_csv`] and [`render_summaries_csv`].
const CSV_HEADER: &str = "topology,total_gates,routing_ops,depth";

/// Render arbitrary per-topology summaries as CSV.
pub fn render_summaries_csv(summaries: &[TopologySummary]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for s in summaries {
        out.push_str(&format!(
            "{},{},{},{}\n",
            s.topology, s.total_ops, s.routing_ops, s.depth
        ));
    }
    out
}

/// Render a comparison result as CSV (one row per topology arm).
pub fn render_csv(result: &ComparisonResult) -> String {
    render_summaries_csv(&[result.baseline.clone(), result.reference.clone()])
}

/// Render a comparison result as an aligned text table with depth bars.
pub fn render_table(result: &ComparisonResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Circuit: {} ({} qubits, {} logical ops)\n\n",
        result.circuit, result.num_qubits, result.logical_ops
    ));

    out.push_str(&format!(
        "{:<12} {:>12} {:>12} {:>7}\n",
        "topology", "total_gates", "routing_ops", "depth"
    ));

    let max_depth = result.baseline.depth.max(result.reference.depth).max(1);
    for arm in [&result.baseline, &result.reference] {
        let bar_len = (arm.depth * 32).div_ceil(max_depth);
        out.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>7}   {}\n",
            arm.topology,
            arm.total_ops,
            arm.routing_ops,
            arm.depth,
            "█".repeat(bar_len)
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "depth ratio ({} / {}): {:.2}x\n",
        result.baseline.topology, result.reference.topology, result.depth_ratio
    ));
    out.push_str(&format!(
        "extra gates under {}: {}\n",
        result.baseline.topology, result.gate_delta
    ));
    if result.baseline.routing_ops > 0 {
        out.push_str(&format!(
            "gates spent moving data under {}: {}\n",
            result.baseline.topology, result.baseline.routing_ops
        ));
    }

    out
}
