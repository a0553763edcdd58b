//! Writing comparison output to files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EvalError, EvalResult};
use crate::report::{ComparisonReport, render_csv, render_table};

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Serialize a report to JSON.
pub fn to_json(report: &ComparisonReport, config: &ExportConfig) -> EvalResult<String> {
    if config.pretty {
        serde_json::to_string_pretty(report).map_err(EvalError::from)
    } else {
        serde_json::to_string(report).map_err(EvalError::from)
    }
}

/// Write a report to a file, choosing the format from the path
/// extension: `.json` for the full envelope, `.csv` for the tabular
/// summary, anything else for the text table.
pub fn write_report(report: &ComparisonReport, path: &Path, config: &ExportConfig) -> EvalResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = match ext.as_str() {
        "json" => to_json(report, config)?,
        "csv" => render_csv(&report.result),
        _ => render_table(&report.result),
    };

    std::fs::write(path, content)
        .map_err(|e| EvalError::Io(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ComparisonResult, TopologySummary};

    fn sample_report() -> ComparisonReport {
        ComparisonReport::new(ComparisonResult {
            circuit: "ghz".into(),
            num_qubits: 3,
            logical_ops: 6,
            baseline: TopologySummary {
                topology: "linear".into(),
                total_ops: 6,
                routing_ops: 0,
                depth: 5,
            },
            reference: TopologySummary {
                topology: "all-to-all".into(),
                total_ops: 6,
                routing_ops: 0,
                depth: 5,
            },
            depth_ratio: 1.0,
            gate_delta: 0,
        })
    }

    #[test]
    fn test_export_config_default() {
        assert!(ExportConfig::default().pretty);
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let report = sample_report();
        let pretty = to_json(&report, &ExportConfig { pretty: true }).unwrap();
        let compact = to_json(&report, &ExportConfig { pretty: false }).unwrap();
        assert!(pretty.len() > compact.len());
        assert!(compact.contains("\"ghz\""));
    }

    #[test]
    fn test_write_report_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();
        let config = ExportConfig::default();

        let json_path = dir.path().join("out.json");
        write_report(&report, &json_path, &config).unwrap();
        let json = std::fs::read_to_string(&json_path).unwrap();
        assert!(json.contains("schema_version"));

        let csv_path = dir.path().join("out.csv");
        write_report(&report, &csv_path, &config).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("topology,total_gates"));

        let txt_path = dir.path().join("out.txt");
        write_report(&report, &txt_path, &config).unwrap();
        let txt = std::fs::read_to_string(&txt_path).unwrap();
        assert!(txt.contains("Circuit: ghz"));
    }
}
