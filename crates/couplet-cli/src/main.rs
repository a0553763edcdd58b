//! Couplet Command-Line Interface
//!
//! ```text
//!              C O U P L E T
//!     Connectivity-cost benchmarking for
//!           quantum circuit routing
//! ```
//!
//! Builds a workload circuit, compiles it under two topology models, and
//! reports the gate/routing/depth gap between them.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{compare, compile, version, workloads};

/// Couplet - topology comparison benchmarks for quantum circuits
#[derive(Parser)]
#[command(name = "couplet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a workload under a constrained topology and all-to-all
    Compare {
        /// Workload family (see `couplet workloads`)
        #[arg(short, long, default_value = "qft")]
        workload: String,

        /// Problem size in qubits
        #[arg(short, long, default_value = "10")]
        n_qubits: u32,

        /// Repetition count (ansatz reps, QAOA layers, Trotter steps)
        #[arg(short, long, default_value = "1")]
        layers: u32,

        /// Seed for seeded workloads
        #[arg(long, default_value = "7")]
        seed: u64,

        /// Constrained arm of the comparison (linear, grid)
        #[arg(short, long, default_value = "linear")]
        baseline: String,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Also write the report to a file (format by extension)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compile a workload under a single topology and print its metrics
    Compile {
        /// Workload family (see `couplet workloads`)
        #[arg(short, long, default_value = "qft")]
        workload: String,

        /// Problem size in qubits
        #[arg(short, long, default_value = "10")]
        n_qubits: u32,

        /// Topology model (linear, grid, all-to-all)
        #[arg(short, long, default_value = "linear")]
        topology: String,

        /// Repetition count (ansatz reps, QAOA layers, Trotter steps)
        #[arg(short, long, default_value = "1")]
        layers: u32,

        /// Seed for seeded workloads
        #[arg(long, default_value = "7")]
        seed: u64,

        /// Write the metrics as CSV to a file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List available workload generators
    Workloads,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Compare {
            workload,
            n_qubits,
            layers,
            seed,
            baseline,
            format,
            output,
        } => compare::execute(
            &workload,
            n_qubits,
            layers,
            seed,
            &baseline,
            &format,
            output.as_deref(),
        ),

        Commands::Compile {
            workload,
            n_qubits,
            topology,
            layers,
            seed,
            output,
        } => compile::execute(
            &workload,
            n_qubits,
            &topology,
            layers,
            seed,
            output.as_deref(),
        ),

        Commands::Workloads => {
            workloads::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
