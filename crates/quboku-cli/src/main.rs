//! quboku - compile a generalized Sudoku board into a quadratic penalty model.
//!
//! Reads a problem configuration (TOML/YAML file or flags), runs the
//! compiler, and prints a model summary, the full term list, or JSON for
//! downstream optimizers.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quboku_compiler::builders::{
    one_number_per_cell, unique_per_column, unique_per_row, unique_per_subgrid,
};
use quboku_compiler::compile;
use quboku_core::{GridSpec, PenaltyModel};
use quboku_config::ProblemConfig;

#[derive(Debug, Parser)]
#[command(name = "quboku", version, about = "Sudoku constraint-to-QUBO compiler")]
struct Args {
    /// Problem configuration file (.toml, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Square board size; replaces the configured board geometry
    #[arg(short, long)]
    size: Option<usize>,

    /// Penalty weight for every constraint family
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Print every linear and quadratic coefficient
    #[arg(long)]
    dump_terms: bool,

    /// Emit the compiled model as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProblemConfig::new().with_size(4),
    };
    if let Some(size) = args.size {
        config.board = Default::default();
        config.board.size = Some(size);
    }
    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
    }

    let spec = config.to_spec()?;
    let model = compile(&spec)?;

    if args.json {
        let out = serde_json::json!({ "spec": spec, "model": model });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_summary(&spec, &model)?;
    if args.dump_terms {
        dump_terms(&model);
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ProblemConfig, Box<dyn Error>> {
    let by_extension = path.extension().and_then(|e| e.to_str());
    let config = match by_extension {
        Some("yaml") | Some("yml") => ProblemConfig::from_yaml_file(path)?,
        _ => ProblemConfig::from_toml_file(path)?,
    };
    Ok(config)
}

fn print_summary(spec: &GridSpec, model: &PenaltyModel) -> Result<(), Box<dyn Error>> {
    println!(
        "board: {} x {} ({} x {} subgrids), {} qubits/cell, alpha {}",
        spec.rows(),
        spec.cols(),
        spec.subgrid_rows(),
        spec.subgrid_cols(),
        spec.qubits_per_cell(),
        spec.alpha(),
    );
    println!("variables: {}", spec.total_vars());

    let cell = one_number_per_cell(spec)?;
    let row = unique_per_row(spec)?;
    let col = unique_per_column(spec)?;
    let sub = unique_per_subgrid(spec)?;
    println!(
        "family terms: cell {} / row {} / column {} / subgrid {}",
        cell.len(),
        row.len(),
        col.len(),
        sub.len(),
    );

    println!(
        "model: offset {}, {} linear + {} quadratic coefficients",
        model.offset(),
        model.linear().len(),
        model.quadratic().len(),
    );
    Ok(())
}

fn dump_terms(model: &PenaltyModel) {
    for (&v, &c) in model.linear() {
        println!("{c:>12.1}  z[{v}]");
    }
    for (&(a, b), &c) in model.quadratic() {
        println!("{c:>12.1}  z[{a}] z[{b}]");
    }
}
