use std::io;

use clap::Parser;
use log::LevelFilter;

use crate::data_structures::{Config, LiteralSelection, Solver, SolverType};

/*
The command line surface of the benchmark runner. Enum-valued flags go
through the value parser functions below, so an unknown name is an argument
error (nonzero exit) rather than a fallback.
*/
#[derive(Parser)]
#[command(name = "sat_evaluators", about = "Runs a family of DP/DPLL procedures over DIMACS CNF files.")]
struct CliArguments {
    /// The algorithm to use for solving the SAT problem: one of dp_default,
    /// dp, dpll, classical_dpll, dpll_watchers.
    #[arg(long = "algorithm", default_value = "dpll_watchers", value_parser = algorithm_parser)]
    algorithm: SolverType,

    /// The CNF file to test the algorithm on, instead of the benchmark
    /// corpora.
    #[arg(long = "file_name")]
    file_name: Option<String>,

    /// Whether to run the algorithm on the large problems as well.
    #[arg(long = "run_on_large_cnf")]
    run_on_large_cnf: bool,

    /// Whether to run the algorithm on the large problems only.
    #[arg(long = "run_on_large_cnf_only")]
    run_on_large_cnf_only: bool,

    /// The number of times to run the algorithm on each file.
    #[arg(long = "num_runs", default_value_t = 1)]
    num_runs: i32,

    /// Whether to write per-instance timing data to disk.
    #[arg(long = "profile")]
    profile: bool,

    /// The logging level to use.
    #[arg(long = "log_level", default_value = "info", value_parser = log_level_parser)]
    log_level: LevelFilter,
}

/*
A function to read the runner and engine configuration from the command
line.

Returns:
- The runner settings: solver type, file selection, run counts, profiling,
  log level.
- The engine settings: the literal selection scheme, which the classical
  variant pins to in-order selection.
*/
pub fn parse_arguments() -> (Solver, Config) {
    let arguments = CliArguments::parse();

    let literal_selection = if arguments.algorithm.eq(&SolverType::ClassicalDpll) {
        LiteralSelection::Ordered
    } else {
        LiteralSelection::VariableStateSum
    };

    let solver = Solver {
        solver_type: arguments.algorithm,
        file_name: arguments.file_name.filter(|name| !name.is_empty()),
        run_on_large_cnf: arguments.run_on_large_cnf,
        run_on_large_cnf_only: arguments.run_on_large_cnf_only,
        num_runs: arguments.num_runs.max(1),
        profile: arguments.profile,
        log_level: arguments.log_level,
    };
    let config = Config { literal_selection };

    return (solver, config);
}

/*
A function to read SolverType values from the command line. Returns the
solver type or an error for an unknown name.
*/
fn algorithm_parser(arg: &str) -> Result<SolverType, io::Error> {
    match arg.to_lowercase().as_str() {
        "dp_default" => Ok(SolverType::DpDefault),
        "dp" => Ok(SolverType::Dp),
        "dpll" => Ok(SolverType::Dpll),
        "classical_dpll" => Ok(SolverType::ClassicalDpll),
        "dpll_watchers" => Ok(SolverType::DpllWatchers),
        _ => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Unknown algorithm; expected one of dp_default, dp, dpll, classical_dpll, dpll_watchers",
        )),
    }
}

/*
A function to read logging levels from the command line. Returns the level
filter or an error for an unknown severity name.
*/
fn log_level_parser(arg: &str) -> Result<LevelFilter, io::Error> {
    match arg.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Unknown log level; expected one of off, error, warn, info, debug, trace",
        )),
    }
}
