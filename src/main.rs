use env_logger::{Builder, Target};
use log::LevelFilter;

mod bench;
mod clause_ops;
mod data_structures;
mod dimacs;
mod dp;
mod dpll;
mod dpll_watchers;
mod literal_selection;
mod parse_config;
mod pure_literal_deletion;
mod subsumption;
mod util;

/*
The main function for running the different SAT solver implementations.

Run command "cargo run --release -- --algorithm dpll_watchers --file_name <file.cnf>",
or without --file_name to sweep the benchmark corpora.

Exit code is 0 for any completed run, including unsatisfiable results;
argument parsing errors exit nonzero.
*/
fn main() {
    let (solver, config) = parse_config::parse_arguments();
    init_logging(solver.log_level);
    bench::run(&solver, &config);
}

/*
A function to initialise the logger on stdout at the requested level.
--log_level off is the silent logger used for clean benchmark timings.
*/
fn init_logging(log_level: LevelFilter) {
    let mut builder = Builder::new();
    builder.target(Target::Stdout).filter_level(log_level);
    builder.init();
}
