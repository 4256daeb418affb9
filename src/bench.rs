use std::{fs, time::{Duration, Instant}};

use serde::Serialize;

use crate::data_structures::{Cnf, Config, Satisfiability, Solver, SolverType, Statistics};
use crate::dimacs::read_cnf;
use crate::util::read_instance_name;
use crate::{dp, dpll, dpll_watchers};

// Default benchmark corpora: uniform random 3-SAT at 50 variables,
// satisfiable and unsatisfiable sets.
const SAT_CORPUS: &str = "./uf50";
const UNSAT_CORPUS: &str = "./uuf50";
const LARGE_INSTANCES: [&str; 2] = ["uf175-01.cnf", "uuf150-01.cnf"];

/*
A struct to store one instance's timing and search counters for the profile
dump.
*/
#[derive(Serialize)]
struct ProfileEntry {
    instance: String,
    result: String,
    parse_micros: u128,
    solve_micros: u128,
    recursive_calls: i32,
    propagation_count: i32,
}

/*
A struct to store the whole profile written to disk when --profile is set.
*/
#[derive(Serialize)]
struct ProfileReport {
    algorithm: String,
    num_runs: i32,
    total_micros: u128,
    entries: Vec<ProfileEntry>,
}

/*
A function to dispatch a parsed formula to the selected solver variant.
*/
pub fn dispatch(solver_type: SolverType, clauses: &Cnf, n_vars: i32, config: &Config, statistics: &mut Statistics) -> Satisfiability {
    match solver_type {
        SolverType::DpDefault | SolverType::Dp => dp::solve(solver_type, clauses, n_vars, statistics),
        SolverType::Dpll | SolverType::ClassicalDpll => dpll::solve(clauses, n_vars, config, statistics),
        SolverType::DpllWatchers => dpll_watchers::solve(clauses, n_vars, statistics),
    }
}

/*
A function to run the selected solver over the selected files.

Each file is parsed once and solved num_runs times with fresh statistics;
per-run results, wall times, and recursive entry counts are logged, and
totals are logged at the end. Files that cannot be read or parsed are
logged and skipped. A corpora run additionally stores detailed results in
"results-<algorithm>.txt"; --profile stores per-instance timing in
"profile-<algorithm>.json".
*/
pub fn run(solver: &Solver, config: &Config) {
    let cnf_files = collect_files(solver);
    let single_instance = solver.file_name.is_some();

    let bench_timer = Instant::now();
    let (mut total, mut satisfiable, mut unsatisfiable, mut skipped) = (0, 0, 0, 0);
    let mut sum_times = Duration::ZERO;
    let mut profile_entries = Vec::new();
    let mut result_lines = String::new();

    for cnf_file in &cnf_files {
        log::info!("Starting {} with clauses from {}", solver.solver_type.name(), cnf_file);

        let parse_timer = Instant::now();
        let parsed = read_cnf(cnf_file);
        let parse_time = parse_timer.elapsed();
        let (clauses, n_vars) = match parsed {
            Ok(parsed) => parsed,
            Err(error) => {
                log::error!("Skipping {}: {}", cnf_file, error);
                skipped += 1;
                continue;
            }
        };

        let instance_name = read_instance_name(cnf_file);
        let mut last_outcome = None;
        for _ in 0..solver.num_runs {
            let statistics = &mut Statistics::new();
            let solve_timer = Instant::now();
            let result = dispatch(solver.solver_type, &clauses, n_vars, config, statistics);
            let solve_time = solve_timer.elapsed();
            sum_times += solve_time;

            log::info!(
                "Formula is {} in {:?}. {} called {} times.",
                describe(result),
                solve_time,
                solver.solver_type.name(),
                statistics.recursive_calls
            );
            result_lines += &format!(
                "\nInstance: {} -- Runtime: {:?} -- Result: {:?} -- Recursive calls: {}, Propagations: {}",
                instance_name, solve_time, result, statistics.recursive_calls, statistics.propagation_count
            );
            profile_entries.push(ProfileEntry {
                instance: instance_name.clone(),
                result: describe(result).to_string(),
                parse_micros: parse_time.as_micros(),
                solve_micros: solve_time.as_micros(),
                recursive_calls: statistics.recursive_calls,
                propagation_count: statistics.propagation_count,
            });
            last_outcome = Some(result);
        }

        total += 1;
        match last_outcome {
            Some(Satisfiability::SAT) => satisfiable += 1,
            Some(Satisfiability::UNSAT) => unsatisfiable += 1,
            None => {}
        }
    }

    log::info!(
        "Total time taken: {:?} for {} files, with {} run(s) each.",
        sum_times,
        cnf_files.len(),
        solver.num_runs
    );

    if !single_instance {
        let mut output_string = format!(
            "--- {} ---\nCONFIG: [Literal Selection: {:?}, Runs per file: {}]",
            solver.solver_type.name(),
            config.literal_selection,
            solver.num_runs
        );
        output_string += &format!(
            "\n--------------------------------------------------------------\nTotal: {}, Sat: {}, Unsat: {}, Skipped: {}\nComplete time: {:?}",
            total, satisfiable, unsatisfiable, skipped, bench_timer.elapsed()
        );
        output_string += &result_lines;
        let pathname = format!("results-{}.txt", solver.solver_type.name());
        if let Err(error) = fs::write(&pathname, output_string) {
            log::error!("Unable to write {}: {}", pathname, error);
        }
    }

    if solver.profile {
        write_profile(solver, profile_entries, bench_timer.elapsed());
    }
}

/*
A function to decide which CNF files to run on. A single file given on the
command line overrides the corpora; otherwise the 50-variable corpora are
run in sorted order, with the large instances appended or substituted on
request.
*/
fn collect_files(solver: &Solver) -> Vec<String> {
    if let Some(file_name) = &solver.file_name {
        return vec![file_name.clone()];
    }
    let mut cnf_files = Vec::new();
    if !solver.run_on_large_cnf_only {
        cnf_files.extend(read_corpus(SAT_CORPUS));
        cnf_files.extend(read_corpus(UNSAT_CORPUS));
        cnf_files.sort();
    }
    if solver.run_on_large_cnf || solver.run_on_large_cnf_only {
        cnf_files.extend(LARGE_INSTANCES.iter().map(|instance| instance.to_string()));
    }
    return cnf_files;
}

/*
A function to list the .cnf files of a corpus directory. A missing
directory is logged and contributes no files.
*/
fn read_corpus(directory: &str) -> Vec<String> {
    let paths = match fs::read_dir(directory) {
        Ok(paths) => paths,
        Err(error) => {
            log::error!("Cannot read corpus directory {}: {}", directory, error);
            return Vec::new();
        }
    };
    let mut cnf_files = Vec::new();
    for path in paths {
        if let Ok(entry) = path {
            let file_path = entry.path().display().to_string();
            if file_path.ends_with(".cnf") {
                cnf_files.push(file_path);
            }
        }
    }
    return cnf_files;
}

/*
A function to write the profile report as JSON.
*/
fn write_profile(solver: &Solver, entries: Vec<ProfileEntry>, elapsed: Duration) {
    let report = ProfileReport {
        algorithm: solver.solver_type.name().to_string(),
        num_runs: solver.num_runs,
        total_micros: elapsed.as_micros(),
        entries,
    };
    let pathname = format!("profile-{}.json", solver.solver_type.name());
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            if let Err(error) = fs::write(&pathname, json) {
                log::error!("Unable to write {}: {}", pathname, error);
            }
        }
        Err(error) => log::error!("Unable to serialize profile: {}", error),
    }
}

/*
A function to spell a result out for the logs.
*/
fn describe(result: Satisfiability) -> &'static str {
    if result.eq(&Satisfiability::SAT) {
        return "satisfiable";
    } else {
        return "unsatisfiable";
    }
}
