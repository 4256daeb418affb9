use std::collections::BTreeSet;

use log::LevelFilter;

/*
A literal is a nonzero signed integer; -l is the negation of l and the
variable index is the absolute value.
*/
pub type Literal = i32;

/*
A clause is a set of literals interpreted as their disjunction. The ordered
set keeps literal iteration deterministic, so "take the first literal" and
"peek the sole literal of a unit clause" always mean the same literal.
*/
pub type Clause = BTreeSet<Literal>;

/*
A CNF formula is a set of clauses; identical clauses collapse.
*/
pub type Cnf = BTreeSet<Clause>;

/*
An enum to store the type of solver algorithm to run.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolverType {
    DpDefault,
    Dp,
    Dpll,
    ClassicalDpll,
    DpllWatchers,
}

impl SolverType {
    /*
    The algorithm name as written on the command line, used for result and
    profile file names.
    */
    pub fn name(&self) -> &'static str {
        match self {
            SolverType::DpDefault => "dp_default",
            SolverType::Dp => "dp",
            SolverType::Dpll => "dpll",
            SolverType::ClassicalDpll => "classical_dpll",
            SolverType::DpllWatchers => "dpll_watchers",
        }
    }
}

/*
An enum to store the type of literal selection.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LiteralSelection {
    Ordered,          // First literal of the first clause
    VariableStateSum, // Variable State Sum selection
}

/*
A struct to store:
- the solver type
- the single file to run, if one was given
- which benchmark corpora to run
- how many timed runs to perform per file
- whether to collect a profile
- the logging level
*/
pub struct Solver {
    pub solver_type: SolverType,
    pub file_name: Option<String>,
    pub run_on_large_cnf: bool,
    pub run_on_large_cnf_only: bool,
    pub num_runs: i32,
    pub profile: bool,
    pub log_level: LevelFilter,
}

/*
A struct to store the solver configuration read by the engine.
*/
#[derive(Clone)]
pub struct Config {
    pub literal_selection: LiteralSelection,
}

/*
The outcome of a search. Conflicts during search are normal control flow;
the engine never fails with anything other than one of these two values.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Satisfiability {
    SAT,
    UNSAT,
}

/*
A struct to store statistics relating to the number of recursive solver
entries and the number of unit propagations.
*/
#[derive(Clone)]
pub struct Statistics {
    pub recursive_calls: i32,
    pub propagation_count: i32,
}

impl Statistics {
    /*
    Create an empty statistics struct.
    */
    pub fn new() -> Self {
        Statistics { recursive_calls: 0, propagation_count: 0 }
    }

    /*
    A function to increment the recursive entry count.
    */
    pub fn increment_recursive_calls(&mut self) {
        self.recursive_calls += 1;
    }

    /*
    A function to increment the propagation count.
    */
    pub fn increment_propagation_count(&mut self) {
        self.propagation_count += 1;
    }
}

/*
A struct recording whether a simplification rule changed the formula. The
rules set the flag when they remove a literal or a clause; the searches test
it to decide whether to re-enter.
*/
pub struct ChangeTracker {
    changed: bool,
}

impl ChangeTracker {
    pub fn new() -> Self {
        ChangeTracker { changed: false }
    }

    pub fn set_changed(&mut self) {
        self.changed = true;
    }

    pub fn has_changed(&self) -> bool {
        return self.changed;
    }
}
