mod dpll;
mod dpll_tests;

use crate::data_structures::{Cnf, Config, Satisfiability, Statistics};

/*
A function to run the DPLL procedure over a parsed formula, checking for
satisfiability and unsatisfiability. The branch heuristic comes from the
configuration; the classical rendition selects literals in clause order.
*/
pub fn solve(clauses: &Cnf, n_vars: i32, config: &Config, statistics: &mut Statistics) -> Satisfiability {
    return dpll::dpll(clauses, config, statistics, n_vars);
}
