mod dp;
mod dp_baseline;
mod dp_tests;

use crate::data_structures::{Cnf, Satisfiability, SolverType, Statistics};

/*
A function to run one of the Davis-Putnam procedures over a parsed formula,
checking for satisfiability and unsatisfiability.
*/
pub fn solve(solver_type: SolverType, clauses: &Cnf, n_vars: i32, statistics: &mut Statistics) -> Satisfiability {
    if solver_type.eq(&SolverType::DpDefault) {
        return dp_baseline::dp_default(clauses, statistics);
    } else {
        return dp::dp(clauses, statistics, n_vars);
    }
}
