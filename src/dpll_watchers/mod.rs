mod database;
mod dpll_watchers;
mod unit_propagate;

pub use database::{ClauseDatabase, DatabaseSnapshot};
pub use unit_propagate::{assign_and_propagate, unit_propagate};

use crate::data_structures::{ChangeTracker, Clause, Cnf, Satisfiability, Statistics};
use crate::subsumption::subsumption_filter;

/*
A function to run the watched-literal DPLL procedure over a parsed formula.

Subsumed clauses are filtered once up front; the search mutates clause sets
in place afterwards, and subsumption is not re-applied even where mutation
re-creates it. Tautological clauses are dropped during database
construction.
*/
pub fn solve(clauses: &Cnf, n_vars: i32, statistics: &mut Statistics) -> Satisfiability {
    let preprocessed = subsumption_filter(clauses, &mut ChangeTracker::new());
    let clause_list: Vec<Clause> = preprocessed.iter().cloned().collect();
    let database = &mut ClauseDatabase::new(clause_list, n_vars);
    return dpll_watchers::solve_dpll(database, statistics);
}
