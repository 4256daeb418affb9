use crate::clause_ops::{contains_empty_clause, find_unit_literals, remove_clauses_with_value, remove_tautologies, remove_value_from_clauses};
use crate::data_structures::{ChangeTracker, Cnf, Satisfiability, Statistics};
use crate::literal_selection::select_literal_vss;
use crate::pure_literal_deletion::{get_pure_literals, remove_pure_literals};
use crate::subsumption::subsumption_filter;
use crate::util::build_clause_references;

/*
The Davis-Putnam procedure over immutable clause sets.

Tautologies are removed once per entry, unit propagation runs to a fixed
point, and pure-literal elimination and subsumption each trigger a fresh
entry when they changed the formula. Only when all rules are quiet does the
procedure split on a branch literal. Every intermediate formula is a fresh
set; nothing is mutated in place.

Returns SAT when the formula is satisfiable, UNSAT otherwise.
*/
pub fn dp(clauses: &Cnf, statistics: &mut Statistics, n_vars: i32) -> Satisfiability {
    let mut changed = ChangeTracker::new();
    statistics.increment_recursive_calls();

    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }
    if contains_empty_clause(clauses) {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }

    // Apply the First Rule: Remove Tautologies
    let mut clauses = remove_tautologies(clauses);

    // Apply the Second Rule: Unit Clause Elimination // Unit Propagation
    let mut unit_literals = find_unit_literals(&clauses);
    while !unit_literals.is_empty() {
        for unit in &unit_literals {
            log::debug!("Rule 2 activated: Unit literal {}.", unit);
            statistics.increment_propagation_count();
            clauses = remove_clauses_with_value(&clauses, *unit, &mut changed);
            clauses = remove_value_from_clauses(&clauses, -unit, &mut changed);
        }
        unit_literals = find_unit_literals(&clauses);
    }

    if changed.has_changed() {
        return dp(&clauses, statistics, n_vars);
    }
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }
    if contains_empty_clause(&clauses) {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }

    // Apply Third Rule: Pure Literal Elimination
    let clause_references = build_clause_references(&clauses);
    let pure_literals = get_pure_literals(&clause_references);
    if !pure_literals.is_empty() {
        clauses = remove_pure_literals(&clauses, &pure_literals, &mut changed);
        if changed.has_changed() {
            return dp(&clauses, statistics, n_vars);
        }
        if clauses.is_empty() {
            log::debug!("Success: All clauses satisfied.");
            return Satisfiability::SAT;
        }
        if contains_empty_clause(&clauses) {
            log::debug!("Failure: Encountered an empty clause.");
            return Satisfiability::UNSAT;
        }
    }

    // Apply the 4th Rule: If a clause is a superset of another clause, remove the superset clause.
    clauses = subsumption_filter(&clauses, &mut changed);
    if changed.has_changed() {
        return dp(&clauses, statistics, n_vars);
    }
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }
    if contains_empty_clause(&clauses) {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }

    // Apply Davis Putnam Branching: if lit and -lit are in the clauses, we can branch
    let clause_references = build_clause_references(&clauses);
    let chosen_literal = select_literal_vss(&clause_references, n_vars);
    if chosen_literal == 0 {
        log::debug!("No literals left, check if all clauses are satisfied");
        return Satisfiability::SAT;
    }

    log::debug!("Branching on literal {}.", chosen_literal);
    // Branch 1: Assume chosen_literal is True
    let mut branch_true = remove_clauses_with_value(&clauses, chosen_literal, &mut changed);
    branch_true = remove_value_from_clauses(&branch_true, -chosen_literal, &mut changed);
    if dp(&branch_true, statistics, n_vars).eq(&Satisfiability::SAT) {
        return Satisfiability::SAT;
    }

    // Branch 2: Assume chosen_literal is False
    let mut branch_false = remove_clauses_with_value(&clauses, -chosen_literal, &mut changed);
    branch_false = remove_value_from_clauses(&branch_false, chosen_literal, &mut changed);
    return dp(&branch_false, statistics, n_vars);
}
