use crate::clause_ops::{contains_empty_clause, find_unit_literals, remove_clauses_with_value, remove_tautologies, remove_value_from_clauses};
use crate::data_structures::{ChangeTracker, Cnf, Config, Literal, LiteralSelection, Satisfiability, Statistics};
use crate::literal_selection::{select_first_literal, select_literal_vss};
use crate::pure_literal_deletion::{get_pure_literals, remove_pure_literals};
use crate::subsumption::subsumption_filter;
use crate::util::build_clause_references;

/*
The DPLL procedure over immutable clause sets. Compared to DP, fewer rules:
- Tautology removal and subsumption run once here, before the recursion;
  subsumed clauses rarely reappear deeper in the search.
- Inside the recursion only unit propagation, pure literal elimination, and
  branching remain.
*/
pub fn dpll(clauses: &Cnf, config: &Config, statistics: &mut Statistics, n_vars: i32) -> Satisfiability {
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }
    if contains_empty_clause(clauses) {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }

    // Apply Rule 1: Remove tautologies
    let clauses = remove_tautologies(clauses);

    // Apply Rule 4: Remove clauses that are supersets of other clauses
    let clauses = subsumption_filter(&clauses, &mut ChangeTracker::new());
    return dpll_helper(&clauses, config, statistics, n_vars);
}

/*
The recursive core shared by the frequency-guided and classical renditions.
Unit propagation runs to a fixed point, pure literal elimination re-enters
on change, and the remaining formula is split on the configured heuristic's
literal.

Returns SAT when the formula is satisfiable, UNSAT otherwise.
*/
fn dpll_helper(clauses: &Cnf, config: &Config, statistics: &mut Statistics, n_vars: i32) -> Satisfiability {
    let mut changed = ChangeTracker::new();
    statistics.increment_recursive_calls();

    // Stopping conditions
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }
    if contains_empty_clause(clauses) {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }

    // Apply 2nd Rule: Unit propagation
    let mut clauses = clauses.clone();
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

    // Stopping conditions
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
        // Stopping conditions
        if clauses.is_empty() {
            log::debug!("Success: All clauses satisfied.");
            return Satisfiability::SAT;
        }
        if contains_empty_clause(&clauses) {
            log::debug!("Failure: Encountered an empty clause.");
            return Satisfiability::UNSAT;
        }
        if changed.has_changed() {
            return dpll_helper(&clauses, config, statistics, n_vars);
        }
    }

    // Branching
    let chosen_literal = select_branch_literal(&clauses, config, n_vars);
    if chosen_literal == 0 {
        log::debug!("No literals left, check if all clauses are satisfied");
        return Satisfiability::SAT;
    }

    log::debug!("Branching on literal {}.", chosen_literal);
    // Branch 1: Assume chosen_literal is True
    let mut branch_true = remove_clauses_with_value(&clauses, chosen_literal, &mut changed);
    branch_true = remove_value_from_clauses(&branch_true, -chosen_literal, &mut changed);
    if dpll_helper(&branch_true, config, statistics, n_vars).eq(&Satisfiability::SAT) {
        return Satisfiability::SAT;
    }

    // Branch 2: Assume chosen_literal is False
    let mut branch_false = remove_clauses_with_value(&clauses, -chosen_literal, &mut changed);
    branch_false = remove_value_from_clauses(&branch_false, chosen_literal, &mut changed);
    return dpll_helper(&branch_false, config, statistics, n_vars);
}

/*
A function to pick the branch literal for the configured selection scheme.
*/
fn select_branch_literal(clauses: &Cnf, config: &Config, n_vars: i32) -> Literal {
    if config.literal_selection.eq(&LiteralSelection::Ordered) {
        return select_first_literal(clauses);
    } else {
        return select_literal_vss(&build_clause_references(clauses), n_vars);
    }
}
