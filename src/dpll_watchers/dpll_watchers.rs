use crate::data_structures::{Satisfiability, Statistics};
use crate::dpll_watchers::database::ClauseDatabase;
use crate::dpll_watchers::unit_propagate::{assign_and_propagate, unit_propagate};

/*
The DPLL procedure over the mutable clause database.

Each entry runs unit propagation to a fixed point, drains pure literals,
and then branches on the frequency heuristic. Branch frames snapshot the
whole database before assigning the decision literal and restore it when
the branch fails; a successful branch returns without restoring.

Returns SAT when the formula is satisfiable, UNSAT otherwise.
*/
pub fn solve_dpll(database: &mut ClauseDatabase, statistics: &mut Statistics) -> Satisfiability {
    statistics.increment_recursive_calls();
    if database.has_empty_clause() {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }
    if database.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }

    // 1. Unit propagation: assign all unit clauses repeatedly.
    if !unit_propagate(database, statistics) {
        return Satisfiability::UNSAT;
    }
    if database.is_empty() {
        return Satisfiability::SAT;
    }

    // 2. Pure literal elimination: assign pure literals until no more are
    // found.
    let mut changed = true;
    while changed {
        changed = false;
        let pure_literals = database.pure_literals();
        if !pure_literals.is_empty() {
            changed = true;
            for pure in pure_literals {
                log::debug!("Rule 3 activated: Pure literal {}.", pure);
                if !assign_and_propagate(database, pure, statistics) {
                    return Satisfiability::UNSAT;
                }
            }
            if database.is_empty() {
                return Satisfiability::SAT;
            }
        }
    }

    if database.has_empty_clause() {
        return Satisfiability::UNSAT;
    }
    if database.is_empty() {
        return Satisfiability::SAT;
    }

    // 3. Branching: choose a literal using the heuristic.
    let chosen_literal = database.pick_branch_literal();
    if chosen_literal == 0 {
        return Satisfiability::SAT;
    }

    log::debug!("Branching on literal {}.", chosen_literal);
    // Branch 1: Assume chosen_literal is True.
    let saved_state = database.snapshot();
    if assign_and_propagate(database, chosen_literal, statistics) {
        if solve_dpll(database, statistics).eq(&Satisfiability::SAT) {
            return Satisfiability::SAT;
        }
    }
    database.restore(saved_state);

    // Branch 2: Assume chosen_literal is False.
    let saved_state = database.snapshot();
    if assign_and_propagate(database, -chosen_literal, statistics) {
        if solve_dpll(database, statistics).eq(&Satisfiability::SAT) {
            return Satisfiability::SAT;
        }
    }
    database.restore(saved_state);

    return Satisfiability::UNSAT;
}
