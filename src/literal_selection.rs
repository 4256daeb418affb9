use multimap::MultiMap;

use crate::clause_ops::peek_literal;
use crate::data_structures::{Cnf, Literal};
use crate::util::get_variable_state_sum;

/*
A function to select the first literal of the first clause in the formula's
set order. This is the unoptimised classical branching rule; any
deterministic pick would do, and the set order fixes one.

Returns the selected literal, or 0 when the formula is empty.
*/
pub fn select_first_literal(clauses: &Cnf) -> Literal {
    match clauses.iter().next() {
        Some(clause) if !clause.is_empty() => peek_literal(clause),
        _ => 0,
    }
}

/*
A function to select a branch literal based on the variable state sum.

Only variables appearing in both polarities are candidates; assigning a
single-polarity variable is the pure literal rule's job. Among candidates
the highest combined appearance count wins, the lowest variable index wins
count ties, and the polarity with the larger individual count is returned
with ties going to the positive polarity.

Returns the selected literal, or 0 when no variable appears in both
polarities.
*/
pub fn select_literal_vss(clause_references: &MultiMap<Literal, i32>, n_vars: i32) -> Literal {
    let mut max_appearances = 0;
    let mut choice = 0;
    for variable in 1..=n_vars {
        if !clause_references.contains_key(&variable) || !clause_references.contains_key(&-variable) {
            continue;
        }
        let (appearances, choose_positive) = get_variable_state_sum(clause_references, variable);
        if appearances > max_appearances {
            max_appearances = appearances;
            choice = if choose_positive { variable } else { -variable };
        }
    }
    return choice;
}
