use multimap::MultiMap;

use crate::clause_ops::remove_clauses_with_value;
use crate::data_structures::{ChangeTracker, Cnf, Literal};

/*
A function to get a list of pure literals from the clause references. A
literal is pure when it appears in some clause and its negation appears in
none.

Returns the list of pure literals in ascending order.
*/
pub fn get_pure_literals(clause_references: &MultiMap<Literal, i32>) -> Vec<Literal> {
    let mut pure_literals = Vec::new();
    for key in clause_references.keys() {
        let complement_key = -key;
        if !clause_references.contains_key(&complement_key) {
            pure_literals.push(*key);
        }
    }
    // Key order of the map is arbitrary; sort so removal traces and logs are
    // reproducible.
    pure_literals.sort();
    return pure_literals;
}

/*
A function to remove every clause containing one of the given pure literals.
Assigning a pure literal true can never create a conflict, so the clauses
are simply dropped.

Returns the reduced formula.
*/
pub fn remove_pure_literals(clauses: &Cnf, pure_literals: &[Literal], changed: &mut ChangeTracker) -> Cnf {
    let mut new_clauses = clauses.clone();
    for literal in pure_literals {
        log::debug!("Rule 3 activated: Pure literal {}.", literal);
        new_clauses = remove_clauses_with_value(&new_clauses, *literal, changed);
    }
    return new_clauses;
}
