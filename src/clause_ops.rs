use std::collections::BTreeSet;

use crate::data_structures::{ChangeTracker, Clause, Cnf, Literal};

/*
A function to check whether a clause contains a literal and its negation.
*/
pub fn is_tautology(clause: &Clause) -> bool {
    return clause.iter().any(|literal| clause.contains(&-literal));
}

/*
A function to remove every tautological clause from the formula.

Returns the filtered formula.
*/
pub fn remove_tautologies(clauses: &Cnf) -> Cnf {
    return clauses.iter().filter(|clause| !is_tautology(clause)).cloned().collect();
}

/*
A function to remove a specific literal from all clauses. Clauses that
become empty stay in the formula and stand for a conflict.

Returns the new formula, marking the tracker if any literal was removed.
*/
pub fn remove_value_from_clauses(clauses: &Cnf, value: Literal, changed: &mut ChangeTracker) -> Cnf {
    let mut new_clauses = Cnf::new();
    for clause in clauses {
        if clause.contains(&value) {
            let mut reduced = clause.clone();
            reduced.remove(&value);
            new_clauses.insert(reduced);
            changed.set_changed();
        } else {
            new_clauses.insert(clause.clone());
        }
    }
    return new_clauses;
}

/*
A function to remove all clauses that contain a specific literal.

Returns the new formula, marking the tracker if any clause was removed.
*/
pub fn remove_clauses_with_value(clauses: &Cnf, value: Literal, changed: &mut ChangeTracker) -> Cnf {
    let mut new_clauses = Cnf::new();
    for clause in clauses {
        if clause.contains(&value) {
            changed.set_changed();
        } else {
            new_clauses.insert(clause.clone());
        }
    }
    return new_clauses;
}

/*
A function to collect the sole literals of all unit clauses.
*/
pub fn find_unit_literals(clauses: &Cnf) -> BTreeSet<Literal> {
    let mut unit_literals = BTreeSet::new();
    for clause in clauses {
        if clause.len() == 1 {
            unit_literals.insert(peek_literal(clause));
        }
    }
    return unit_literals;
}

/*
A function to check whether the formula contains the empty clause.
*/
pub fn contains_empty_clause(clauses: &Cnf) -> bool {
    return clauses.iter().any(|clause| clause.is_empty());
}

/*
A function to read an arbitrary literal out of a clause. The set ordering
makes the pick deterministic; on a unit clause this is the forced literal.
*/
pub fn peek_literal(clause: &Clause) -> Literal {
    return *clause.iter().next().expect("clause must be non-empty");
}
