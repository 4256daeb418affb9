use crate::data_structures::{ChangeTracker, Clause, Cnf};

/*
A function to remove every clause that is a proper superset of some other
clause; the smaller clause already carries the constraint.

Clauses are visited smallest first, and each clause removes the larger
proper supersets that follow it. At least one representative of each
minimum-size equivalence class always survives.

Returns the filtered formula.
*/
pub fn subsumption_filter(clauses: &Cnf, changed: &mut ChangeTracker) -> Cnf {
    let mut sorted_clauses: Vec<&Clause> = clauses.iter().collect();
    sorted_clauses.sort_by_key(|clause| clause.len());

    let mut new_clauses = clauses.clone();
    for (i, small_clause) in sorted_clauses.iter().enumerate() {
        for larger_clause in sorted_clauses[i + 1..].iter() {
            if small_clause.len() < larger_clause.len() && small_clause.is_subset(larger_clause) {
                if new_clauses.remove(*larger_clause) {
                    changed.set_changed();
                }
            }
        }
    }
    return new_clauses;
}
