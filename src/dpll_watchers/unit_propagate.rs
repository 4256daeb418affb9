use crate::clause_ops::peek_literal;
use crate::data_structures::{Literal, Statistics};
use crate::dpll_watchers::database::ClauseDatabase;

/*
A function to perform unit propagation on the clause database until no
active unit clause remains. The clause list is rescanned from the start
after every assignment, since an assignment can turn any clause unit.

Returns false if a conflict (empty active clause) is encountered, true
otherwise.
*/
pub fn unit_propagate(database: &mut ClauseDatabase, statistics: &mut Statistics) -> bool {
    let mut changed = true;
    while changed {
        changed = false;
        for cid in 0..database.clauses.len() {
            if !database.active[cid] {
                continue;
            }
            if database.clauses[cid].is_empty() {
                return false;
            }
            if database.clauses[cid].len() == 1 {
                let unit_literal = peek_literal(&database.clauses[cid]);
                if !assign_and_propagate(database, unit_literal, statistics) {
                    return false;
                }
                changed = true;
                break; // Restart scanning after an assignment.
            }
        }
    }
    return true;
}

/*
A function to assign a literal as true and chase the consequences: every
newly-unit literal reported by the database is queued and assigned in turn,
with a conflict check after each sub-assignment.

Returns false if a conflict is encountered, true otherwise.
*/
pub fn assign_and_propagate(database: &mut ClauseDatabase, literal: Literal, statistics: &mut Statistics) -> bool {
    statistics.increment_propagation_count();
    let mut new_units = database.assign_literal(literal);
    let mut i = 0;
    while i < new_units.len() {
        let unit = new_units[i];
        statistics.increment_propagation_count();
        let sub_new_units = database.assign_literal(unit);
        if database.has_empty_clause() {
            return false;
        }
        new_units.extend(sub_new_units);
        i += 1;
    }

    if database.has_empty_clause() {
        return false;
    }
    return true;
}
