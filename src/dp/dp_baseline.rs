use crate::clause_ops::is_tautology;
use crate::data_structures::{Clause, Cnf, Literal, Satisfiability, Statistics};

/*
The baseline Davis-Putnam procedure. It keeps the clause database as a plain
list and re-derives everything from scratch on every step: no indices, no
change trackers, no in-place mutation. The five simplification rules run in
a fixed order and the procedure re-enters itself whenever a rule left the
formula in a state where the previous rule would fire again.
*/

/*
Rule 1: remove tautological clauses.
*/
fn remove_tautologies(clauses: &[Clause]) -> Vec<Clause> {
    return clauses.iter().filter(|clause| !is_tautology(clause)).cloned().collect();
}

/*
A function to remove a specific literal from all clauses. Clauses that
become empty stay in the list and stand for a conflict.
*/
fn remove_value_from_clauses(clauses: &[Clause], value: Literal) -> Vec<Clause> {
    let mut new_clauses = Vec::new();
    for clause in clauses {
        let mut reduced = clause.clone();
        reduced.remove(&value);
        new_clauses.push(reduced);
    }
    return new_clauses;
}

/*
A function to remove all clauses that contain a specific literal.
*/
fn remove_clauses_with_value(clauses: &[Clause], value: Literal) -> Vec<Clause> {
    return clauses.iter().filter(|clause| !clause.contains(&value)).cloned().collect();
}

/*
Rule 2: if some clause is unit, make its literal true by dropping every
clause containing it and erasing its negation elsewhere. At most one unit
clause is eliminated per application.
*/
fn apply_unit_rule(clauses: &[Clause]) -> Vec<Clause> {
    for clause in clauses {
        if clause.len() == 1 {
            let value = *clause.iter().next().unwrap();
            let reduced = remove_clauses_with_value(clauses, value);
            return remove_value_from_clauses(&reduced, -value);
        }
    }
    return clauses.to_vec();
}

/*
A function to check if a literal exists in any of the clauses.
*/
fn exists_in_clauses(value: Literal, clauses: &[Clause]) -> bool {
    return clauses.iter().any(|clause| clause.contains(&value));
}

/*
A function to find a literal that appears in the clauses while its negation
appears in none.

Returns the literal if found, otherwise 0.
*/
fn find_single_literal(clauses: &[Clause]) -> Literal {
    for clause in clauses {
        for literal in clause {
            if !exists_in_clauses(-literal, clauses) {
                return *literal;
            }
        }
    }
    return 0;
}

/*
Rule 3: if a literal appears in only one polarity, remove every clause
containing it. At most one pure literal is eliminated per application.
*/
fn apply_pure_rule(clauses: &[Clause]) -> Vec<Clause> {
    let literal = find_single_literal(clauses);
    if literal != 0 {
        return remove_clauses_with_value(clauses, literal);
    }
    return clauses.to_vec();
}

/*
A function to find the clauses that are proper supersets of another clause
in the list.
*/
fn find_superset_clauses(clauses: &[Clause]) -> Vec<Clause> {
    let mut supersets = Vec::new();
    for clause in clauses {
        for other_clause in clauses {
            if clause.ne(other_clause) && other_clause.is_subset(clause) {
                supersets.push(clause.clone());
                break;
            }
        }
    }
    return supersets;
}

/*
Rule 4: if a clause is a superset of another clause, remove the superset
clause.
*/
fn apply_subsumption_rule(clauses: &[Clause]) -> Vec<Clause> {
    let supersets = find_superset_clauses(clauses);
    return clauses.iter().filter(|clause| !supersets.contains(clause)).cloned().collect();
}

/*
A function to find a literal whose negation also exists in the clauses.

Returns the literal if found, otherwise 0.
*/
fn find_branch_literal(clauses: &[Clause]) -> Literal {
    for clause in clauses {
        for literal in clause {
            if exists_in_clauses(-literal, clauses) {
                return *literal;
            }
        }
    }
    return 0;
}

/*
Rule 5: split the problem on a literal whose negation also appears,
producing the subproblem where it is true and the one where it is false.

Returns the two branches, or two empty lists when no such literal exists.
*/
fn apply_split_rule(clauses: &[Clause]) -> (Vec<Clause>, Vec<Clause>) {
    let literal = find_branch_literal(clauses);
    if literal != 0 {
        let mut branch_true = remove_clauses_with_value(clauses, literal);
        branch_true = remove_value_from_clauses(&branch_true, -literal);

        let mut branch_false = remove_clauses_with_value(clauses, -literal);
        branch_false = remove_value_from_clauses(&branch_false, literal);

        return (branch_true, branch_false);
    }
    return (Vec::new(), Vec::new());
}

/*
A function to check if two clause lists hold the same clauses. Mirrors set
equality up to duplicates: same length and every clause of the first list
occurs in the second.
*/
fn clause_lists_equal(f1: &[Clause], f2: &[Clause]) -> bool {
    if f1.len() != f2.len() {
        return false;
    }
    for clause in f1 {
        if !f2.contains(clause) {
            return false;
        }
    }
    return true;
}

/*
A function to check whether any clause in the list is empty.
*/
fn has_empty_clause(clauses: &[Clause]) -> bool {
    return clauses.iter().any(|clause| clause.is_empty());
}

/*
The baseline DP procedure.

Applies the five rules in order. After each rule the terminal states are
checked, and the change test re-applies the preceding rule and compares the
outcome against the current formula, re-entering from the top when they
differ.

Returns SAT when the formula is satisfiable, UNSAT otherwise.
*/
pub fn dp_default(clauses: &Cnf, statistics: &mut Statistics) -> Satisfiability {
    let clause_list: Vec<Clause> = clauses.iter().cloned().collect();
    return solve(clause_list, statistics);
}

fn solve(mut clauses: Vec<Clause>, statistics: &mut Statistics) -> Satisfiability {
    statistics.increment_recursive_calls();

    // Apply Rule 1
    clauses = remove_tautologies(&clauses);
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied.");
        return Satisfiability::SAT;
    }
    if has_empty_clause(&clauses) {
        log::debug!("Failure: Encountered an empty clause.");
        return Satisfiability::UNSAT;
    }

    // Apply Rule 2
    clauses = apply_unit_rule(&clauses);
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied after Rule 2.");
        return Satisfiability::SAT;
    }
    if has_empty_clause(&clauses) {
        log::debug!("Failure: Encountered an empty clause after Rule 2.");
        return Satisfiability::UNSAT;
    }
    if !clause_lists_equal(&remove_tautologies(&clauses), &clauses) {
        return solve(clauses, statistics);
    }

    // Apply Rule 3
    clauses = apply_pure_rule(&clauses);
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied after Rule 3.");
        return Satisfiability::SAT;
    }
    if has_empty_clause(&clauses) {
        log::debug!("Failure: Encountered an empty clause after Rule 3.");
        return Satisfiability::UNSAT;
    }
    if !clause_lists_equal(&apply_unit_rule(&clauses), &clauses) {
        return solve(clauses, statistics);
    }

    // Apply Rule 4
    clauses = apply_subsumption_rule(&clauses);
    if clauses.is_empty() {
        log::debug!("Success: All clauses satisfied after Rule 4.");
        return Satisfiability::SAT;
    }
    if has_empty_clause(&clauses) {
        log::debug!("Failure: Encountered an empty clause after Rule 4.");
        return Satisfiability::UNSAT;
    }
    if !clause_lists_equal(&apply_pure_rule(&clauses), &clauses) {
        return solve(clauses, statistics);
    }

    // Apply Rule 5
    let (branch_true, branch_false) = apply_split_rule(&clauses);
    if !branch_true.is_empty() || !branch_false.is_empty() {
        let result = if solve(branch_true, statistics).eq(&Satisfiability::SAT) {
            Satisfiability::SAT
        } else {
            solve(branch_false, statistics)
        };
        log::debug!("Finished resolving clauses: {:?}", clauses);
        return result;
    }

    return Satisfiability::UNSAT;
}
