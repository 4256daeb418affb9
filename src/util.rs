use multimap::MultiMap;
use regex::Regex;

use crate::data_structures::{Cnf, Literal};

/*
A function to index a formula by literal. Maps every literal to the indices
of the clauses it appears in, in the formula's set order.

Returns the literal -> clause index multimap.
*/
pub fn build_clause_references(clauses: &Cnf) -> MultiMap<Literal, i32> {
    let mut clause_references = MultiMap::new();
    for (index, clause) in clauses.iter().enumerate() {
        for literal in clause {
            clause_references.insert(*literal, index as i32);
        }
    }
    return clause_references;
}

/*
A function to find the number of references a variable has in the clause
references, over both polarities. It also determines the sign priority.

choose_positive is true when the variable appears at least as often
positively as negatively, so ties go to the positive polarity.
*/
pub fn get_variable_state_sum(clause_references: &MultiMap<Literal, i32>, variable: Literal) -> (i32, bool) {
    let mut pos_appearances = 0;
    if clause_references.contains_key(&variable) {
        pos_appearances += clause_references.get_vec(&variable).unwrap().len() as i32;
    }
    let mut neg_appearances = 0;
    if clause_references.contains_key(&-variable) {
        neg_appearances += clause_references.get_vec(&-variable).unwrap().len() as i32;
    }
    let choose_positive = pos_appearances >= neg_appearances;
    let appearances = pos_appearances + neg_appearances;
    return (appearances, choose_positive);
}

/*
A function to get the instance name from a file path.

Example: file_path = ./uf50/uf50-01.cnf => instance_name = uf50-01.cnf

Returns the instance name.
*/
pub fn read_instance_name(file_path: &str) -> String {
    let re_get_instance = Regex::new(r"[^/\\]+$").unwrap();
    let instance_name = re_get_instance.find(file_path).map(|m| m.as_str()).unwrap_or(file_path).to_string();
    return instance_name;
}
