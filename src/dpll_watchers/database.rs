use std::collections::BTreeSet;

use crate::clause_ops::{is_tautology, peek_literal};
use crate::data_structures::{Clause, Literal};

/*
A struct for storing the clause database used by the watched-literal DPLL
procedure, together with the indices kept alongside it:

- clauses stores the mutable literal set of every clause.
- active marks which clauses still participate; a satisfied or removed
  clause stays inactive until a snapshot restore brings it back.
- pos_frequency/neg_frequency count, per variable, the active clauses the
  positive/negative literal appears in. Every mutation keeps these exact.
- pos_occurrences/neg_occurrences list the clause indices each literal
  appears in. Removals may leave stale indices behind; every reader
  re-checks the active flag and clause membership instead of trusting them.
- watchers holds up to two literals per clause nominated as sentinels, so
  a clause shrinking to unit or empty is noticed without a full scan.
*/
pub struct ClauseDatabase {
    pub n_vars: i32,
    pub clauses: Vec<Clause>,
    pub active: Vec<bool>,
    pub pos_frequency: Vec<i32>,
    pub neg_frequency: Vec<i32>,
    pub pos_occurrences: Vec<Vec<usize>>,
    pub neg_occurrences: Vec<Vec<usize>>,
    pub watchers: Vec<Vec<Literal>>,
}

/*
A deep copy of every mutable field of the database, taken at a branch frame
and written back when the branch fails.
*/
pub struct DatabaseSnapshot {
    clauses: Vec<Clause>,
    active: Vec<bool>,
    pos_frequency: Vec<i32>,
    neg_frequency: Vec<i32>,
    pos_occurrences: Vec<Vec<usize>>,
    neg_occurrences: Vec<Vec<usize>>,
    watchers: Vec<Vec<Literal>>,
}

impl ClauseDatabase {
    /*
    Creates a new clause database from a list of clauses and the variable
    count. Tautological clauses are marked inactive and left unindexed; for
    every other clause the frequency counts and occurrence lists are filled
    and the first one or two literals become its watchers.
    */
    pub fn new(clauses: Vec<Clause>, n_vars: i32) -> Self {
        let n_clauses = clauses.len();
        let mut database = ClauseDatabase {
            n_vars,
            clauses,
            active: vec![true; n_clauses],
            pos_frequency: vec![0; (n_vars + 1) as usize],
            neg_frequency: vec![0; (n_vars + 1) as usize],
            pos_occurrences: vec![Vec::new(); (n_vars + 1) as usize],
            neg_occurrences: vec![Vec::new(); (n_vars + 1) as usize],
            watchers: vec![Vec::new(); n_clauses],
        };
        database.init_data_structures();
        return database;
    }

    /*
    A function to build the frequency, occurrence, and watcher structures
    for each clause.
    */
    fn init_data_structures(&mut self) {
        for cid in 0..self.clauses.len() {
            if is_tautology(&self.clauses[cid]) {
                self.active[cid] = false;
                continue;
            }
            let literals: Vec<Literal> = self.clauses[cid].iter().cloned().collect();
            for literal in &literals {
                if *literal > 0 {
                    self.pos_frequency[*literal as usize] += 1;
                    self.pos_occurrences[*literal as usize].push(cid);
                } else {
                    self.neg_frequency[(-literal) as usize] += 1;
                    self.neg_occurrences[(-literal) as usize].push(cid);
                }
            }
            self.watchers[cid] = literals.into_iter().take(2).collect();
        }
    }

    /*
    A function to check whether no active clause remains, meaning every
    clause has been satisfied.
    */
    pub fn is_empty(&self) -> bool {
        return !self.active.iter().any(|active| *active);
    }

    /*
    A function to check whether any active clause has an empty literal set.
    An empty active clause is the conflict signal.
    */
    pub fn has_empty_clause(&self) -> bool {
        for (cid, active) in self.active.iter().enumerate() {
            if *active && self.clauses[cid].is_empty() {
                return true;
            }
        }
        return false;
    }

    /*
    A function to collect the pure literals of the active clauses straight
    from the frequency arrays.
    */
    pub fn pure_literals(&self) -> Vec<Literal> {
        let mut result = Vec::new();
        for variable in 1..=self.n_vars {
            if self.pos_frequency[variable as usize] > 0 && self.neg_frequency[variable as usize] == 0 {
                result.push(variable);
            } else if self.neg_frequency[variable as usize] > 0 && self.pos_frequency[variable as usize] == 0 {
                result.push(-variable);
            }
        }
        return result;
    }

    /*
    A function to choose a branching literal from the frequency arrays.

    Only variables appearing in both polarities are candidates; the variable
    with the highest combined frequency wins, lowest index on ties, and the
    polarity with the higher individual count is returned with ties going to
    the positive polarity.

    Returns the literal to branch on, or 0 if no candidate is found.
    */
    pub fn pick_branch_literal(&self) -> Literal {
        let mut best_total = 0;
        let mut best_variable = 0;
        for variable in 1..=self.n_vars {
            let pos = self.pos_frequency[variable as usize];
            let neg = self.neg_frequency[variable as usize];
            if pos > 0 && neg > 0 && pos + neg > best_total {
                best_total = pos + neg;
                best_variable = variable;
            }
        }
        if best_variable == 0 {
            return 0;
        }
        if self.pos_frequency[best_variable as usize] >= self.neg_frequency[best_variable as usize] {
            return best_variable;
        } else {
            return -best_variable;
        }
    }

    /*
    A function to assign a literal as true and update every index.

    1. Every active clause containing the literal is satisfied: it is
       deactivated, the frequencies of its remaining literals drop, and its
       watchers are cleared.
    2. The complement is erased from every active clause still holding it.
       When the complement was watched, the watch moves to some unwatched
       literal of the clause; if none exists the watcher list becomes the
       clause contents (possibly unit or empty).
    3. Clauses that shrank to a single literal are collected.

    Returns the newly-unit literals for further propagation.
    */
    pub fn assign_literal(&mut self, literal: Literal) -> Vec<Literal> {
        let mut newly_units = Vec::new();

        // 1. Deactivate clauses containing the literal.
        for cid in self.occurrence_list(literal) {
            if self.active[cid] {
                self.active[cid] = false;
                let clause_literals: Vec<Literal> = self.clauses[cid].iter().cloned().collect();
                for clause_literal in clause_literals {
                    self.update_freq_occ(cid, clause_literal);
                }
                self.watchers[cid].clear();
            }
        }

        // 2. Remove occurrences of the complement from active clauses.
        let complement = -literal;
        for cid in self.occurrence_list(complement) {
            // Occurrence lists can hold stale indices; skip clauses that
            // are inactive or no longer contain the complement.
            if !self.active[cid] || !self.clauses[cid].contains(&complement) {
                continue;
            }
            self.clauses[cid].remove(&complement);
            self.update_freq_occ(cid, complement);

            // 3. Update the watchers of this clause if the complement was
            // one of them.
            if self.watchers[cid].contains(&complement) {
                let current_watches: BTreeSet<Literal> = self.watchers[cid].iter().cloned().collect();
                let mut new_watch = None;
                for candidate in &self.clauses[cid] {
                    if !current_watches.contains(candidate) {
                        new_watch = Some(*candidate);
                        break;
                    }
                }
                if let Some(watch) = new_watch {
                    let index = self.watchers[cid].iter().position(|watched| watched.eq(&complement)).unwrap();
                    self.watchers[cid][index] = watch;
                } else {
                    self.watchers[cid] = self.clauses[cid].iter().cloned().collect();
                }
            }

            // 4. Check if the clause has become unit and record its sole
            // literal.
            if self.active[cid] && self.clauses[cid].len() == 1 {
                newly_units.push(peek_literal(&self.clauses[cid]));
            }
        }

        return newly_units;
    }

    /*
    A function to decrement the frequency count for a literal, flooring at
    zero, and to drop the clause index from the literal's occurrence list
    if it is present.
    */
    fn update_freq_occ(&mut self, cid: usize, literal: Literal) {
        if literal > 0 {
            self.pos_frequency[literal as usize] = (self.pos_frequency[literal as usize] - 1).max(0);
            if let Some(index) = self.pos_occurrences[literal as usize].iter().position(|occ| occ.eq(&cid)) {
                self.pos_occurrences[literal as usize].remove(index);
            }
        } else {
            self.neg_frequency[(-literal) as usize] = (self.neg_frequency[(-literal) as usize] - 1).max(0);
            if let Some(index) = self.neg_occurrences[(-literal) as usize].iter().position(|occ| occ.eq(&cid)) {
                self.neg_occurrences[(-literal) as usize].remove(index);
            }
        }
    }

    /*
    A function to copy out the occurrence list of a literal, so the caller
    can walk it while the lists underneath are being edited.
    */
    fn occurrence_list(&self, literal: Literal) -> Vec<usize> {
        if literal > 0 {
            return self.pos_occurrences[literal as usize].clone();
        } else {
            return self.neg_occurrences[(-literal) as usize].clone();
        }
    }

    /*
    A function to take a deep copy of the current database state for a
    branch frame.
    */
    pub fn snapshot(&self) -> DatabaseSnapshot {
        return DatabaseSnapshot {
            clauses: self.clauses.clone(),
            active: self.active.clone(),
            pos_frequency: self.pos_frequency.clone(),
            neg_frequency: self.neg_frequency.clone(),
            pos_occurrences: self.pos_occurrences.clone(),
            neg_occurrences: self.neg_occurrences.clone(),
            watchers: self.watchers.clone(),
        };
    }

    /*
    A function to write a snapshot back, consuming it.
    */
    pub fn restore(&mut self, snapshot: DatabaseSnapshot) {
        self.clauses = snapshot.clauses;
        self.active = snapshot.active;
        self.pos_frequency = snapshot.pos_frequency;
        self.neg_frequency = snapshot.neg_frequency;
        self.pos_occurrences = snapshot.pos_occurrences;
        self.neg_occurrences = snapshot.neg_occurrences;
        self.watchers = snapshot.watchers;
    }
}
