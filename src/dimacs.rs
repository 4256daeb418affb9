use std::{fs::File, io::{self, BufRead}, path::Path};

use crate::data_structures::{Clause, Cnf};

/*
A function to read a CNF instance stored in DIMACS format.

Comment lines starting with "c" are skipped, the "p cnf <vars> <clauses>"
line supplies the declared variable count, and a line starting with "%"
terminates parsing. Every other line holds whitespace-separated literals
terminated by 0; the 0 is dropped and the remaining literals form one
clause. Empty literal lines are skipped and duplicate clauses collapse.

Returns the set of clauses together with the variable count. The count is
the maximum of the declared count and the largest variable index seen, so a
missing or short header cannot under-size the frequency structures built
from it.
*/
pub fn read_cnf(filename: &str) -> io::Result<(Cnf, i32)> {
    let mut clauses = Cnf::new();
    let mut declared_vars = 0;
    let mut max_var = 0;
    for line in read_lines(filename)? {
        let l = line?;
        let vec = l.split_whitespace().collect::<Vec<&str>>();
        if vec.is_empty() || vec[0].starts_with('c') {
            continue;
        }
        if vec[0].starts_with('%') {
            break;
        }
        if vec[0].eq("p") {
            // Expected shape: p cnf <vars> <clauses>; only <vars> is kept.
            if vec.len() >= 3 {
                declared_vars = parse_literal(vec[2])?;
            }
            continue;
        }
        let mut literals = Clause::new();
        for token in &vec {
            let literal = parse_literal(token)?;
            if literal == 0 {
                break;
            }
            max_var = max_var.max(literal.abs());
            literals.insert(literal);
        }
        if !literals.is_empty() {
            clauses.insert(literals);
        }
    }
    return Ok((clauses, declared_vars.max(max_var)));
}

/*
A function to parse a given file into separate lines.
*/
fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where P: AsRef<Path>, {
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

/*
A function to parse a single literal token, mapping malformed tokens to an
InvalidData error so the runner can log and skip the file.
*/
fn parse_literal(token: &str) -> io::Result<i32> {
    token.parse::<i32>().map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("bad literal {:?}: {}", token, e))
    })
}
