#[cfg(test)]
mod test {
    use crate::data_structures::{Cnf, Satisfiability, SolverType, Statistics};
    use crate::dimacs::read_cnf;
    use crate::dp;

    fn run_instance(solver_type: SolverType, filename: &str) -> Satisfiability {
        let (clauses, n_vars) = read_cnf(filename).unwrap();
        let statistics = &mut Statistics::new();
        return dp::solve(solver_type, &clauses, n_vars, statistics);
    }

    fn cnf(clauses: &[&[i32]]) -> Cnf {
        return clauses.iter().map(|clause| clause.iter().cloned().collect()).collect();
    }

    /* START OF BASELINE DP TESTS */

    #[test]
    fn dp_default_trivial_sat_test() {
        assert_eq!(Satisfiability::SAT, run_instance(SolverType::DpDefault, "./test_files/trivial_sat.cnf"));
    }

    #[test]
    fn dp_default_trivial_unsat_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance(SolverType::DpDefault, "./test_files/trivial_unsat.cnf"));
    }

    #[test]
    fn dp_default_tautology_test() {
        assert_eq!(Satisfiability::SAT, run_instance(SolverType::DpDefault, "./test_files/tautology.cnf"));
    }

    #[test]
    fn dp_default_pigeonhole_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance(SolverType::DpDefault, "./test_files/php_3_2.cnf"));
    }

    /*
    Tests that a single unit clause is decided within the first entry: the
    unit rule empties the formula and the terminal check fires before any
    re-entry.
    */
    #[test]
    fn dp_default_counts_one_call_on_unit_test() {
        let clauses = cnf(&[&[1]]);
        let statistics = &mut Statistics::new();
        let result = dp::solve(SolverType::DpDefault, &clauses, 1, statistics);
        assert_eq!(Satisfiability::SAT, result);
        assert_eq!(1, statistics.recursive_calls);
    }
    /* END OF BASELINE DP TESTS */

    /* START OF ITERATIVE DP TESTS */

    #[test]
    fn dp_trivial_sat_test() {
        assert_eq!(Satisfiability::SAT, run_instance(SolverType::Dp, "./test_files/trivial_sat.cnf"));
    }

    #[test]
    fn dp_trivial_unsat_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance(SolverType::Dp, "./test_files/trivial_unsat.cnf"));
    }

    #[test]
    fn dp_unit_chain_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance(SolverType::Dp, "./test_files/unit_chain.cnf"));
    }

    #[test]
    fn dp_subsumption_instance_test() {
        assert_eq!(Satisfiability::SAT, run_instance(SolverType::Dp, "./test_files/subsumption.cnf"));
    }

    #[test]
    fn dp_pigeonhole_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance(SolverType::Dp, "./test_files/php_3_2.cnf"));
    }

    /*
    Tests that unit propagation re-enters once: the first entry empties
    the formula and the second entry reports success.
    */
    #[test]
    fn dp_counts_two_calls_on_unit_test() {
        let clauses = cnf(&[&[1]]);
        let statistics = &mut Statistics::new();
        let result = dp::solve(SolverType::Dp, &clauses, 1, statistics);
        assert_eq!(Satisfiability::SAT, result);
        assert_eq!(2, statistics.recursive_calls);
    }

    /*
    Tests that both DP renditions agree on a branching formula where no
    single rule decides the outcome.
    */
    #[test]
    fn dp_variants_agree_test() {
        let clauses = cnf(&[&[1, 2, 3], &[-1, -2], &[-2, -3], &[-1, -3], &[2, 3], &[1, -3]]);
        let baseline = dp::solve(SolverType::DpDefault, &clauses, 3, &mut Statistics::new());
        let iterative = dp::solve(SolverType::Dp, &clauses, 3, &mut Statistics::new());
        assert_eq!(baseline, iterative);
    }
    /* END OF ITERATIVE DP TESTS */
}
