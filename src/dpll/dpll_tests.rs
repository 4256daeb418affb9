#[cfg(test)]
mod test {
    use crate::data_structures::{Cnf, Config, LiteralSelection, Satisfiability, Statistics};
    use crate::dimacs::read_cnf;
    use crate::dpll;

    fn config() -> Config {
        Config { literal_selection: LiteralSelection::VariableStateSum }
    }

    fn classical_config() -> Config {
        Config { literal_selection: LiteralSelection::Ordered }
    }

    fn run_instance(filename: &str, config: &Config) -> Satisfiability {
        let (clauses, n_vars) = read_cnf(filename).unwrap();
        let statistics = &mut Statistics::new();
        return dpll::solve(&clauses, n_vars, config, statistics);
    }

    fn cnf(clauses: &[&[i32]]) -> Cnf {
        return clauses.iter().map(|clause| clause.iter().cloned().collect()).collect();
    }

    /* START OF GENERAL INSTANCE TESTS */

    #[test]
    fn dpll_trivial_sat_test() {
        assert_eq!(Satisfiability::SAT, run_instance("./test_files/trivial_sat.cnf", &config()));
    }

    #[test]
    fn dpll_trivial_unsat_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance("./test_files/trivial_unsat.cnf", &config()));
    }

    #[test]
    fn dpll_tautology_test() {
        assert_eq!(Satisfiability::SAT, run_instance("./test_files/tautology.cnf", &config()));
    }

    #[test]
    fn dpll_pure_literal_test() {
        assert_eq!(Satisfiability::SAT, run_instance("./test_files/pure_literal.cnf", &config()));
    }

    #[test]
    fn dpll_unit_chain_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance("./test_files/unit_chain.cnf", &config()));
    }

    #[test]
    fn dpll_pigeonhole_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance("./test_files/php_3_2.cnf", &config()));
    }
    /* END OF GENERAL INSTANCE TESTS */

    /* START OF CLASSICAL SELECTION TESTS */

    #[test]
    fn classical_dpll_trivial_sat_test() {
        assert_eq!(Satisfiability::SAT, run_instance("./test_files/trivial_sat.cnf", &classical_config()));
    }

    #[test]
    fn classical_dpll_pigeonhole_test() {
        assert_eq!(Satisfiability::UNSAT, run_instance("./test_files/php_3_2.cnf", &classical_config()));
    }

    /*
    Tests that the selection scheme changes the search path but never the
    verdict.
    */
    #[test]
    fn selection_schemes_agree_test() {
        let clauses = cnf(&[&[1, 2, 3], &[-1, -2], &[-2, -3], &[-1, -3], &[2, 3], &[1, -3]]);
        let frequency_guided = dpll::solve(&clauses, 3, &config(), &mut Statistics::new());
        let in_order = dpll::solve(&clauses, 3, &classical_config(), &mut Statistics::new());
        assert_eq!(frequency_guided, in_order);
    }

    /*
    Tests that an empty formula is satisfiable and a formula with an empty
    clause is not, before any rule runs.
    */
    #[test]
    fn terminal_states_test() {
        assert_eq!(Satisfiability::SAT, dpll::solve(&Cnf::new(), 0, &config(), &mut Statistics::new()));
        let with_empty_clause = cnf(&[&[], &[1, 2]]);
        assert_eq!(Satisfiability::UNSAT, dpll::solve(&with_empty_clause, 2, &config(), &mut Statistics::new()));
    }
    /* END OF CLASSICAL SELECTION TESTS */
}
