// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end checks of the weighing-strategy solver against the known
//! answers for the classical counterfeit-pearl puzzle.

use pearl_search::solver::ceil_log3;
use pearl_search::{solve_puzzle, SearchError, Solver};

#[test]
fn test_degenerate_pearl_counts_are_unsolvable() {
    for n in 0..=2 {
        assert_eq!(solve_puzzle(n), None, "n = {}", n);
    }
}

#[test]
fn test_three_pearls() {
    assert_eq!(solve_puzzle(3), Some(2));
}

#[test]
fn test_small_pearl_counts_need_three_weighings() {
    for n in 4..=10 {
        assert_eq!(solve_puzzle(n), Some(3), "n = {}", n);
    }
}

/* The n = 11 and n = 12 cases still need only three weighings; 12 is the
   classical boundary of the family. Each solve call enumerates tens of
   thousands of candidate weighings at these sizes, so the checks are kept
   out of the default test run.
*/
#[test]
#[ignore]
fn test_boundary_of_three_weighing_family() {
    assert_eq!(solve_puzzle(11), Some(3));
    assert_eq!(solve_puzzle(12), Some(3));
}

/* At n = 13 the information-theoretic bound of three weighings is no longer
   achievable, so the root search cannot short-circuit and must cost every
   candidate weighing. Expect a long run.
*/
#[test]
#[ignore]
fn test_thirteen_pearls_need_four_weighings() {
    assert_eq!(solve_puzzle(13), Some(4));
}

#[test]
fn test_answers_are_non_decreasing_in_n() {
    let mut previous = 0;
    for n in 3..=9 {
        let answer = solve_puzzle(n).unwrap();
        assert!(
            answer >= previous,
            "solve_puzzle({}) = {} dropped below {}",
            n,
            answer,
            previous
        );
        previous = answer;
    }
}

#[test]
fn test_answers_respect_information_theoretic_bound() {
    // 2n hypotheses, three outcomes per weighing.
    for n in 3..=9 {
        let answer = solve_puzzle(n).unwrap();
        assert!(
            answer >= ceil_log3(2 * n),
            "solve_puzzle({}) = {} beats ceil(log3({}))",
            n,
            answer,
            2 * n
        );
    }
}

#[test]
fn test_repeated_invocations_agree() {
    for n in 0..=6 {
        assert_eq!(solve_puzzle(n), solve_puzzle(n), "n = {}", n);
    }
}

#[test]
fn test_memoized_solver_matches_baseline() {
    let mut memoized = Solver::new().with_memoization(true);
    for n in 0..=6 {
        assert_eq!(memoized.solve(n), Ok(solve_puzzle(n)), "n = {}", n);
    }
}

#[test]
fn test_budgeted_solver_reports_exhaustion() {
    let mut strict = Solver::new().with_budget(2);
    match strict.solve(5) {
        Err(SearchError::BudgetExhausted { calls }) => assert!(calls > 2),
        other => panic!("expected budget exhaustion, got {:?}", other),
    }

    // The same puzzle fits comfortably in a generous budget.
    let mut generous = Solver::new().with_budget(1_000_000);
    assert_eq!(generous.solve(5), Ok(Some(3)));
}

#[test]
fn test_solver_statistics_are_populated() {
    let mut solver = Solver::new();
    solver.solve(4).unwrap();
    let statistics = solver.statistics();
    assert!(statistics.recursive_calls > 1);
    assert_eq!(statistics.memo_hits, 0, "memoization is off by default");
}
