use crate::multiset::{MultisetError, NumberMultiset};
use crate::search::{Combiner, Operation, SolveError, combine, solve};
use crate::stats::ReachabilitySet;

fn multiset(values: &[u64]) -> NumberMultiset {
    match NumberMultiset::build(values) {
        Ok(multiset) => multiset,
        Err(err) => panic!("invalid test draw {:?}: {}", values, err),
    }
}

#[test]
fn test_single_number_performs_no_evaluations() {
    let mut combiner = Combiner::new();
    let mut recorder = ReachabilitySet::new();
    combiner.combine(&multiset(&[500]), &mut recorder);

    assert_eq!(combiner.evaluations(), 0);
    assert_eq!(combiner.nodes(), 1);
    assert_eq!(recorder, ReachabilitySet::new());
}

#[test]
fn test_full_draw_reaches_one_hundred() {
    let mut recorder = ReachabilitySet::new();
    combine(&multiset(&[25, 50, 75, 100, 3, 6]), &mut recorder);
    assert!(recorder.is_reached(100));
    assert!(recorder.snapshot() >= recorder.distinct());
}

#[test]
fn test_two_ones_reach_nothing() {
    let mut recorder = ReachabilitySet::new();
    combine(&multiset(&[1, 1]), &mut recorder);
    assert!(recorder.is_empty());
    assert_eq!(recorder.reached_targets().count(), 0);
}

#[test]
fn test_small_pair_out_of_range() {
    let mut combiner = Combiner::new();
    let mut recorder = ReachabilitySet::new();
    combiner.combine(&multiset(&[7, 2]), &mut recorder);

    // all four operators are tried on the one pair
    assert_eq!(combiner.evaluations(), 4);
    assert!(recorder.is_empty());
}

#[test]
fn test_hundred_and_four() {
    let mut recorder = ReachabilitySet::new();
    combine(&multiset(&[100, 4]), &mut recorder);

    // 104, 96 (unmarked), 400, 25 (unmarked)
    let targets: Vec<u64> = recorder.reached_targets().collect();
    assert_eq!(targets, vec![104, 400]);
    assert!(!recorder.is_reached(25));
    assert_eq!(recorder.snapshot(), 2);
}

#[test]
fn test_occurrences_count_redundant_paths() {
    let mut recorder = ReachabilitySet::new();
    combine(&multiset(&[50, 50, 2]), &mut recorder);

    // 50 * 2 = 100 is reachable from either 50, and 50 + 50 = 100 as well
    assert!(recorder.is_reached(100));
    assert!(recorder.snapshot() > recorder.distinct());
}

#[test]
fn test_search_depends_only_on_values() {
    let mut first = ReachabilitySet::new();
    let mut second = ReachabilitySet::new();
    combine(&multiset(&[75, 3, 8, 8, 25, 1]), &mut first);
    combine(&multiset(&[1, 8, 25, 3, 8, 75]), &mut second);

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_three_numbers_recurse() {
    let mut combiner = Combiner::new();
    let mut recorder = ReachabilitySet::new();
    combiner.combine(&multiset(&[10, 10, 2]), &mut recorder);

    // 200 and 120 only appear one level down
    assert!(recorder.is_reached(100));
    assert!(recorder.is_reached(200));
    assert!(recorder.is_reached(120)); // (10 + 2) * 10
    assert!(!recorder.is_reached(999));
    assert!(combiner.nodes() > 1);
}

#[test]
fn test_recorder_reused_across_draws() {
    let mut recorder = ReachabilitySet::new();
    combine(&multiset(&[100, 4]), &mut recorder);
    recorder.reset();
    combine(&multiset(&[1, 1]), &mut recorder);
    assert!(recorder.is_empty());
}

#[test]
fn test_solve_finds_chain() {
    let result = solve(&[25, 50, 75, 100, 3, 6], 952);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert!(solution.is_some());
        if let Some(solution) = solution {
            assert_eq!(solution.result(), Some(952));
            assert!(solution.steps().len() <= 5);
        }
    }
}

#[test]
fn test_solve_shortest_chain() {
    let result = solve(&[25, 50, 75, 100, 3, 6], 100);
    assert!(matches!(result, Ok(Some(_))));
    if let Ok(Some(solution)) = result {
        assert_eq!(solution.steps().len(), 1);
        assert_eq!(format!("{}", solution), "75 + 25 = 100");
    }
}

#[test]
fn test_solve_chain_is_consistent() {
    let result = solve(&[100, 75, 2, 8, 3, 1], 731);
    if let Ok(Some(solution)) = result {
        for step in solution.steps() {
            assert_eq!(step.operation.apply(step.lhs, step.rhs), Some(step.result));
        }
        assert_eq!(solution.result(), Some(731));
    } else {
        panic!("expected a solution, got {:?}", result);
    }
}

#[test]
fn test_solve_unreachable() {
    assert_eq!(solve(&[1, 1], 100), Ok(None));
    // 100 is on the board but no operation produces it
    assert_eq!(solve(&[100, 7], 100), Ok(None));
}

#[test]
fn test_solve_invalid_input() {
    assert_eq!(
        solve(&[1, 2], 50),
        Err(SolveError::TargetOutOfRange {
            target: 50,
            min: 100,
            max: 999,
        })
    );
    assert_eq!(
        solve(&[], 100),
        Err(SolveError::MultisetError(MultisetError::Empty))
    );
}

#[test]
fn test_step_display() {
    let result = solve(&[100, 4], 400);
    if let Ok(Some(solution)) = result {
        assert_eq!(solution.steps().first().map(|s| s.operation), Some(Operation::Multiply));
        assert_eq!(format!("{}", solution), "100 * 4 = 400");
    } else {
        panic!("expected a solution, got {:?}", result);
    }
}
