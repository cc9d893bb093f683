use std::collections::HashSet;

use proptest::prelude::*;

use synacor_coins::{
    find_solution, find_solution_parallel, permutations, Arrangement, Error, Puzzle, Search,
    SearchState,
};

const RUINS: [i64; 5] = [2, 9, 7, 5, 3];

fn lhs([a, b, c, d, e]: [i64; 5]) -> i64 {
    a + b * c * c + d * d * d - e
}

/// Every ordering of `values`, built with plain nested loops over positions.
fn brute_force(values: [i64; 5]) -> Vec<[i64; 5]> {
    let mut all = Vec::new();
    for i in 0..5 {
        for j in (0..5).filter(|&j| j != i) {
            for k in (0..5).filter(|&k| k != i && k != j) {
                for l in (0..5).filter(|&l| l != i && l != j && l != k) {
                    let m = 10 - i - j - k - l;
                    all.push([values[i], values[j], values[k], values[l], values[m]]);
                }
            }
        }
    }
    all
}

#[test]
fn ruins_have_exactly_one_solution() {
    let solutions = brute_force(RUINS)
        .into_iter()
        .filter(|&p| lhs(p) == 399)
        .collect::<Vec<_>>();
    assert_eq!(solutions, vec![[9, 2, 5, 7, 3]]);

    assert_eq!(
        find_solution(&RUINS, 399).unwrap(),
        Some(Arrangement(solutions[0]))
    );
}

#[test]
fn enumeration_matches_nested_loops() {
    let ours = permutations(RUINS).collect::<Vec<_>>();
    assert_eq!(ours, brute_force(RUINS));
    assert_eq!(ours.iter().collect::<HashSet<_>>().len(), 120);
}

#[test]
fn repeated_runs_agree() {
    let first = find_solution(&RUINS, 399).unwrap();
    for _ in 0..10 {
        assert_eq!(find_solution(&RUINS, 399).unwrap(), first);
    }
}

#[test]
fn nothing_earlier_matches() {
    let puzzle = Puzzle::default();
    let mut search = Search::new(&puzzle);
    let found = search.run().unwrap().unwrap();
    assert_eq!(puzzle.evaluate(&found.0), Ok(399));

    let position = permutations(RUINS)
        .position(|p| p == found.0)
        .unwrap();
    assert_eq!(search.evaluated(), position + 1);
    assert!(permutations(RUINS)
        .take(position)
        .all(|p| puzzle.is_satisfied_by(&p) == Ok(false)));
}

#[test]
fn unreachable_target_is_exhausted() {
    let max = brute_force(RUINS).into_iter().map(lhs).max().unwrap();
    assert_eq!(max, 975);

    let puzzle = Puzzle::default().with_target(max + 1);
    let mut search = Search::new(&puzzle);
    assert_eq!(search.run(), Ok(None));
    assert_eq!(search.state(), SearchState::Exhausted);
    assert_eq!(search.evaluated(), 120);
}

#[test]
fn bad_input_is_rejected() {
    assert_eq!(
        find_solution(&[2, 9, 7, 5], 399),
        Err(Error::Arity {
            expected: 5,
            actual: 4
        })
    );
    assert_eq!(
        find_solution(&[2, 9, 7, 5, 9], 399),
        Err(Error::DuplicateValue(9))
    );
}

proptest! {
    #[test]
    fn first_match_in_position_order(
        values in prop::collection::hash_set(-20i64..20, 5),
        target in -2000i64..2000,
    ) {
        let values = values.into_iter().collect::<Vec<_>>();
        let puzzle = Puzzle::from_slice(&values, target).unwrap();

        let expected = brute_force(puzzle.values())
            .into_iter()
            .find(|&p| lhs(p) == target)
            .map(Arrangement);

        let mut search = Search::new(&puzzle);
        prop_assert_eq!(search.run().unwrap(), expected);
        prop_assert_eq!(find_solution_parallel(&puzzle).unwrap(), expected);

        if expected.is_none() {
            prop_assert_eq!(search.evaluated(), 120);
        }
    }

    #[test]
    fn solution_always_balances(values in prop::collection::hash_set(-20i64..20, 5)) {
        let values = values.into_iter().collect::<Vec<_>>();
        // whatever the first ordering sums to is reachable by construction
        let first = [values[0], values[1], values[2], values[3], values[4]];
        let target = lhs(first);

        let found = find_solution(&values, target).unwrap();
        prop_assert_eq!(found, Some(Arrangement(first)));
    }
}
