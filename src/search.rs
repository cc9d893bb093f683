use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{permutations, Arrangement, Error, Permutations, Puzzle, Result, ARITY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Found(Arrangement),
    Exhausted,
    /// A candidate couldn't be evaluated; later candidates are never tried.
    Failed(Error),
}

/// Walks the permutations of a puzzle's values in order and stops at the
/// first one that balances the equation.
#[derive(Debug)]
pub struct Search<'a> {
    puzzle: &'a Puzzle,
    candidates: Permutations<i64, ARITY>,
    state: SearchState,
    evaluated: usize,
}

impl<'a> Search<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            candidates: permutations(puzzle.values()),
            state: SearchState::Searching,
            evaluated: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// How many candidates have been checked against the equation so far.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    pub fn run(&mut self) -> Result<Option<Arrangement>> {
        match self.state {
            SearchState::Found(arrangement) => return Ok(Some(arrangement)),
            SearchState::Exhausted => return Ok(None),
            SearchState::Failed(err) => return Err(err),
            SearchState::Searching => {}
        }

        for candidate in &mut self.candidates {
            self.evaluated += 1;
            trace!(?candidate, n = self.evaluated, "checking");

            let hit = match self.puzzle.is_satisfied_by(&candidate) {
                Ok(hit) => hit,
                Err(err) => {
                    debug!(%err, evaluated = self.evaluated, "failed");
                    self.state = SearchState::Failed(err);
                    return Err(err);
                }
            };

            if hit {
                let arrangement = Arrangement(candidate);
                debug!(%arrangement, evaluated = self.evaluated, "found");
                self.state = SearchState::Found(arrangement);
                return Ok(Some(arrangement));
            }
        }

        debug!(evaluated = self.evaluated, goal = self.puzzle.target(), "exhausted");
        self.state = SearchState::Exhausted;
        Ok(None)
    }
}

impl Puzzle {
    pub fn solve(&self) -> Result<Option<Arrangement>> {
        Search::new(self).run()
    }
}

/// Finds the first ordering of `values` for which
/// `p0 + p1 * p2^2 + p3^3 - p4 == target`.
///
/// `values` has to hold exactly five distinct numbers.
pub fn find_solution(values: &[i64], target: i64) -> Result<Option<Arrangement>> {
    Puzzle::from_slice(values, target)?.solve()
}

/// Same answer as [`find_solution`], checking candidates on the rayon pool.
///
/// `find_first` keeps enumeration order, so this returns the match with the
/// smallest index (or the earliest overflow, if that comes first).
pub fn find_solution_parallel(puzzle: &Puzzle) -> Result<Option<Arrangement>> {
    let candidates = permutations(puzzle.values()).collect::<Vec<_>>();

    candidates
        .into_par_iter()
        .map(|candidate| {
            puzzle
                .is_satisfied_by(&candidate)
                .map(|hit| (candidate, hit))
        })
        .find_first(|checked| checked.as_ref().map_or(true, |&(_, hit)| hit))
        .transpose()
        .map(|found| found.map(|(candidate, _)| Arrangement(candidate)))
}
