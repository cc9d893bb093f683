mod coins;
mod error;
mod permutations;
mod search;

pub use coins::{Arrangement, Coin, Puzzle, ARITY, TARGET};
pub use error::{Error, Result};
pub use permutations::{permutations, Permutations};
pub use search::{find_solution, find_solution_parallel, Search, SearchState};
