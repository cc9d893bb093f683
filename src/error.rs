use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("expected exactly {expected} values, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("value {0} appears more than once")]
    DuplicateValue(i64),

    #[error("arithmetic overflow while evaluating {arrangement:?}")]
    Overflow { arrangement: [i64; crate::ARITY] },
}
