use std::{collections::HashSet, convert::TryFrom, fmt};

use crate::{Error, Result};

/// Number of blanks in `_ + _ * _^2 + _^3 - _`.
pub const ARITY: usize = 5;

pub const TARGET: i64 = 399;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coin {
    Red,
    Blue,
    Concave,
    Shiny,
    Corroded,
}

impl Coin {
    /// In the order they're picked up around the ruins.
    pub const ALL: [Coin; ARITY] = [
        Coin::Red,
        Coin::Blue,
        Coin::Concave,
        Coin::Shiny,
        Coin::Corroded,
    ];

    /// The number of dots on the coin.
    pub fn value(self) -> i64 {
        match self {
            Coin::Red => 2,
            Coin::Blue => 9,
            Coin::Concave => 7,
            Coin::Shiny => 5,
            Coin::Corroded => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Coin::Red => "red coin",
            Coin::Blue => "blue coin",
            Coin::Concave => "concave coin",
            Coin::Shiny => "shiny coin",
            Coin::Corroded => "corroded coin",
        }
    }

    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|coin| coin.value() == value)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One candidate filling of the blanks, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arrangement(pub [i64; ARITY]);

impl Arrangement {
    /// Maps every value back to its coin, if they're all coin values.
    pub fn coins(&self) -> Option<[Coin; ARITY]> {
        let mut coins = Coin::ALL;
        for (coin, &value) in coins.iter_mut().zip(self.0.iter()) {
            *coin = Coin::from_value(value)?;
        }
        Some(coins)
    }

    /// The coin names in slot order, quoted and space separated: the order
    /// to use them in at the ruins.
    pub fn coin_line(&self) -> Option<String> {
        let names = self
            .coins()?
            .iter()
            .map(|coin| format!("{:?}", coin.name()))
            .collect::<Vec<_>>();
        Some(names.join(" "))
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "({}, {}, {}, {}, {})", a, b, c, d, e)
    }
}

/// The equation to balance: which values go in the blanks and what the
/// left-hand side has to come out to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    values: [i64; ARITY],
    target: i64,
}

impl Default for Puzzle {
    fn default() -> Self {
        let mut values = [0; ARITY];
        for (value, coin) in values.iter_mut().zip(Coin::ALL.iter()) {
            *value = coin.value();
        }

        Self {
            values,
            target: TARGET,
        }
    }
}

impl Puzzle {
    pub fn new(values: [i64; ARITY], target: i64) -> Result<Self> {
        let mut seen = HashSet::with_capacity(ARITY);
        if let Some(&dup) = values.iter().find(|&&value| !seen.insert(value)) {
            return Err(Error::DuplicateValue(dup));
        }

        Ok(Self { values, target })
    }

    pub fn from_slice(values: &[i64], target: i64) -> Result<Self> {
        let values = <[i64; ARITY]>::try_from(values).map_err(|_| Error::Arity {
            expected: ARITY,
            actual: values.len(),
        })?;

        Self::new(values, target)
    }

    pub fn with_target(&self, target: i64) -> Self {
        Self {
            values: self.values,
            target,
        }
    }

    pub fn values(&self) -> [i64; ARITY] {
        self.values
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Computes `a + b * c^2 + d^3 - e`, refusing to wrap.
    pub fn evaluate(&self, arrangement: &[i64; ARITY]) -> Result<i64> {
        let [a, b, c, d, e] = *arrangement;
        let overflow = || Error::Overflow {
            arrangement: *arrangement,
        };

        let bc2 = c
            .checked_pow(2)
            .and_then(|c2| b.checked_mul(c2))
            .ok_or_else(overflow)?;
        let d3 = d.checked_pow(3).ok_or_else(overflow)?;

        a.checked_add(bc2)
            .and_then(|sum| sum.checked_add(d3))
            .and_then(|sum| sum.checked_sub(e))
            .ok_or_else(overflow)
    }

    pub fn is_satisfied_by(&self, arrangement: &[i64; ARITY]) -> Result<bool> {
        Ok(self.evaluate(arrangement)? == self.target)
    }
}
