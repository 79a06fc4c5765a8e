//! Empirical age sampling and age-bracket parameter tables.
//!
//! Ages are drawn from a five-bracket empirical distribution and then
//! mapped to two static per-agent parameters: the daily contact count and
//! the probability of death if infected. Bracket membership uses one
//! consistent convention throughout: inclusive lower bound, exclusive
//! upper bound at 10 / 20 / 50 / 65. Every age in `[0, 9]` therefore uses
//! the first bracket's parameters, ages `[10, 19]` the second, and so on.

use rand::Rng;

/// The five age brackets of the empirical population distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    /// Ages 0--9.
    Child,
    /// Ages 10--19.
    Teen,
    /// Ages 20--49.
    Adult,
    /// Ages 50--64.
    Senior,
    /// Ages 65 and above.
    Elderly,
}

impl AgeBracket {
    /// Classify an age into its bracket.
    ///
    /// Bounds are exclusive-upper: age 9 is [`Self::Child`], age 10 is
    /// [`Self::Teen`], age 64 is [`Self::Senior`], age 65 is
    /// [`Self::Elderly`].
    pub const fn for_age(age: u32) -> Self {
        if age < 10 {
            Self::Child
        } else if age < 20 {
            Self::Teen
        } else if age < 50 {
            Self::Adult
        } else if age < 65 {
            Self::Senior
        } else {
            Self::Elderly
        }
    }

    /// Probability of death if infected, per bracket.
    pub const fn death_probability(self) -> f64 {
        match self {
            Self::Child => 0.000_016,
            Self::Teen => 0.000_003_2,
            Self::Adult => 0.000_092,
            Self::Senior => 0.0014,
            Self::Elderly => 0.056,
        }
    }

    /// Nominal daily contact count, per bracket.
    pub const fn daily_contacts(self) -> u32 {
        match self {
            Self::Child | Self::Teen => 20,
            Self::Adult => 25,
            Self::Senior => 10,
            Self::Elderly => 5,
        }
    }
}

impl core::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Child => write!(f, "0-9"),
            Self::Teen => write!(f, "10-19"),
            Self::Adult => write!(f, "20-49"),
            Self::Senior => write!(f, "50-64"),
            Self::Elderly => write!(f, "65+"),
        }
    }
}

/// Draw an age from the empirical bracket distribution.
///
/// Bracket weights: 12% ages 0--9, 13% ages 10--19, 39% ages 20--49,
/// 19% ages 50--64, 17% ages 65--90. Within a bracket the age is
/// uniform.
pub fn generate_age(rng: &mut impl Rng) -> u32 {
    let roll: f64 = rng.random();
    if roll < 0.12 {
        rng.random_range(0..=9)
    } else if roll < 0.25 {
        rng.random_range(10..=19)
    } else if roll < 0.64 {
        rng.random_range(20..=49)
    } else if roll < 0.83 {
        rng.random_range(50..=64)
    } else {
        rng.random_range(65..=90)
    }
}
