use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rules")]
pub struct ParseRulesError(ron::de::SpannedError);

/// Configuration for a [`Game`][`crate::game::Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Rules {
    /// How many fences each player starts with.
    #[strategy(..=20u8)]
    pub fences: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Rules { fences: 10 }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
