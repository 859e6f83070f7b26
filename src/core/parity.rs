//! Parity labels.
//!
//! `Parity` is both the ground truth of a number and the label a player
//! submits for it. The semantic label strings (`"even"`, `"odd"`) double as
//! translation keys.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Even or odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Ground-truth parity of an integer. Zero and negatives included.
    ///
    /// ```
    /// use even_odd::core::Parity;
    ///
    /// assert_eq!(Parity::of(0), Parity::Even);
    /// assert_eq!(Parity::of(-3), Parity::Odd);
    /// ```
    #[must_use]
    pub const fn of(number: i64) -> Self {
        if number % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Semantic label, also used as the translation key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }

    /// The other parity.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Parity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "even" => Ok(Parity::Even),
            "odd" => Ok(Parity::Odd),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        assert_eq!(Parity::of(2), Parity::Even);
        assert_eq!(Parity::of(7), Parity::Odd);
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(-4), Parity::Even);
        assert_eq!(Parity::of(-1), Parity::Odd);
        assert_eq!(Parity::of(i64::MIN), Parity::Even);
    }

    #[test]
    fn test_label_round_trip() {
        for parity in [Parity::Even, Parity::Odd] {
            assert_eq!(parity.label().parse::<Parity>(), Ok(parity));
            assert_eq!(format!("{}", parity), parity.label());
        }
        assert!("Even".parse::<Parity>().is_err());
    }

    #[test]
    fn test_flip() {
        assert_eq!(Parity::Even.flip(), Parity::Odd);
        assert_eq!(Parity::Odd.flip(), Parity::Even);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Parity::Odd).unwrap(), "\"odd\"");
        let parsed: Parity = serde_json::from_str("\"even\"").unwrap();
        assert_eq!(parsed, Parity::Even);
    }
}
