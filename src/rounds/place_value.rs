//! Place-value decomposition of target numbers.
//!
//! Each `PresentationMode` shows a number split into columns. The split is
//! pure arithmetic; drawing the columns is left to presentation.

use serde::{Deserialize, Serialize};

use super::tier::PresentationMode;

/// A number split into the columns its presentation mode shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceValue {
    /// Loose unit items, as many as the number.
    Units(u32),
    /// Tens and units columns.
    TensUnits { tens: u32, units: u32 },
    /// Hundreds, tens and units columns.
    HundredsTensUnits { hundreds: u32, tens: u32, units: u32 },
    /// Millions/thousands/units classes of three digits each.
    Classes {
        millions: u32,
        thousands: u32,
        units: u32,
    },
}

impl PlaceValue {
    /// The rightmost column. Its parity is the parity of the whole number.
    #[must_use]
    pub fn units(&self) -> u32 {
        match *self {
            PlaceValue::Units(n) => n,
            PlaceValue::TensUnits { units, .. }
            | PlaceValue::HundredsTensUnits { units, .. }
            | PlaceValue::Classes { units, .. } => units,
        }
    }
}

/// Split `number` into the columns `mode` shows.
///
/// `PlaceValue` uses tens/units below 100 and hundreds/tens/units above.
/// Anything past the hundreds column stays in `hundreds`.
///
/// ```
/// use even_odd::rounds::{place_value, PlaceValue, PresentationMode};
///
/// assert_eq!(
///     place_value(27, PresentationMode::PlaceValue),
///     PlaceValue::TensUnits { tens: 2, units: 7 }
/// );
/// ```
#[must_use]
pub fn place_value(number: u32, mode: PresentationMode) -> PlaceValue {
    match mode {
        PresentationMode::Rods => PlaceValue::Units(number),
        PresentationMode::PlaceValue if number < 100 => PlaceValue::TensUnits {
            tens: number / 10,
            units: number % 10,
        },
        PresentationMode::PlaceValue => PlaceValue::HundredsTensUnits {
            hundreds: number / 100,
            tens: number / 10 % 10,
            units: number % 10,
        },
        PresentationMode::ClassTable => PlaceValue::Classes {
            millions: number / 1_000_000,
            thousands: number / 1_000 % 1_000,
            units: number % 1_000,
        },
    }
}

impl std::fmt::Display for PlaceValue {
    /// Columns separated by spaces; classes are zero-padded to three digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlaceValue::Units(n) => write!(f, "{}", n),
            PlaceValue::TensUnits { tens, units } => write!(f, "{} {}", tens, units),
            PlaceValue::HundredsTensUnits {
                hundreds,
                tens,
                units,
            } => write!(f, "{} {} {}", hundreds, tens, units),
            PlaceValue::Classes {
                millions,
                thousands,
                units,
            } => write!(f, "{:03} {:03} {:03}", millions, thousands, units),
        }
    }
}
