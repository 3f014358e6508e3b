//! Unit conversion for weights and serving sizes.
//!
//! All weight conversions go through kilograms so that converting a value to
//! another unit and back is reversible within floating-point tolerance.

use serde::{Deserialize, Serialize};

/// International avoirdupois pound, exact by definition
pub const KG_PER_LB: f64 = 0.453_592_37;
/// One stone is exactly 14 pounds
pub const LBS_PER_STONE: f64 = 14.0;
/// International avoirdupois ounce, exact by definition
pub const GRAMS_PER_OUNCE: f64 = 28.349_523_125;
/// US legal cup
pub const ML_PER_CUP: f64 = 240.0;

/// Unit a weight measurement was taken in
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kg,
    Lbs,
    Stone,
}

crate::compat::legacy_enum_deserialize!(WeightUnit,
    Kg => "kg",
    Lbs => "lbs",
    Stone => "stone",
);

impl WeightUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "Kilograms",
            WeightUnit::Lbs => "Pounds",
            WeightUnit::Stone => "Stone",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }

    /// Convert a value in this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
            WeightUnit::Stone => value * LBS_PER_STONE * KG_PER_LB,
        }
    }

    /// Convert a value in kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
            WeightUnit::Stone => kg / KG_PER_LB / LBS_PER_STONE,
        }
    }
}

/// Convert a weight value between units
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_kg(from.to_kg(value))
}

/// Exact stones-and-pounds reading, as shown on UK scales
///
/// Stored alongside a converted value so the user's original reading
/// survives round-tripping through other units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct StonesAndPounds {
    pub stones: u32,
    pub pounds: f64,
}

impl StonesAndPounds {
    /// Decompose a total weight in pounds into whole stones plus remainder
    pub fn from_total_lbs(total_lbs: f64) -> Self {
        let total = total_lbs.max(0.0);
        let stones = (total / LBS_PER_STONE).floor() as u32;
        let pounds = total - stones as f64 * LBS_PER_STONE;
        Self { stones, pounds }
    }

    /// Total weight in pounds
    pub fn total_lbs(&self) -> f64 {
        self.stones as f64 * LBS_PER_STONE + self.pounds
    }

    /// Total weight in kilograms
    pub fn total_kg(&self) -> f64 {
        self.total_lbs() * KG_PER_LB
    }
}

impl std::fmt::Display for StonesAndPounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} st {:.1} lbs", self.stones, self.pounds)
    }
}

/// Unit a food serving is measured in
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServingUnit {
    Gram,
    Milliliter,
    Ounce,
    Cup,
    Piece,
}

crate::compat::legacy_enum_deserialize!(ServingUnit,
    Gram => "gram",
    Milliliter => "milliliter",
    Ounce => "ounce",
    Cup => "cup",
    Piece => "piece",
);

impl ServingUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            ServingUnit::Gram => "Grams",
            ServingUnit::Milliliter => "Milliliters",
            ServingUnit::Ounce => "Ounces",
            ServingUnit::Cup => "Cups",
            ServingUnit::Piece => "Pieces",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            ServingUnit::Gram => "g",
            ServingUnit::Milliliter => "ml",
            ServingUnit::Ounce => "oz",
            ServingUnit::Cup => "cup",
            ServingUnit::Piece => "pc",
        }
    }

    /// Gram-equivalent of one unit, treating 1 ml as 1 g (water density)
    ///
    /// Returns None for Piece, which has no mass conversion.
    pub fn grams_per_unit(&self) -> Option<f64> {
        match self {
            ServingUnit::Gram => Some(1.0),
            ServingUnit::Milliliter => Some(1.0),
            ServingUnit::Ounce => Some(GRAMS_PER_OUNCE),
            ServingUnit::Cup => Some(ML_PER_CUP),
            ServingUnit::Piece => None,
        }
    }
}

/// Convert a serving size between mass-convertible units
///
/// Returns None if either unit is Piece.
pub fn convert_serving(value: f64, from: ServingUnit, to: ServingUnit) -> Option<f64> {
    if from == to {
        return Some(value);
    }
    let grams = value * from.grams_per_unit()?;
    Some(grams / to.grams_per_unit()?)
}
