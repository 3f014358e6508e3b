//! Food entries, reusable templates, and nutrition arithmetic.
//!
//! Nutrition math is strictly linear: scaling a per-serving estimate by a
//! serving multiplier multiplies every component, and totals are plain
//! component-wise sums. Nothing here rounds or clamps.

use crate::units::ServingUnit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;
use uuid::Uuid;

/// Macronutrient breakdown for one serving (or one entry total)
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
}

impl NutritionFacts {
    /// Scale every component by a serving multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_g: self.protein_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
            fat_g: self.fat_g * multiplier,
            fiber_g: self.fiber_g * multiplier,
        }
    }
}

impl Add for NutritionFacts {
    type Output = NutritionFacts;

    fn add(self, rhs: NutritionFacts) -> NutritionFacts {
        NutritionFacts {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

impl Sum for NutritionFacts {
    fn sum<I: Iterator<Item = NutritionFacts>>(iter: I) -> Self {
        iter.fold(NutritionFacts::default(), Add::add)
    }
}

/// Which meal of the day an entry belongs to
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

crate::compat::legacy_enum_deserialize!(MealType,
    Breakfast => "breakfast",
    Lunch => "lunch",
    Dinner => "dinner",
    Snack => "snack",
);

impl MealType {
    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MealType::Breakfast => "🍳",
            MealType::Lunch => "🥪",
            MealType::Dinner => "🍽️",
            MealType::Snack => "🍎",
        }
    }
}

/// A logged food entry
///
/// `per_serving` holds the estimate for a single serving; `servings` is the
/// multiplier actually eaten. `ai_reasoning` and `is_ai_generated` are
/// carried as plain data written by the estimation layer upstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: Uuid,
    pub name: String,
    pub eaten_at: DateTime<Utc>,
    pub meal: MealType,
    pub serving_size: f64,
    pub serving_unit: ServingUnit,
    #[serde(default = "default_servings")]
    pub servings: f64,
    pub per_serving: NutritionFacts,
    #[serde(default)]
    pub ai_reasoning: Option<String>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub template_id: Option<Uuid>,
}

fn default_servings() -> f64 {
    1.0
}

impl FoodEntry {
    pub fn new(
        name: impl Into<String>,
        meal: MealType,
        serving_size: f64,
        serving_unit: ServingUnit,
        per_serving: NutritionFacts,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            eaten_at: Utc::now(),
            meal,
            serving_size,
            serving_unit,
            servings: 1.0,
            per_serving,
            ai_reasoning: None,
            is_ai_generated: false,
            template_id: None,
        }
    }

    pub fn with_servings(mut self, servings: f64) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_ai_estimate(mut self, reasoning: impl Into<String>) -> Self {
        self.ai_reasoning = Some(reasoning.into());
        self.is_ai_generated = true;
        self
    }

    /// Nutrition actually consumed: per-serving facts times the multiplier
    pub fn total_nutrition(&self) -> NutritionFacts {
        self.per_serving.scale(self.servings)
    }
}

/// A reusable food definition the user logs repeatedly
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FoodTemplate {
    pub id: Uuid,
    pub name: String,
    pub serving_size: f64,
    pub serving_unit: ServingUnit,
    pub per_serving: NutritionFacts,
}

impl FoodTemplate {
    pub fn new(
        name: impl Into<String>,
        serving_size: f64,
        serving_unit: ServingUnit,
        per_serving: NutritionFacts,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            serving_size,
            serving_unit,
            per_serving,
        }
    }

    /// Create an entry from this template, carrying the template id
    pub fn instantiate(&self, servings: f64, meal: MealType, eaten_at: DateTime<Utc>) -> FoodEntry {
        FoodEntry {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            eaten_at,
            meal,
            serving_size: self.serving_size,
            serving_unit: self.serving_unit,
            servings,
            per_serving: self.per_serving,
            ai_reasoning: None,
            is_ai_generated: false,
            template_id: Some(self.id),
        }
    }
}

/// Sum total nutrition across entries eaten on one calendar date (UTC)
pub fn daily_totals(entries: &[FoodEntry], date: chrono::NaiveDate) -> NutritionFacts {
    entries
        .iter()
        .filter(|e| e.eaten_at.date_naive() == date)
        .map(|e| e.total_nutrition())
        .sum()
}
