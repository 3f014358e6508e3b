//! Built-in template catalog.
//!
//! Ships a starter set of food templates and meditation presets so a fresh
//! install has something to log against. Built-in ids are fixed constants so
//! entries created from them stay linked across runs.

use crate::meditation::MeditationKind;
use crate::nutrition::{FoodTemplate, NutritionFacts};
use crate::units::ServingUnit;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use uuid::Uuid;

/// A preset meditation the user can start with one tap
#[derive(Clone, Debug)]
pub struct MeditationPreset {
    pub id: Uuid,
    pub name: String,
    pub kind: MeditationKind,
    pub duration_minutes: u32,
}

/// The complete catalog of built-in templates
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    pub food: HashMap<Uuid, FoodTemplate>,
    pub meditations: Vec<MeditationPreset>,
}

impl TemplateCatalog {
    /// Check catalog consistency, returning human-readable problems
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (key, template) in &self.food {
            if *key != template.id {
                errors.push(format!(
                    "food template {} stored under mismatched key {}",
                    template.id, key
                ));
            }
            if template.serving_size <= 0.0 {
                errors.push(format!(
                    "food template '{}' has non-positive serving size",
                    template.name
                ));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for preset in &self.meditations {
            if !seen.insert(preset.id) {
                errors.push(format!("duplicate meditation preset id {}", preset.id));
            }
            if preset.duration_minutes == 0 {
                errors.push(format!(
                    "meditation preset '{}' has zero duration",
                    preset.name
                ));
            }
        }

        errors
    }

    /// Look up a food template by (case-insensitive) name
    pub fn find_food_by_name(&self, name: &str) -> Option<&FoodTemplate> {
        self.food
            .values()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Cached built-in catalog - built once and reused across all operations
static BUILTIN_CATALOG: Lazy<TemplateCatalog> = Lazy::new(build_builtin_catalog_internal);

/// Get a reference to the cached built-in catalog
pub fn get_builtin_catalog() -> &'static TemplateCatalog {
    &BUILTIN_CATALOG
}

/// Builds the built-in catalog from scratch
///
/// **Note**: For production use, prefer `get_builtin_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_builtin_catalog() -> TemplateCatalog {
    build_builtin_catalog_internal()
}

fn food_template(
    id: u128,
    name: &str,
    serving_size: f64,
    serving_unit: ServingUnit,
    per_serving: NutritionFacts,
) -> FoodTemplate {
    FoodTemplate {
        id: Uuid::from_u128(id),
        name: name.into(),
        serving_size,
        serving_unit,
        per_serving,
    }
}

fn build_builtin_catalog_internal() -> TemplateCatalog {
    let mut food = HashMap::new();

    for template in [
        food_template(
            0x1001,
            "Oatmeal (dry)",
            40.0,
            ServingUnit::Gram,
            NutritionFacts {
                calories: 150.0,
                protein_g: 5.0,
                carbs_g: 27.0,
                fat_g: 3.0,
                fiber_g: 4.0,
            },
        ),
        food_template(
            0x1002,
            "Greek yogurt (plain)",
            170.0,
            ServingUnit::Gram,
            NutritionFacts {
                calories: 100.0,
                protein_g: 17.0,
                carbs_g: 6.0,
                fat_g: 0.7,
                fiber_g: 0.0,
            },
        ),
        food_template(
            0x1003,
            "Banana",
            1.0,
            ServingUnit::Piece,
            NutritionFacts {
                calories: 105.0,
                protein_g: 1.3,
                carbs_g: 27.0,
                fat_g: 0.4,
                fiber_g: 3.1,
            },
        ),
        food_template(
            0x1004,
            "Chicken breast (cooked)",
            100.0,
            ServingUnit::Gram,
            NutritionFacts {
                calories: 165.0,
                protein_g: 31.0,
                carbs_g: 0.0,
                fat_g: 3.6,
                fiber_g: 0.0,
            },
        ),
        food_template(
            0x1005,
            "White rice (cooked)",
            1.0,
            ServingUnit::Cup,
            NutritionFacts {
                calories: 205.0,
                protein_g: 4.3,
                carbs_g: 44.5,
                fat_g: 0.4,
                fiber_g: 0.6,
            },
        ),
        food_template(
            0x1006,
            "Whole milk",
            240.0,
            ServingUnit::Milliliter,
            NutritionFacts {
                calories: 149.0,
                protein_g: 7.7,
                carbs_g: 11.7,
                fat_g: 7.9,
                fiber_g: 0.0,
            },
        ),
    ] {
        food.insert(template.id, template);
    }

    let meditations = vec![
        MeditationPreset {
            id: Uuid::from_u128(0x2001),
            name: "Box breathing".into(),
            kind: MeditationKind::Breathing,
            duration_minutes: 5,
        },
        MeditationPreset {
            id: Uuid::from_u128(0x2002),
            name: "Morning body scan".into(),
            kind: MeditationKind::BodyScan,
            duration_minutes: 10,
        },
        MeditationPreset {
            id: Uuid::from_u128(0x2003),
            name: "Walking meditation".into(),
            kind: MeditationKind::Walking,
            duration_minutes: 15,
        },
        MeditationPreset {
            id: Uuid::from_u128(0x2004),
            name: "Unguided sit".into(),
            kind: MeditationKind::Unguided,
            duration_minutes: 20,
        },
    ];

    TemplateCatalog { food, meditations }
}
