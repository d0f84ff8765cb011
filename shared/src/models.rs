//! Data models for FitPlan
//!
//! The JSON wire format matches what the browser stores and what the LLM is
//! asked to produce: camelCase field names, snake_case enum values.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Number of days every workout plan covers
pub const PLAN_DAYS: usize = 7;

// ============================================================================
// Profile enums
// ============================================================================

/// Declares a snake_case enum with `as_str`, `label`, `Display` and `FromStr`.
macro_rules! profile_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in form order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value, e.g. `weight_loss`
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Human readable value with the first underscore replaced by a space
            pub fn label(&self) -> String {
                self.as_str().replacen('_', " ", 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(format!("Unknown {}: {}", stringify!($name), s)),
                }
            }
        }
    };
}

profile_enum!(
    /// Gender as selected on the profile form
    Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
);

profile_enum!(
    /// Primary fitness goal
    FitnessGoal {
        WeightLoss => "weight_loss",
        MuscleGain => "muscle_gain",
        Maintenance => "maintenance",
        Endurance => "endurance",
        Flexibility => "flexibility",
    }
);

profile_enum!(
    /// Self-assessed training experience
    FitnessLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
);

profile_enum!(
    /// Where the user trains
    WorkoutLocation {
        Home => "home",
        Gym => "gym",
        Outdoor => "outdoor",
    }
);

profile_enum!(
    /// Dietary preference for the meal plan
    DietaryPreference {
        Vegetarian => "vegetarian",
        NonVegetarian => "non_vegetarian",
        Vegan => "vegan",
        Keto => "keto",
    }
);

profile_enum!(
    /// Self-reported stress level
    StressLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

// ============================================================================
// Profile
// ============================================================================

/// User profile submitted from the creation form
///
/// Immutable once sent; persisted next to the generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(range(min = 10, max = 100, message = "must be between 10 and 100"))]
    pub age: u32,
    pub gender: Gender,
    #[serde(rename = "height")]
    #[validate(range(min = 100.0, max = 250.0, message = "must be between 100 and 250 cm"))]
    pub height_cm: f64,
    #[serde(rename = "weight")]
    #[validate(range(min = 30.0, max = 200.0, message = "must be between 30 and 200 kg"))]
    pub weight_kg: f64,
    pub fitness_goal: FitnessGoal,
    pub fitness_level: FitnessLevel,
    pub workout_location: WorkoutLocation,
    pub dietary_preference: DietaryPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,
}

// ============================================================================
// Plan
// ============================================================================

/// A single exercise prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Numeric range ("8-10") or duration text ("60s hold")
    pub reps: String,
    pub rest_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One day of the weekly workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub exercises: Vec<Exercise>,
}

/// A meal with optional nutrition figures (strings carry their units)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
}

/// The four fixed meal slots of a diet plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    /// Key used in the JSON diet plan
    pub fn key(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

/// Daily diet plan with exactly four slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Meal,
}

impl DietPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Meals in slot order
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.meal(slot)))
    }
}

/// A generated fitness plan
///
/// Read-only once produced; only full regeneration replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub workout_plan: Vec<WorkoutDay>,
    pub diet_plan: DietPlan,
    pub tips: Vec<String>,
    pub motivation: String,
}

impl FitnessPlan {
    /// Check the shape invariant: a plan always covers exactly seven days
    pub fn check_shape(&self) -> Result<(), String> {
        if self.workout_plan.len() != PLAN_DAYS {
            return Err(format!(
                "Workout plan must have {} days, got {}",
                PLAN_DAYS,
                self.workout_plan.len()
            ));
        }
        Ok(())
    }
}
