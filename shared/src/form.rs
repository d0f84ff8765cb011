//! Profile form state
//!
//! Holds what the creation form is currently showing. Inputs arrive as
//! strings from the page and are bound field by field; `submit` produces the
//! immutable [`UserProfile`] that is sent for plan generation.

use crate::models::{
    DietaryPreference, FitnessGoal, FitnessLevel, Gender, StressLevel, UserProfile,
    WorkoutLocation,
};
use crate::validation::{validate_profile, ValidationError};

/// Editable profile form
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub fitness_goal: FitnessGoal,
    pub fitness_level: FitnessLevel,
    pub workout_location: WorkoutLocation,
    pub dietary_preference: DietaryPreference,
    pub medical_history: String,
    pub stress_level: Option<StressLevel>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            fitness_goal: FitnessGoal::MuscleGain,
            fitness_level: FitnessLevel::Beginner,
            workout_location: WorkoutLocation::Gym,
            dietary_preference: DietaryPreference::NonVegetarian,
            medical_history: String::new(),
            stress_level: Some(StressLevel::Medium),
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(field, "has an invalid value"))
}

impl ProfileForm {
    /// Bind a raw input value to a field by its snake_case name
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        match field {
            "name" => self.name = value.to_string(),
            "age" => self.age = parse_field(field, value)?,
            "gender" => self.gender = parse_field(field, value)?,
            "height" | "height_cm" => self.height_cm = parse_field(field, value)?,
            "weight" | "weight_kg" => self.weight_kg = parse_field(field, value)?,
            "fitness_goal" => self.fitness_goal = parse_field(field, value)?,
            "fitness_level" => self.fitness_level = parse_field(field, value)?,
            "workout_location" => self.workout_location = parse_field(field, value)?,
            "dietary_preference" => self.dietary_preference = parse_field(field, value)?,
            "medical_history" => self.medical_history = value.to_string(),
            "stress_level" => {
                self.stress_level = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_field(field, value)?)
                }
            }
            _ => return Err(ValidationError::new(field, "is not a profile field")),
        }
        Ok(())
    }

    /// Build and validate the profile
    pub fn submit(&self) -> Result<UserProfile, Vec<ValidationError>> {
        let medical_history = self.medical_history.trim();
        let profile = UserProfile {
            name: self.name.trim().to_string(),
            age: self.age,
            gender: self.gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            fitness_goal: self.fitness_goal,
            fitness_level: self.fitness_level,
            workout_location: self.workout_location,
            dietary_preference: self.dietary_preference,
            medical_history: (!medical_history.is_empty()).then(|| medical_history.to_string()),
            stress_level: self.stress_level,
        };

        validate_profile(&profile)?;
        Ok(profile)
    }
}
