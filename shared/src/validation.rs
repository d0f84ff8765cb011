//! Profile validation
//!
//! Range rules live on [`UserProfile`] as `validator` derive attributes; this
//! module turns the raw `ValidationErrors` into messages a form can show next
//! to each field.

use crate::models::UserProfile;
use validator::Validate;

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "gender" => "Gender",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "fitness_goal" => "Fitness Goal",
        "fitness_level" => "Fitness Level",
        "workout_location" => "Workout Location",
        "dietary_preference" => "Dietary Preference",
        "medical_history" => "Medical History",
        "stress_level" => "Stress Level",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Validate a profile, returning one error per failing field
///
/// Errors are sorted by field name so callers get a stable order.
pub fn validate_profile(profile: &UserProfile) -> Result<(), Vec<ValidationError>> {
    let Err(errors) = profile.validate() else {
        return Ok(());
    };

    let mut out: Vec<ValidationError> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            ValidationError::new(&field, &message)
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    Err(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ProfileForm;
    use proptest::prelude::*;

    fn valid_profile() -> UserProfile {
        let mut form = ProfileForm::default();
        form.name = "Ana".to_string();
        form.submit().unwrap()
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(&valid_profile()).is_ok());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("height_cm"), "Height");
        assert_eq!(get_field_display_label("fitness_goal"), "Fitness Goal");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("age", "must be between 10 and 100");
        assert_eq!(err.display_label, "Age");
        assert_eq!(err.user_message(), "Age: must be between 10 and 100");
    }

    #[test]
    fn test_multiple_errors_sorted_by_field() {
        let mut profile = valid_profile();
        profile.name.clear();
        profile.age = 5;

        let errors = validate_profile(&profile).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["age", "name"]);
        assert_eq!(errors[1].user_message(), "Name: is required");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_age_range(age in 10u32..=100) {
            let mut profile = valid_profile();
            profile.age = age;
            prop_assert!(validate_profile(&profile).is_ok());
        }

        #[test]
        fn prop_invalid_age_above_max(age in 101u32..1000) {
            let mut profile = valid_profile();
            profile.age = age;
            prop_assert!(validate_profile(&profile).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 100.0f64..=250.0) {
            let mut profile = valid_profile();
            profile.height_cm = height;
            prop_assert!(validate_profile(&profile).is_ok(),
                "Height {} should be valid", height);
        }

        #[test]
        fn prop_invalid_height_below_min(height in 0.0f64..100.0) {
            let mut profile = valid_profile();
            profile.height_cm = height;
            prop_assert!(validate_profile(&profile).is_err(),
                "Height {} should be invalid (below minimum)", height);
        }

        #[test]
        fn prop_valid_weight_range(weight in 30.0f64..=200.0) {
            let mut profile = valid_profile();
            profile.weight_kg = weight;
            prop_assert!(validate_profile(&profile).is_ok());
        }

        #[test]
        fn prop_invalid_weight_above_max(weight in 200.1f64..500.0) {
            let mut profile = valid_profile();
            profile.weight_kg = weight;
            prop_assert!(validate_profile(&profile).is_err());
        }
    }
}
