//! Plan generation service - asks the LLM for a plan, falls back to the demo plan

use crate::llm::{CompletionRequest, LlmProvider};
use fitplan_shared::demo::demo_plan;
use fitplan_shared::models::{FitnessPlan, UserProfile};
use fitplan_shared::validation::validate_profile;
use tracing::{info, warn};

const PLAN_TEMPERATURE: f32 = 0.7;
const PLAN_MAX_TOKENS: u32 = 8192;

/// Why a provider answer could not be used
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Llm(#[from] crate::llm::LlmError),

    #[error("No JSON object in provider response")]
    NoJson,

    #[error("Provider response is not a plan: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{0}")]
    Shape(String),
}

/// Plan generation service
pub struct PlanService;

impl PlanService {
    /// Produce a plan for the profile
    ///
    /// Never fails: without a provider, or when the provider's answer is
    /// unusable, the demo plan is returned.
    pub async fn generate(llm: Option<&dyn LlmProvider>, profile: &UserProfile) -> FitnessPlan {
        if let Err(errors) = validate_profile(profile) {
            let fields: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
            warn!(fields = ?fields, "Profile values out of range, generating anyway");
        }

        let Some(llm) = llm else {
            info!("AI provider not configured, serving demo plan");
            return demo_plan(profile);
        };

        match Self::request_plan(llm, profile).await {
            Ok(plan) => plan,
            Err(e) => {
                warn!(provider = llm.name(), error = %e, "Plan generation failed, serving demo plan");
                demo_plan(profile)
            }
        }
    }

    async fn request_plan(
        llm: &dyn LlmProvider,
        profile: &UserProfile,
    ) -> Result<FitnessPlan, PlanError> {
        let request = CompletionRequest::new(build_prompt(profile), PLAN_TEMPERATURE, PLAN_MAX_TOKENS)
            .with_json_output();
        let text = llm.complete(&request).await?;
        parse_plan(&text)
    }
}

/// Parse a provider answer into a plan and check it covers seven days
pub fn parse_plan(text: &str) -> Result<FitnessPlan, PlanError> {
    let json = extract_json_object(text).ok_or(PlanError::NoJson)?;
    let plan: FitnessPlan = serde_json::from_str(json)?;
    plan.check_shape().map_err(PlanError::Shape)?;
    Ok(plan)
}

/// Slice from the first `{` to the last `}`, tolerating prose or code fences
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Build the plan prompt; optional fields appear only when present
pub fn build_prompt(profile: &UserProfile) -> String {
    let mut details = format!(
        "- Name: {}\n- Age: {}\n- Gender: {}\n- Height: {}cm\n- Weight: {}kg\n- Fitness Goal: {}\n- Fitness Level: {}\n- Workout Location: {}\n- Dietary Preference: {}\n",
        profile.name,
        profile.age,
        profile.gender,
        profile.height_cm,
        profile.weight_kg,
        profile.fitness_goal.label(),
        profile.fitness_level,
        profile.workout_location,
        profile.dietary_preference.label(),
    );
    if let Some(history) = &profile.medical_history {
        details.push_str(&format!("- Medical History: {}\n", history));
    }
    if let Some(stress) = &profile.stress_level {
        details.push_str(&format!("- Stress Level: {}\n", stress));
    }

    format!(
        r#"You are an expert fitness coach and nutritionist. Generate a personalized fitness plan for the following user:

{details}
Create a comprehensive plan with:
1. A 7-day workout plan with specific exercises, sets, reps, and rest times
2. A diet plan with breakfast, lunch, dinner, and snacks including items, calories and protein
3. 5-7 practical lifestyle and fitness tips
4. A short motivational message addressed to the user

Return ONLY valid JSON in this exact structure:
{{
  "workoutPlan": [
    {{
      "day": "Monday",
      "exercises": [
        {{"name": "Exercise name", "sets": 3, "reps": "10-12", "restTime": "60s", "notes": "Optional form cue"}}
      ]
    }}
  ],
  "dietPlan": {{
    "breakfast": {{"name": "Meal name", "items": ["item 1", "item 2"], "calories": "400 kcal", "protein": "25g"}},
    "lunch": {{"name": "Meal name", "items": ["item 1"], "calories": "600 kcal", "protein": "35g"}},
    "dinner": {{"name": "Meal name", "items": ["item 1"], "calories": "550 kcal", "protein": "30g"}},
    "snacks": {{"name": "Snacks", "items": ["item 1"], "calories": "200 kcal", "protein": "10g"}}
  }},
  "tips": ["Tip 1", "Tip 2"],
  "motivation": "Motivational message"
}}"#
    )
}
