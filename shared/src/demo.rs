//! Built-in demo plan
//!
//! Served whenever the AI provider is not configured or its answer cannot be
//! used. Everything is fixed except the motivation line, which carries the
//! user's name and goal.

use crate::models::{DietPlan, Exercise, FitnessPlan, Meal, UserProfile, WorkoutDay};

fn exercise(name: &str, sets: u32, reps: &str, rest_time: &str, notes: Option<&str>) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        rest_time: rest_time.to_string(),
        notes: notes.map(str::to_string),
    }
}

fn day(day: &str, exercises: Vec<Exercise>) -> WorkoutDay {
    WorkoutDay {
        day: day.to_string(),
        exercises,
    }
}

fn meal(name: &str, items: &[&str], calories: &str, protein: &str) -> Meal {
    Meal {
        name: name.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
        calories: Some(calories.to_string()),
        protein: Some(protein.to_string()),
    }
}

/// Motivation line for the demo plan
pub fn demo_motivation(profile: &UserProfile) -> String {
    format!(
        "{}, your journey to {} starts now! Stay consistent, trust the process, and remember - every workout brings you closer to your goals!",
        profile.name,
        profile.fitness_goal.label()
    )
}

/// Build the demo plan for a profile
pub fn demo_plan(profile: &UserProfile) -> FitnessPlan {
    let workout_plan = vec![
        day(
            "Monday",
            vec![
                exercise("Bench Press", 4, "8-10", "90s", Some("Focus on form")),
                exercise("Incline Dumbbell Press", 3, "10-12", "60s", None),
                exercise("Cable Flyes", 3, "12-15", "45s", None),
                exercise("Tricep Dips", 3, "10-12", "60s", None),
            ],
        ),
        day(
            "Tuesday",
            vec![
                exercise("Squats", 4, "8-10", "90s", Some("Keep back straight")),
                exercise("Leg Press", 3, "12-15", "60s", None),
                exercise("Leg Curls", 3, "12-15", "45s", None),
                exercise("Calf Raises", 4, "15-20", "45s", None),
            ],
        ),
        day(
            "Wednesday",
            vec![exercise("Rest Day", 0, "0", "0s", Some("Active recovery"))],
        ),
        day(
            "Thursday",
            vec![
                exercise("Pull-ups", 4, "8-10", "90s", None),
                exercise("Barbell Rows", 4, "8-10", "90s", None),
                exercise("Lat Pulldowns", 3, "10-12", "60s", None),
                exercise("Bicep Curls", 3, "10-12", "45s", None),
            ],
        ),
        day(
            "Friday",
            vec![
                exercise("Overhead Press", 4, "8-10", "90s", None),
                exercise("Lateral Raises", 3, "12-15", "45s", None),
                exercise("Front Raises", 3, "12-15", "45s", None),
                exercise("Shrugs", 3, "12-15", "45s", None),
            ],
        ),
        day(
            "Saturday",
            vec![
                exercise("Deadlifts", 4, "6-8", "120s", Some("Maintain proper form")),
                exercise("Romanian Deadlifts", 3, "10-12", "60s", None),
                exercise("Planks", 3, "60s hold", "45s", None),
            ],
        ),
        day(
            "Sunday",
            vec![exercise("Rest Day", 0, "0", "0s", Some("Complete rest"))],
        ),
    ];

    let diet_plan = DietPlan {
        breakfast: meal(
            "Breakfast",
            &["Oatmeal with berries", "2 whole eggs", "Greek yogurt", "Green tea"],
            "450",
            "30g",
        ),
        lunch: meal(
            "Lunch",
            &["Grilled chicken breast", "Brown rice", "Mixed vegetables", "Olive oil"],
            "600",
            "45g",
        ),
        dinner: meal(
            "Dinner",
            &["Salmon fillet", "Sweet potato", "Broccoli", "Quinoa"],
            "550",
            "40g",
        ),
        snacks: meal(
            "Snacks",
            &["Protein shake", "Almonds", "Apple", "Cottage cheese"],
            "300",
            "25g",
        ),
    };

    let tips = [
        "Stay hydrated - drink at least 8 glasses of water daily",
        "Get 7-9 hours of quality sleep each night for optimal recovery",
        "Maintain proper form over heavy weights to prevent injuries",
        "Track your progress weekly to stay motivated",
        "Include stretching and mobility work in your routine",
        "Listen to your body and take rest days when needed",
        "Meal prep on Sundays to stay consistent with your diet",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect();

    FitnessPlan {
        workout_plan,
        diet_plan,
        tips,
        motivation: demo_motivation(profile),
    }
}
