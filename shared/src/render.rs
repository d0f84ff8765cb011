//! Plan renderer view models
//!
//! The results page shows a motivation banner above four tabs. These types
//! describe what each tab displays, independent of the markup used to draw
//! it; the print exporter and the browser bindings both read from here.

use crate::models::{FitnessPlan, MealSlot};
use serde::Serialize;
use std::fmt;

/// Tabs of the plan view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTab {
    #[default]
    Workout,
    Diet,
    Tips,
    Streak,
}

impl ContentTab {
    pub const ALL: [ContentTab; 4] = [
        ContentTab::Workout,
        ContentTab::Diet,
        ContentTab::Tips,
        ContentTab::Streak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTab::Workout => "workout",
            ContentTab::Diet => "diet",
            ContentTab::Tips => "tips",
            ContentTab::Streak => "streak",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContentTab::Workout => "Workout",
            ContentTab::Diet => "Diet",
            ContentTab::Tips => "Tips",
            ContentTab::Streak => "Streak",
        }
    }

    /// Whether the narration controls are shown on this tab
    pub fn is_narratable(&self) -> bool {
        !matches!(self, ContentTab::Streak)
    }
}

impl fmt::Display for ContentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "workout" => Ok(ContentTab::Workout),
            "diet" => Ok(ContentTab::Diet),
            "tips" => Ok(ContentTab::Tips),
            "streak" => Ok(ContentTab::Streak),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

/// One exercise row of a workout day card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRow {
    pub name: String,
    /// `"{sets} sets × {reps} reps | Rest: {rest}"`
    pub prescription: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCard {
    pub day: String,
    pub exercises: Vec<ExerciseRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCard {
    pub slot: &'static str,
    pub title: &'static str,
    pub name: String,
    pub items: Vec<String>,
    /// `"{calories} | {protein}"` when calories are known
    pub nutrition: Option<String>,
}

/// Content of a single tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", content = "content", rename_all = "lowercase")]
pub enum TabView {
    Workout(Vec<DayCard>),
    Diet(Vec<MealCard>),
    /// Tips numbered from 1
    Tips(Vec<(usize, String)>),
    /// Drawn from the streak tracker, not the plan
    Streak,
}

/// Prescription line for an exercise
pub fn prescription(sets: u32, reps: &str, rest_time: &str) -> String {
    format!("{} sets × {} reps | Rest: {}", sets, reps, rest_time)
}

/// Nutrition line for a meal, shown only when calories are present
pub fn nutrition_line(calories: Option<&str>, protein: Option<&str>) -> Option<String> {
    calories.map(|c| format!("{} | {}", c, protein.unwrap_or("")))
}

pub fn render_tab(plan: &FitnessPlan, tab: ContentTab) -> TabView {
    match tab {
        ContentTab::Workout => TabView::Workout(
            plan.workout_plan
                .iter()
                .map(|day| DayCard {
                    day: day.day.clone(),
                    exercises: day
                        .exercises
                        .iter()
                        .map(|ex| ExerciseRow {
                            name: ex.name.clone(),
                            prescription: prescription(ex.sets, &ex.reps, &ex.rest_time),
                            notes: ex.notes.clone(),
                        })
                        .collect(),
                })
                .collect(),
        ),
        ContentTab::Diet => TabView::Diet(
            plan.diet_plan
                .meals()
                .map(|(slot, meal)| MealCard {
                    slot: slot.key(),
                    title: slot.title(),
                    name: meal.name.clone(),
                    items: meal.items.clone(),
                    nutrition: nutrition_line(meal.calories.as_deref(), meal.protein.as_deref()),
                })
                .collect(),
        ),
        ContentTab::Tips => TabView::Tips(
            plan.tips
                .iter()
                .enumerate()
                .map(|(i, tip)| (i + 1, tip.clone()))
                .collect(),
        ),
        ContentTab::Streak => TabView::Streak,
    }
}

/// Uppercase slot label used in printed output
pub fn slot_heading(slot: MealSlot) -> String {
    slot.key().to_uppercase()
}
