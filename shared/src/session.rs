//! Persisted plan session
//!
//! The profile and the plan generated from it are always written and read
//! together. If either is missing the results view has nothing to show and
//! the user is sent back to the creation flow.

use crate::errors::StorageError;
use crate::models::{FitnessPlan, UserProfile};
use crate::storage::{load_json, save_json, KeyValueStore, FITNESS_PLAN_KEY, USER_PROFILE_KEY};

/// Outcome of opening the results view
#[derive(Debug, Clone, PartialEq)]
pub enum PlanView {
    Ready {
        profile: UserProfile,
        plan: FitnessPlan,
    },
    RedirectToCreate,
}

impl PlanView {
    pub fn is_ready(&self) -> bool {
        matches!(self, PlanView::Ready { .. })
    }
}

/// Reads and writes the profile/plan pair
pub struct PlanSession<S> {
    store: S,
}

impl<S: KeyValueStore> PlanSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a freshly generated plan together with its profile
    pub fn save(&mut self, profile: &UserProfile, plan: &FitnessPlan) -> Result<(), StorageError> {
        save_json(&mut self.store, FITNESS_PLAN_KEY, plan)?;
        save_json(&mut self.store, USER_PROFILE_KEY, profile)
    }

    pub fn load(&self) -> PlanView {
        let plan: Option<FitnessPlan> = load_json(&self.store, FITNESS_PLAN_KEY);
        let profile: Option<UserProfile> = load_json(&self.store, USER_PROFILE_KEY);

        match (profile, plan) {
            (Some(profile), Some(plan)) => PlanView::Ready { profile, plan },
            _ => PlanView::RedirectToCreate,
        }
    }

    /// Drop the stored pair so the next visit starts a new plan
    pub fn clear(&mut self) {
        self.store.delete(FITNESS_PLAN_KEY);
        self.store.delete(USER_PROFILE_KEY);
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
