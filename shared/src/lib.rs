//! FitPlan Shared Library
//!
//! Domain types and the client-side logic of the plan generator: profile
//! form, persisted plan session, workout streak, voice narration, tab
//! rendering and print export. Used by the backend and the WASM bindings.

pub mod demo;
pub mod errors;
pub mod export;
pub mod form;
pub mod models;
pub mod narration;
pub mod render;
pub mod session;
pub mod storage;
pub mod streak;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;

pub use form::ProfileForm;
pub use narration::{NarrationController, NarrationState, SpeechEngine, Utterance};
pub use render::{ContentTab, TabView};
pub use session::{PlanSession, PlanView};
pub use storage::{KeyValueStore, MemoryStore};
pub use streak::{CalendarCell, StreakTracker};
