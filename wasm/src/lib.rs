//! FitPlan WASM Module
//!
//! Browser bindings for the client-side pieces of the plan view: the
//! persisted plan session, the workout streak, tab rendering, print export
//! and voice narration. Storage is the page's `localStorage`; speech is
//! delegated to `window.speechSynthesis` through commands returned to JS.
//!
//! Dates cross the boundary as `yyyy-mm-dd` strings in the user's local
//! time zone, computed on the JS side.

use fitplan_shared::errors::StorageError;
use fitplan_shared::export::{export_plan, render_print_document, PrintWindow};
use fitplan_shared::form::ProfileForm;
use fitplan_shared::models::{FitnessPlan, UserProfile};
use fitplan_shared::narration::{NarrationController, SpeechEngine, Utterance, UtteranceId};
use fitplan_shared::render::{render_tab, ContentTab};
use fitplan_shared::session::{PlanSession, PlanView};
use fitplan_shared::storage::KeyValueStore;
use fitplan_shared::streak::{parse_date, streak_label, StreakTracker, WEEKDAY_LABELS};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

// ============================================================================
// localStorage
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = localStorage, js_name = getItem)]
    fn storage_get_item(key: &str) -> Option<String>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
    fn storage_set_item(key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = localStorage, js_name = removeItem)]
    fn storage_remove_item(key: &str);
}

/// The page's `localStorage`
struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage_get_item(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem only throws when the quota is exhausted
        storage_set_item(key, value).map_err(|_| StorageError::QuotaExceeded(key.to_string()))
    }

    fn delete(&mut self, key: &str) {
        storage_remove_item(key);
    }
}

// ============================================================================
// Print window
// ============================================================================

#[wasm_bindgen]
extern "C" {
    type OpenedWindow;
    type OpenedDocument;

    #[wasm_bindgen(catch, js_namespace = window, js_name = open)]
    fn window_open(url: &str, target: &str) -> Result<Option<OpenedWindow>, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn document(this: &OpenedWindow) -> OpenedDocument;

    #[wasm_bindgen(method)]
    fn write(this: &OpenedDocument, html: &str);

    #[wasm_bindgen(method)]
    fn close(this: &OpenedDocument);
}

/// A blank tab from `window.open`
struct BrowserPrintWindow {
    document: OpenedDocument,
}

impl BrowserPrintWindow {
    /// `None` when a popup blocker refuses the window
    fn open() -> Option<Self> {
        let window = window_open("", "_blank").ok().flatten()?;
        Some(Self {
            document: window.document(),
        })
    }
}

impl PrintWindow for BrowserPrintWindow {
    fn write(&mut self, html: &str) {
        self.document.write(html);
    }

    fn close(&mut self) {
        self.document.close();
    }
}

fn js_error(message: impl std::fmt::Display) -> JsError {
    JsError::new(&message.to_string())
}

// ============================================================================
// Plan session and profile form
// ============================================================================

/// Validate raw form fields (`{"name": "...", "age": "25", ...}`)
///
/// Returns `{"ok": true, "profile": {...}}` or `{"ok": false, "errors": [...]}`.
#[wasm_bindgen]
pub fn submit_profile(fields_json: &str) -> Result<String, JsError> {
    submit_profile_fields(fields_json).map_err(js_error)
}

fn submit_profile_fields(fields_json: &str) -> Result<String, String> {
    let fields: BTreeMap<String, String> =
        serde_json::from_str(fields_json).map_err(|e| e.to_string())?;

    let mut form = ProfileForm::default();
    let mut errors = Vec::new();
    for (field, value) in &fields {
        if let Err(e) = form.set_field(field, value) {
            errors.push(e.user_message());
        }
    }

    let result = match (errors.is_empty(), form.submit()) {
        (true, Ok(profile)) => serde_json::json!({ "ok": true, "profile": profile }),
        (_, submitted) => {
            if let Err(invalid) = submitted {
                errors.extend(invalid.iter().map(|e| e.user_message()));
            }
            serde_json::json!({ "ok": false, "errors": errors })
        }
    };
    Ok(result.to_string())
}

/// Persist a generated plan with the profile it was generated for
#[wasm_bindgen]
pub fn save_plan(profile_json: &str, plan_json: &str) -> Result<(), JsError> {
    let mut session = PlanSession::new(LocalStorage);
    save_plan_in(&mut session, profile_json, plan_json).map_err(js_error)
}

fn save_plan_in<S: KeyValueStore>(
    session: &mut PlanSession<S>,
    profile_json: &str,
    plan_json: &str,
) -> Result<(), String> {
    let profile: UserProfile = serde_json::from_str(profile_json).map_err(|e| e.to_string())?;
    let plan: FitnessPlan = serde_json::from_str(plan_json).map_err(|e| e.to_string())?;
    session.save(&profile, &plan).map_err(|e| e.to_string())
}

/// Open the results view
///
/// `{"status": "ready", "profile": {...}, "plan": {...}}`, or
/// `{"status": "redirect"}` when the creation flow must run first.
#[wasm_bindgen]
pub fn load_plan_view() -> String {
    plan_view_json(&PlanSession::new(LocalStorage))
}

fn plan_view_json<S: KeyValueStore>(session: &PlanSession<S>) -> String {
    match session.load() {
        PlanView::Ready { profile, plan } => {
            serde_json::json!({ "status": "ready", "profile": profile, "plan": plan })
        }
        PlanView::RedirectToCreate => serde_json::json!({ "status": "redirect" }),
    }
    .to_string()
}

/// Forget the stored plan; the next visit starts over
#[wasm_bindgen]
pub fn clear_plan() {
    PlanSession::new(LocalStorage).clear();
}

// ============================================================================
// Rendering and export
// ============================================================================

/// View model for one tab of the plan view
#[wasm_bindgen]
pub fn render_tab_view(plan_json: &str, tab: &str) -> Result<String, JsError> {
    tab_view_json(plan_json, tab).map_err(js_error)
}

fn tab_view_json(plan_json: &str, tab: &str) -> Result<String, String> {
    let plan: FitnessPlan = serde_json::from_str(plan_json).map_err(|e| e.to_string())?;
    let tab: ContentTab = tab.parse()?;
    serde_json::to_string(&render_tab(&plan, tab)).map_err(|e| e.to_string())
}

/// Open the plan in a new tab and print it
///
/// Returns `false`, and does nothing else, when the tab cannot be opened.
#[wasm_bindgen]
pub fn export_to_print(plan_json: &str, profile_json: &str) -> Result<bool, JsError> {
    let plan: FitnessPlan = serde_json::from_str(plan_json).map_err(js_error)?;
    let profile: UserProfile = serde_json::from_str(profile_json).map_err(js_error)?;
    Ok(export_plan(&plan, &profile, BrowserPrintWindow::open))
}

/// Standalone printable HTML for the plan
#[wasm_bindgen]
pub fn print_document(plan_json: &str, profile_json: &str) -> Result<String, JsError> {
    let plan: FitnessPlan = serde_json::from_str(plan_json).map_err(js_error)?;
    let profile: UserProfile = serde_json::from_str(profile_json).map_err(js_error)?;
    Ok(render_print_document(&plan, &profile))
}

// ============================================================================
// Workout streak
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StreakSnapshot<'a> {
    streak: u32,
    label: String,
    weekdays: [&'static str; 7],
    calendar: &'a [fitplan_shared::streak::CalendarCell],
}

fn parse_today(today: &str) -> Result<NaiveDate, String> {
    parse_date(today).ok_or_else(|| format!("Invalid date: {}", today))
}

fn snapshot_json<S: KeyValueStore>(tracker: &StreakTracker<S>, today: NaiveDate) -> String {
    let streak = tracker.streak(today);
    let calendar = tracker.calendar(today);
    let snapshot = StreakSnapshot {
        streak,
        label: streak_label(streak),
        weekdays: WEEKDAY_LABELS,
        calendar: &calendar,
    };
    serde_json::to_string(&snapshot).unwrap_or_default()
}

/// Streak count, label and the 42-day calendar ending `today`
#[wasm_bindgen]
pub fn streak_snapshot(today: &str) -> Result<String, JsError> {
    let today = parse_today(today).map_err(js_error)?;
    Ok(snapshot_json(&StreakTracker::load(LocalStorage), today))
}

/// Mark or unmark a calendar day, then return the new snapshot
#[wasm_bindgen]
pub fn toggle_workout_day(date: &str, today: &str) -> Result<String, JsError> {
    let mut tracker = StreakTracker::load(LocalStorage);
    toggle_in(&mut tracker, date, today).map_err(js_error)
}

fn toggle_in<S: KeyValueStore>(
    tracker: &mut StreakTracker<S>,
    date: &str,
    today: &str,
) -> Result<String, String> {
    let today = parse_today(today)?;
    tracker.toggle_iso(date, today).map_err(|e| e.to_string())?;
    Ok(snapshot_json(tracker, today))
}

// ============================================================================
// Narration
// ============================================================================

/// Instruction for `window.speechSynthesis`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum SpeechCommand {
    Speak {
        id: UtteranceId,
        text: String,
        rate: f32,
        pitch: f32,
        volume: f32,
    },
    Pause,
    Resume,
    Cancel,
}

/// Speech engine that queues commands for the JS side to run
#[derive(Debug, Default)]
struct CommandQueue {
    commands: Vec<SpeechCommand>,
}

impl SpeechEngine for CommandQueue {
    fn speak(&mut self, utterance: &Utterance) {
        self.commands.push(SpeechCommand::Speak {
            id: utterance.id,
            text: utterance.text.clone(),
            rate: utterance.rate,
            pitch: utterance.pitch,
            volume: utterance.volume,
        });
    }

    fn pause(&mut self) {
        self.commands.push(SpeechCommand::Pause);
    }

    fn resume(&mut self) {
        self.commands.push(SpeechCommand::Resume);
    }

    fn cancel(&mut self) {
        self.commands.push(SpeechCommand::Cancel);
    }
}

/// Narration for one plan view
///
/// Every method returns the speech commands to run, as a JSON array.
/// Utterance end and error events must be reported back with the id from the
/// `speak` command. The JS side should call `stop` when the view unmounts.
#[wasm_bindgen]
pub struct Narrator {
    plan: FitnessPlan,
    controller: NarrationController<CommandQueue>,
}

#[wasm_bindgen]
impl Narrator {
    #[wasm_bindgen(constructor)]
    pub fn new(plan_json: &str) -> Result<Narrator, JsError> {
        let plan: FitnessPlan = serde_json::from_str(plan_json).map_err(js_error)?;
        Ok(Self::for_plan(plan))
    }

    pub fn play(&mut self, tab: &str) -> Result<String, JsError> {
        let tab: ContentTab = tab.parse().map_err(js_error)?;
        self.controller.play(&self.plan, tab);
        Ok(self.drain())
    }

    pub fn pause(&mut self) -> String {
        self.controller.pause();
        self.drain()
    }

    pub fn stop(&mut self) -> String {
        self.controller.stop();
        self.drain()
    }

    pub fn restart(&mut self, tab: &str) -> Result<String, JsError> {
        let tab: ContentTab = tab.parse().map_err(js_error)?;
        self.controller.restart(&self.plan, tab);
        Ok(self.drain())
    }

    #[wasm_bindgen(js_name = onEnd)]
    pub fn on_end(&mut self, id: UtteranceId) {
        self.controller.on_end(id);
    }

    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, id: UtteranceId) {
        self.controller.on_error(id);
    }

    /// `idle`, `playing` or `paused`
    pub fn state(&self) -> String {
        format!("{:?}", self.controller.state()).to_lowercase()
    }
}

impl Narrator {
    fn for_plan(plan: FitnessPlan) -> Self {
        Self {
            plan,
            controller: NarrationController::new(CommandQueue::default()),
        }
    }

    fn drain(&mut self) -> String {
        let commands = std::mem::take(&mut self.controller.engine_mut().commands);
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }
}
