//! Voice narration of the active plan tab
//!
//! A small state machine over the platform's speech engine. Text is built
//! from whichever tab is active when playback starts; switching tabs later
//! does not retarget the utterance already in flight.
//!
//! ```text
//!            Play                Pause
//!   Idle ──────────▶ Playing ──────────▶ Paused
//!    ▲                 │  ▲                │
//!    │ Stop/End/Error  │  └──── Play ──────┘
//!    └─────────────────┴──────── Stop ─────┘
//! ```

use crate::models::FitnessPlan;
use crate::render::ContentTab;

/// Speech rate passed to the engine
pub const SPEECH_RATE: f32 = 0.9;
/// Speech pitch passed to the engine
pub const SPEECH_PITCH: f32 = 1.0;
/// Speech volume passed to the engine
pub const SPEECH_VOLUME: f32 = 1.0;

/// Identifier tying engine callbacks to the utterance that produced them
///
/// 32 bits so it crosses the wasm boundary as a plain JS number.
pub type UtteranceId = u32;

/// Text handed to the speech engine
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Platform speech synthesis
pub trait SpeechEngine {
    fn speak(&mut self, utterance: &Utterance);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Drop the current utterance; the engine is idle when this returns
    fn cancel(&mut self);
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrationState {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Build the narration text for a tab; `None` for tabs with nothing to read
pub fn narration_text(plan: &FitnessPlan, tab: ContentTab) -> Option<String> {
    match tab {
        ContentTab::Workout => Some(
            plan.workout_plan
                .iter()
                .map(|day| {
                    let exercises = day
                        .exercises
                        .iter()
                        .map(|ex| format!("{}, {} sets of {}", ex.name, ex.sets, ex.reps))
                        .collect::<Vec<_>>()
                        .join(". ");
                    format!("{}: {}", day.day, exercises)
                })
                .collect::<Vec<_>>()
                .join(". "),
        ),
        ContentTab::Diet => {
            let diet = &plan.diet_plan;
            Some(format!(
                "Breakfast: {}. Lunch: {}. Dinner: {}. Snacks: {}.",
                diet.breakfast.items.join(", "),
                diet.lunch.items.join(", "),
                diet.dinner.items.join(", "),
                diet.snacks.items.join(", ")
            ))
        }
        ContentTab::Tips => Some(format!(
            "Here are your lifestyle tips: {}",
            plan.tips.join(". ")
        )),
        ContentTab::Streak => None,
    }
}

/// Narration controller, one per plan view
#[derive(Debug)]
pub struct NarrationController<E> {
    engine: E,
    state: NarrationState,
    current: Option<UtteranceId>,
    next_id: UtteranceId,
}

impl<E: SpeechEngine> NarrationController<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: NarrationState::Idle,
            current: None,
            next_id: 1,
        }
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Id of the utterance currently owned by the controller
    pub fn current_utterance(&self) -> Option<UtteranceId> {
        self.current
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Start narrating `tab`, or resume if paused
    ///
    /// A no-op while the streak tab is active or while already playing.
    pub fn play(&mut self, plan: &FitnessPlan, tab: ContentTab) {
        if tab == ContentTab::Streak {
            return;
        }

        match self.state {
            NarrationState::Playing => {}
            NarrationState::Paused => {
                self.engine.resume();
                self.state = NarrationState::Playing;
            }
            NarrationState::Idle => {
                let Some(text) = narration_text(plan, tab) else {
                    return;
                };
                self.engine.cancel();

                let utterance = Utterance {
                    id: self.next_id,
                    text,
                    rate: SPEECH_RATE,
                    pitch: SPEECH_PITCH,
                    volume: SPEECH_VOLUME,
                };
                self.next_id = self.next_id.wrapping_add(1);

                self.engine.speak(&utterance);
                self.current = Some(utterance.id);
                self.state = NarrationState::Playing;
            }
        }
    }

    /// Suspend playback; only has effect while playing
    pub fn pause(&mut self) {
        if self.state == NarrationState::Playing {
            self.engine.pause();
            self.state = NarrationState::Paused;
        }
    }

    /// Cancel the engine unconditionally and return to idle
    pub fn stop(&mut self) {
        self.engine.cancel();
        self.current = None;
        self.state = NarrationState::Idle;
    }

    /// Stop, then play the active tab with freshly built text
    ///
    /// Only meaningful while playing or paused. `SpeechEngine::cancel` leaves
    /// the engine idle, so playback restarts immediately.
    pub fn restart(&mut self, plan: &FitnessPlan, tab: ContentTab) {
        if self.state == NarrationState::Idle {
            return;
        }
        self.stop();
        self.play(plan, tab);
    }

    /// Engine finished the utterance
    pub fn on_end(&mut self, id: UtteranceId) {
        self.finish(id);
    }

    /// Engine failed the utterance
    pub fn on_error(&mut self, id: UtteranceId) {
        self.finish(id);
    }

    fn finish(&mut self, id: UtteranceId) {
        // Cancelling fires end/error for the old utterance after a new one started.
        if self.current != Some(id) {
            return;
        }
        self.current = None;
        self.state = NarrationState::Idle;
    }
}
