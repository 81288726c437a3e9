//! Fade Transition State Machine
//!
//! One state machine drives the fade-out / swap / fade-in sequence for
//! both page changes and locale toggles. It is advanced by accumulated
//! frame deltas rather than wall-clock timers, so the whole sequence can
//! be driven with simulated time in tests.
//!
//! # Sequencing
//!
//! ```text
//! Idle ──request──▶ FadingOut ──(400 ms)──▶ swap ──▶ FadingIn ──(400 ms)──▶ Idle
//! ```
//!
//! The content swap is reported strictly after the full fade-out
//! duration has elapsed and before any fade-in time is counted. While
//! the machine is not idle, every new request - page change or locale
//! toggle alike - is rejected; there is no queueing and no interruption
//! of an in-flight transition.

use std::time::Duration;

use crate::locale::Locale;
use crate::page::Page;

/// Fade-out duration before the content swap
pub const FADE_OUT_MS: u64 = 400;

/// Fade-in duration after the content swap
pub const FADE_IN_MS: u64 = 400;

/// Phase of the fade sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadePhase {
    /// No transition in flight
    #[default]
    Idle,
    /// Old content is fading out
    FadingOut,
    /// New content is fading in
    FadingIn,
}

/// What a transition is switching to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeRequest {
    /// Change the active page
    Page(Page),
    /// Flip to the given locale
    Locale(Locale),
}

/// Boundary crossed while advancing the fade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeEvent {
    /// The fade-out completed; apply the swap now
    Swap(FadeRequest),
    /// The fade-in completed; the machine is idle again
    Finished,
}

/// The fade state machine
///
/// Exactly one instance exists, owned by the [`Guide`](crate::guide::Guide).
#[derive(Debug, Default)]
pub struct Fade {
    phase: FadePhase,
    in_phase: Duration,
    pending: Option<FadeRequest>,
}

impl Fade {
    /// New machine, idle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Whether no transition is in flight
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == FadePhase::Idle
    }

    /// Ask for a transition
    ///
    /// The single entry point for both request kinds. Returns `false`
    /// (and changes nothing) while a transition is already in flight -
    /// the caller treats that as a no-op.
    pub fn request(&mut self, request: FadeRequest) -> bool {
        if !self.is_idle() {
            tracing::debug!(?request, "transition in flight, request dropped");
            return false;
        }

        self.phase = FadePhase::FadingOut;
        self.in_phase = Duration::ZERO;
        self.pending = Some(request);
        true
    }

    /// Advance by a frame delta, reporting every boundary crossed
    ///
    /// A large delta may cross both boundaries in one call; the swap is
    /// always reported before the finish.
    pub fn advance(&mut self, delta: Duration) -> Vec<FadeEvent> {
        let mut events = Vec::new();
        if self.phase == FadePhase::Idle {
            return events;
        }

        self.in_phase += delta;

        if self.phase == FadePhase::FadingOut {
            let fade_out = Duration::from_millis(FADE_OUT_MS);
            if self.in_phase < fade_out {
                return events;
            }
            // Carry overshoot into the fade-in so timing stays exact.
            self.in_phase -= fade_out;
            self.phase = FadePhase::FadingIn;
            if let Some(request) = self.pending.take() {
                events.push(FadeEvent::Swap(request));
            }
        }

        if self.phase == FadePhase::FadingIn && self.in_phase >= Duration::from_millis(FADE_IN_MS) {
            self.phase = FadePhase::Idle;
            self.in_phase = Duration::ZERO;
            events.push(FadeEvent::Finished);
        }

        events
    }

    /// Current visual weight of the content, in `[0, 1]`
    ///
    /// 1.0 when idle; eases to 0.0 across the fade-out and back to 1.0
    /// across the fade-in with a smoothstep curve.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let progress = |total_ms: u64| -> f32 {
            let total = Duration::from_millis(total_ms);
            (self.in_phase.as_secs_f32() / total.as_secs_f32()).min(1.0)
        };

        match self.phase {
            FadePhase::Idle => 1.0,
            FadePhase::FadingOut => 1.0 - smoothstep(progress(FADE_OUT_MS)),
            FadePhase::FadingIn => smoothstep(progress(FADE_IN_MS)),
        }
    }
}

/// Smooth ease-in-out: 3t^2 - 2t^3
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
