//! One-Shot Intro Animation
//!
//! A self-terminating decorative sequence shown on the first launch of a
//! session: a centered banner plus a shower of confetti particles, each
//! with its own randomized start position, fall duration, and start
//! delay. Independent of the fade machine, and like it, advanced by
//! simulated time.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted ──▶ Running ──(5000 ms)──▶ Hiding ──(1000 ms)──▶ Finished
//! ```
//!
//! Crossing into `Hiding` reports [`IntroEvent::Hidden`]; the owner marks
//! the session flag there so the sequence never replays within the
//! session. Once started the sequence always runs to completion - there
//! is no cancellation.

use std::time::Duration;

use rand::Rng;

/// Number of confetti particles
pub const PARTICLE_COUNT: usize = 50;

/// How long the overlay stays visible
pub const INTRO_VISIBLE_MS: u64 = 5000;

/// Pause between hiding the overlay and dropping it entirely
pub const INTRO_LINGER_MS: u64 = 1000;

/// Shortest particle fall, in seconds
pub const FALL_SECS_MIN: f32 = 2.0;

/// Longest particle fall, in seconds (exclusive)
pub const FALL_SECS_MAX: f32 = 5.0;

/// Largest particle start delay, in seconds (exclusive)
pub const DELAY_SECS_MAX: f32 = 2.0;

/// One confetti particle
///
/// Positions are fractional: `x` spans the viewport width and fall
/// progress spans a little more than its height, so a particle starts
/// above the visible area and leaves below it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of viewport width, in `[0, 1)`
    pub x: f32,
    /// Total fall duration in seconds, in `[2, 5)`
    pub fall_secs: f32,
    /// Delay before the fall starts, in seconds, in `[0, 2)`
    pub delay_secs: f32,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            fall_secs: rng.gen_range(FALL_SECS_MIN..FALL_SECS_MAX),
            delay_secs: rng.gen_range(0.0..DELAY_SECS_MAX),
        }
    }

    /// Fall progress at `elapsed` time since the intro started
    ///
    /// `None` while the particle is still waiting on its start delay;
    /// otherwise `[0, 1]`, where 0 is just above the viewport and 1 is
    /// fully fallen past the bottom.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> Option<f32> {
        let falling_for = elapsed.as_secs_f32() - self.delay_secs;
        if falling_for < 0.0 {
            return None;
        }
        Some((falling_for / self.fall_secs).min(1.0))
    }
}

/// Phase of the intro sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    /// Built but not yet advanced
    NotStarted,
    /// Overlay visible, confetti falling
    Running,
    /// Overlay hidden, sequence not yet dropped
    Hiding,
    /// Sequence over; nothing renders
    Finished,
}

/// Boundary crossed while advancing the intro
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    /// The overlay just became hidden; mark the session flag
    Hidden,
    /// The sequence is completely done
    Finished,
}

/// The intro animation state machine
#[derive(Debug)]
pub struct Intro {
    phase: IntroPhase,
    elapsed: Duration,
    particles: Vec<Particle>,
}

impl Intro {
    /// Build a fresh sequence with randomized confetti
    pub fn begin<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect();
        Self {
            phase: IntroPhase::NotStarted,
            elapsed: Duration::ZERO,
            particles,
        }
    }

    /// An inert sequence for sessions that already saw the intro
    ///
    /// Creates no particles and never reports events.
    #[must_use]
    pub fn already_shown() -> Self {
        Self {
            phase: IntroPhase::Finished,
            elapsed: Duration::ZERO,
            particles: Vec::new(),
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Whether the overlay should be drawn
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, IntroPhase::Running)
    }

    /// Time since the sequence started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The confetti particles (empty once finished or when inert)
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance by a frame delta, reporting every boundary crossed
    pub fn advance(&mut self, delta: Duration) -> Vec<IntroEvent> {
        let mut events = Vec::new();
        if self.phase == IntroPhase::Finished {
            return events;
        }

        if self.phase == IntroPhase::NotStarted {
            self.phase = IntroPhase::Running;
        }

        self.elapsed += delta;

        if self.phase == IntroPhase::Running
            && self.elapsed >= Duration::from_millis(INTRO_VISIBLE_MS)
        {
            self.phase = IntroPhase::Hiding;
            events.push(IntroEvent::Hidden);
        }

        if self.phase == IntroPhase::Hiding
            && self.elapsed >= Duration::from_millis(INTRO_VISIBLE_MS + INTRO_LINGER_MS)
        {
            self.phase = IntroPhase::Finished;
            self.particles.clear();
            events.push(IntroEvent::Finished);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn builds_fifty_particles_within_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let intro = Intro::begin(&mut rng);

        assert_eq!(intro.particles().len(), PARTICLE_COUNT);
        for particle in intro.particles() {
            assert!((0.0..1.0).contains(&particle.x));
            assert!((FALL_SECS_MIN..FALL_SECS_MAX).contains(&particle.fall_secs));
            assert!((0.0..DELAY_SECS_MAX).contains(&particle.delay_secs));
        }
    }

    #[test]
    fn particles_are_independently_randomized() {
        let mut rng = SmallRng::seed_from_u64(7);
        let intro = Intro::begin(&mut rng);
        let first = &intro.particles()[0];
        assert!(intro.particles().iter().any(|p| p.x != first.x));
        assert!(intro.particles().iter().any(|p| p.fall_secs != first.fall_secs));
    }

    #[test]
    fn runs_then_hides_then_finishes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut intro = Intro::begin(&mut rng);
        assert_eq!(intro.phase(), IntroPhase::NotStarted);

        assert_eq!(intro.advance(ms(100)), vec![]);
        assert_eq!(intro.phase(), IntroPhase::Running);
        assert!(intro.is_visible());

        assert_eq!(intro.advance(ms(4900)), vec![IntroEvent::Hidden]);
        assert_eq!(intro.phase(), IntroPhase::Hiding);
        assert!(!intro.is_visible());

        assert_eq!(intro.advance(ms(999)), vec![]);
        assert_eq!(intro.advance(ms(1)), vec![IntroEvent::Finished]);
        assert_eq!(intro.phase(), IntroPhase::Finished);
        assert!(intro.particles().is_empty());

        // Further time is ignored.
        assert_eq!(intro.advance(ms(10_000)), vec![]);
    }

    #[test]
    fn a_single_huge_delta_reports_both_boundaries() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut intro = Intro::begin(&mut rng);
        assert_eq!(
            intro.advance(ms(6000)),
            vec![IntroEvent::Hidden, IntroEvent::Finished]
        );
    }

    #[test]
    fn already_shown_sequence_is_inert() {
        let mut intro = Intro::already_shown();
        assert_eq!(intro.phase(), IntroPhase::Finished);
        assert!(intro.particles().is_empty());
        assert!(!intro.is_visible());
        assert_eq!(intro.advance(ms(6000)), vec![]);
    }

    #[test]
    fn particle_progress_respects_its_delay() {
        let particle = Particle {
            x: 0.5,
            fall_secs: 2.0,
            delay_secs: 1.0,
        };
        assert_eq!(particle.progress(ms(500)), None);
        assert_eq!(particle.progress(ms(1000)), Some(0.0));
        assert_eq!(particle.progress(ms(2000)), Some(0.5));
        assert_eq!(particle.progress(ms(3000)), Some(1.0));
        // Clamped after landing.
        assert_eq!(particle.progress(ms(9000)), Some(1.0));
    }
}
