//! Integration Tests for the Guide Mediator
//!
//! These drive the full core through the public surface only - events
//! in, accessors out, time simulated - the same way a UI surface does.
//!
//! # Test Coverage
//!
//! 1. **Transition flow**: page changes walk Idle → FadingOut →
//!    FadingIn → Idle and land on the requested page, persisted.
//! 2. **Serialized requests**: anything asked while a transition is in
//!    flight is a no-op, page change and language toggle alike.
//! 3. **Language toggle**: round trip restores the exact same render.
//! 4. **Intro lifecycle**: one shower of confetti per session, then the
//!    session flag keeps it from replaying.
//! 5. **First-visit walkthrough**: defaults, navigation, persistence,
//!    and re-rendering in the other language.

use std::time::Duration;

use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tempfile::TempDir;

use festejo_core::{
    render, strings, Fragment, Guide, GuideEvent, IntroPhase, Locale, Page, StateStore,
    FADE_IN_MS, FADE_OUT_MS, PARTICLE_COUNT,
};

/// A store rooted inside the temp dir, so nothing touches real XDG paths
fn store_in(dir: &TempDir) -> StateStore {
    StateStore::with_paths(
        dir.path().join("state.toml"),
        dir.path().join("intro-shown"),
    )
}

fn guide_in(dir: &TempDir) -> Guide {
    let mut rng = SmallRng::seed_from_u64(42);
    Guide::with_rng(store_in(dir), &mut rng)
}

/// Advance in 50 ms frames, the way an event loop would
fn run_for(guide: &mut Guide, total_ms: u64) {
    let mut remaining = total_ms;
    while remaining > 0 {
        let step = remaining.min(50);
        guide.advance(Duration::from_millis(step));
        remaining -= step;
    }
}

fn settle_transition(guide: &mut Guide) {
    run_for(guide, FADE_OUT_MS + FADE_IN_MS);
}

#[test]
fn page_change_fades_out_swaps_and_fades_in() {
    let dir = TempDir::new().unwrap();
    let mut guide = guide_in(&dir);
    assert!(!guide.is_transitioning());

    guide.handle(GuideEvent::Navigate(Page::Schedule));

    // Indicator moved immediately; the displayed page has not.
    assert!(guide.is_transitioning());
    assert_eq!(guide.active_nav(), Page::Schedule);
    assert_eq!(guide.page(), Page::Home);

    // Mid fade-out the old content is still up, dimmed.
    run_for(&mut guide, FADE_OUT_MS / 2);
    assert_eq!(guide.page(), Page::Home);
    assert!(guide.opacity() < 1.0);

    // Past the fade-out boundary the swap has happened.
    run_for(&mut guide, FADE_OUT_MS / 2);
    assert_eq!(guide.page(), Page::Schedule);

    run_for(&mut guide, FADE_IN_MS);
    assert!(!guide.is_transitioning());
    assert_eq!(guide.opacity(), 1.0);

    // Persisted at accept time, visible to a fresh store handle.
    assert_eq!(store_in(&dir).load().page, Page::Schedule);
}

#[test]
fn requests_during_a_transition_are_no_ops() {
    let dir = TempDir::new().unwrap();
    let mut guide = guide_in(&dir);

    guide.handle(GuideEvent::Navigate(Page::Travel));
    run_for(&mut guide, 100);

    // A competing page change and a language toggle both bounce off.
    guide.handle(GuideEvent::Navigate(Page::Activities));
    guide.handle(GuideEvent::ToggleLanguage);

    assert_eq!(guide.active_nav(), Page::Travel);
    settle_transition(&mut guide);

    assert_eq!(guide.page(), Page::Travel);
    assert_eq!(guide.locale(), Locale::English);
    let persisted = store_in(&dir).load();
    assert_eq!(persisted.page, Page::Travel);
    assert_eq!(persisted.locale, Locale::English);
}

#[test]
fn navigating_to_the_current_page_does_nothing() {
    let dir = TempDir::new().unwrap();
    let mut guide = guide_in(&dir);

    guide.handle(GuideEvent::Navigate(Page::Home));
    assert!(!guide.is_transitioning());
}

#[test]
fn language_round_trip_restores_the_same_render() {
    let dir = TempDir::new().unwrap();
    let mut guide = guide_in(&dir);
    let original = guide.body().clone();

    guide.handle(GuideEvent::ToggleLanguage);
    settle_transition(&mut guide);
    assert_eq!(guide.locale(), Locale::Spanish);
    assert_eq!(guide.body(), &render(Page::Home, strings(Locale::Spanish)));

    guide.handle(GuideEvent::ToggleLanguage);
    settle_transition(&mut guide);
    assert_eq!(guide.locale(), Locale::English);
    assert_eq!(guide.body(), &original);
}

#[test]
fn intro_plays_once_per_session() {
    let dir = TempDir::new().unwrap();
    let mut guide = guide_in(&dir);

    assert_eq!(guide.intro().particles().len(), PARTICLE_COUNT);
    run_for(&mut guide, 100);
    assert!(guide.intro().is_visible());

    // The overlay hides at 5 s and is gone entirely by 6 s.
    run_for(&mut guide, 5900);
    assert_eq!(guide.intro().phase(), IntroPhase::Finished);
    assert!(guide.intro().particles().is_empty());
    assert!(store_in(&dir).intro_shown());

    // A second launch in the same session stays quiet.
    let again = guide_in(&dir);
    assert_eq!(again.intro().phase(), IntroPhase::Finished);
    assert!(again.intro().particles().is_empty());
}

#[test]
fn first_visit_walkthrough() {
    let dir = TempDir::new().unwrap();
    let mut guide = guide_in(&dir);

    // No persisted values: English home page with the invitation hero.
    assert_eq!(guide.locale(), Locale::English);
    assert_eq!(guide.page(), Page::Home);
    let en = strings(Locale::English);
    let hero = &guide.body().blocks[0];
    assert!(hero.fragments.contains(&Fragment::Lead(en.invitation_line)));
    assert!(hero.fragments.contains(&Fragment::Title(en.event_title)));
    assert!(hero.fragments.contains(&Fragment::Text(en.venue)));

    // Navigate to the schedule.
    guide.handle(GuideEvent::Navigate(Page::Schedule));
    settle_transition(&mut guide);
    assert_eq!(store_in(&dir).load().page, Page::Schedule);
    let body = guide.body();
    assert_eq!(body.title, Some(en.schedule_title));
    assert_eq!(body.blocks.len(), 3);
    assert_eq!(body.blocks.last().unwrap().heading, Some(en.wear_heading));

    // Toggle the language: same page, other locale, page untouched.
    guide.handle(GuideEvent::ToggleLanguage);
    settle_transition(&mut guide);
    let es = strings(Locale::Spanish);
    assert_eq!(guide.page(), Page::Schedule);
    assert_eq!(guide.body(), &render(Page::Schedule, es));
    let persisted = store_in(&dir).load();
    assert_eq!(persisted.page, Page::Schedule);
    assert_eq!(persisted.locale, Locale::Spanish);
}

#[test]
fn unavailable_storage_degrades_silently() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut guide = Guide::with_rng(StateStore::disabled(), &mut rng);

    guide.handle(GuideEvent::Navigate(Page::Activities));
    settle_transition(&mut guide);
    assert_eq!(guide.page(), Page::Activities);

    guide.handle(GuideEvent::ToggleLanguage);
    settle_transition(&mut guide);
    assert_eq!(guide.locale(), Locale::Spanish);
}

#[test]
fn restored_session_starts_on_the_persisted_page() {
    let dir = TempDir::new().unwrap();
    {
        let mut guide = guide_in(&dir);
        guide.handle(GuideEvent::Navigate(Page::Travel));
        settle_transition(&mut guide);
        guide.handle(GuideEvent::ToggleLanguage);
        settle_transition(&mut guide);
    }

    let revisit = guide_in(&dir);
    assert_eq!(revisit.page(), Page::Travel);
    assert_eq!(revisit.active_nav(), Page::Travel);
    assert_eq!(revisit.locale(), Locale::Spanish);
    assert_eq!(
        revisit.body(),
        &render(Page::Travel, strings(Locale::Spanish))
    );
}
