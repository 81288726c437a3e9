//! Guide Mediator
//!
//! The single owner of all shared mutable state: current locale, current
//! page, the fade machine, the intro sequence, and the persistence
//! adapter. UI surfaces never touch that state directly - they hand user
//! actions to [`Guide::handle`], feed frame time to [`Guide::advance`],
//! and read the accessors when drawing. As long as both calls come from
//! one event-loop task, no further synchronization is needed anywhere.
//!
//! Because rendering goes through the cached [`PageBody`], the visible
//! content only ever changes at a fade boundary: the old page keeps
//! fading out even though the navigation indicator and the persisted
//! selection already point at the new one.

use std::time::Duration;

use chrono::NaiveDate;
use rand::Rng;

use crate::content::{ceremony_date, strings, Strings};
use crate::intro::{Intro, IntroEvent};
use crate::locale::Locale;
use crate::page::Page;
use crate::render::{render, PageBody};
use crate::store::StateStore;
use crate::transition::{Fade, FadeEvent, FadeRequest};

/// A user action forwarded by a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuideEvent {
    /// A navigation control for the given page was activated
    Navigate(Page),
    /// The language toggle was activated
    ToggleLanguage,
}

/// The application mediator
pub struct Guide {
    locale: Locale,
    page: Page,
    active_nav: Page,
    body: PageBody,
    fade: Fade,
    intro: Intro,
    store: StateStore,
}

impl Guide {
    /// Restore persisted state and start a new session
    ///
    /// Plays the intro unless this session already saw it.
    #[must_use]
    pub fn new(store: StateStore) -> Self {
        Self::with_rng(store, &mut rand::thread_rng())
    }

    /// Like [`Guide::new`] with explicit randomness (tests)
    pub fn with_rng<R: Rng + ?Sized>(store: StateStore, rng: &mut R) -> Self {
        let saved = store.load();
        let intro = if store.intro_shown() {
            Intro::already_shown()
        } else {
            Intro::begin(rng)
        };

        tracing::info!(
            locale = saved.locale.code(),
            page = saved.page.code(),
            intro = !intro.particles().is_empty(),
            "guide restored"
        );

        Self {
            locale: saved.locale,
            page: saved.page,
            active_nav: saved.page,
            body: render(saved.page, strings(saved.locale)),
            fade: Fade::new(),
            intro,
            store,
        }
    }

    /// Apply a user action
    ///
    /// All transition requests funnel through the fade machine's single
    /// guard: while one is in flight, page changes and language toggles
    /// alike are dropped. Returns whether the action was accepted, so
    /// surfaces can tie view-local resets (scroll position) to it.
    pub fn handle(&mut self, event: GuideEvent) -> bool {
        match event {
            GuideEvent::Navigate(page) => {
                if page == self.page && self.fade.is_idle() {
                    return false;
                }
                let accepted = self.fade.request(FadeRequest::Page(page));
                if accepted {
                    // Indicator and persistence update at accept time,
                    // not at transition completion.
                    self.active_nav = page;
                    self.store.save_page(page);
                }
                accepted
            }
            GuideEvent::ToggleLanguage => {
                let next = self.locale.toggled();
                let accepted = self.fade.request(FadeRequest::Locale(next));
                if accepted {
                    self.store.save_locale(next);
                }
                accepted
            }
        }
    }

    /// Advance animations by a frame delta
    pub fn advance(&mut self, delta: Duration) {
        for event in self.fade.advance(delta) {
            match event {
                FadeEvent::Swap(FadeRequest::Page(page)) => {
                    self.page = page;
                    self.refresh_body();
                }
                FadeEvent::Swap(FadeRequest::Locale(locale)) => {
                    self.locale = locale;
                    self.refresh_body();
                }
                FadeEvent::Finished => {}
            }
        }

        for event in self.intro.advance(delta) {
            match event {
                IntroEvent::Hidden => self.store.mark_intro_shown(),
                IntroEvent::Finished => {}
            }
        }
    }

    fn refresh_body(&mut self) {
        self.body = render(self.page, strings(self.locale));
    }

    /// Currently displayed locale
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Currently displayed page
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Page the navigation indicator points at
    ///
    /// Leads [`Guide::page`] by one fade-out while a change is in flight.
    #[must_use]
    pub fn active_nav(&self) -> Page {
        self.active_nav
    }

    /// Field record for the displayed locale
    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        strings(self.locale)
    }

    /// The rendered body of the displayed page
    #[must_use]
    pub fn body(&self) -> &PageBody {
        &self.body
    }

    /// Content opacity for fade dimming, in `[0, 1]`
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Whether a transition is in flight
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        !self.fade.is_idle()
    }

    /// The intro sequence (inert after its first run)
    #[must_use]
    pub fn intro(&self) -> &Intro {
        &self.intro
    }
}

/// Days from `today` until the commencement ceremony
///
/// Negative once the date has passed; surfaces only show the countdown
/// while it is positive.
#[must_use]
pub fn days_until_ceremony(today: NaiveDate) -> Option<i64> {
    ceremony_date().map(|ceremony| (ceremony - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn countdown_counts_down() {
        let week_before = NaiveDate::from_ymd_opt(2026, 5, 9).unwrap();
        assert_eq!(days_until_ceremony(week_before), Some(7));

        let after = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert!(days_until_ceremony(after).unwrap() < 0);
    }
}
