//! festejo Core - Headless Bilingual Event Guide
//!
//! This crate holds everything the festejo guide knows and does,
//! completely independent of any UI framework: the bilingual content
//! tables, the page renderer, the fade and intro state machines, the
//! persistence adapter, and the [`Guide`] mediator that owns the state.
//! It can drive a TUI, a GUI, or run headless in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     UI Surface                        │
//! │          GuideEvent (down)    accessors (up)          │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────┐
//! │                       Guide                           │
//! │  ┌─────────┐ ┌──────────┐ ┌────────┐ ┌────────────┐  │
//! │  │ Content │ │   Fade   │ │ Intro  │ │ StateStore │  │
//! │  │ + Render│ │ machine  │ │ machine│ │ (TOML/XDG) │  │
//! │  └─────────┘ └──────────┘ └────────┘ └────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`locale`]: the two supported languages
//! - [`page`]: the four navigable sections
//! - [`content`]: per-locale string tables with compile-time key parity
//! - [`render`]: pure page → document-model renderer
//! - [`transition`]: the fade-out / swap / fade-in state machine
//! - [`intro`]: the one-shot confetti sequence
//! - [`store`]: best-effort persisted state (durable + session scopes)
//! - [`guide`]: the single-owner mediator surfaces talk to
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any
//! other UI framework. Both state machines advance on caller-supplied
//! frame deltas, so every sequence is testable with simulated time.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod content;
pub mod guide;
pub mod intro;
pub mod locale;
pub mod page;
pub mod render;
pub mod store;
pub mod transition;

// Re-exports for convenience
pub use content::{ceremony_date, strings, Strings};
pub use guide::{days_until_ceremony, Guide, GuideEvent};
pub use intro::{Intro, IntroEvent, IntroPhase, Particle, PARTICLE_COUNT};
pub use locale::Locale;
pub use page::Page;
pub use render::{render, ContentBlock, Fragment, PageBody};
pub use store::{SavedState, StateStore, StoreError};
pub use transition::{Fade, FadeEvent, FadePhase, FadeRequest, FADE_IN_MS, FADE_OUT_MS};
