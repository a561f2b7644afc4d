//! # site-core
//!
//! Framework-free behaviour and content of the C&G Corp marketing site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        site-web (Leptos)                     │
//! │   scroll / click / timer events ──▶ signals ──▶ view!        │
//! └──────────────┬───────────────────────────────────────────────┘
//!                │ plain function calls
//! ┌──────────────▼───────────────────────────────────────────────┐
//! │                          site-core                            │
//! │  ┌─────────┐ ┌──────────┐ ┌───────────┐ ┌───────┐ ┌────────┐ │
//! │  │  route  │ │   nav    │ │ parallax  │ │contact│ │ media  │ │
//! │  │ Sitemap │ │ NavState │ │ LinearMap │ │ Form  │ │Playback│ │
//! │  └─────────┘ └──────────┘ └───────────┘ └───────┘ └────────┘ │
//! │                    content  ·  assets                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here touches the DOM, so every rule the pages rely on is
//! testable with `cargo test` on the host.

pub mod assets;
pub mod contact;
pub mod content;
pub mod error;
pub mod media;
pub mod nav;
pub mod parallax;
pub mod route;

pub use contact::{
    ContactForm, ContactFormMachine, ContactSubmission, Field, FormPhase, Interest,
    SubmissionSink, TracingSink, RESET_DELAY,
};
pub use error::{Result, SiteError};
pub use media::{format_timestamp, IntroPhase, IntroSequence, Playback, INTRO_DURATION};
pub use nav::{NavConfig, NavLink, NavState, NavVariant, SCROLL_THRESHOLD};
pub use parallax::{stagger_delay, HeroFrame, HeroParallax, LinearMap};
pub use route::{Route, Sitemap};
