//! UI Components

mod cards;
mod cta;
mod footer;
mod hero;
mod media;
mod nav;

pub use cards::{FeatureCard, IconBadge, SectionHeading, StatCard};
pub use cta::CtaBanner;
pub use footer::{Footer, SiteFooter};
pub use hero::{PageHero, VideoHero};
pub use media::{AudioPlayer, VideoPlayer};
pub use nav::Nav;
