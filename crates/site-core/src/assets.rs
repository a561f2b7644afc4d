//! Static Asset URIs
//!
//! Paths under the bundle's `assets/` directory. The site treats them as
//! opaque strings.

pub const LOGO: &str = "/assets/images/logo-cg-corp.jpg";
pub const LOGO_NAV: &str = "/assets/images/logo-nav.png";
pub const HERO_ABSTRACT: &str = "/assets/images/abstract-rose-gold-ribbon.png";
pub const CALL_CENTER: &str = "/assets/images/call-center-ai.png";
pub const TEAM: &str = "/assets/images/corporate-team.png";

pub const INTRO_VIDEO: &str = "/assets/video/intro.mp4";
pub const LOOP_VIDEO: &str = "/assets/video/loop.mp4";
pub const PLATFORM_DEMO_VIDEO: &str = "/assets/video/platform-demo.mp4";
pub const PLATFORM_DEMO_POSTER: &str = "/assets/images/platform-demo-poster.png";

pub const AGENT_DEMO_AUDIO: &str = "/assets/audio/voice-agent-demo.mp3";

pub const DATA_PROTECTION_PDF: &str = "/assets/regulations/si-pol-3-data-protection.pdf";
pub const GLOBAL_SECURITY_PDF: &str = "/assets/regulations/si-pol-2-global-information-security.pdf";
pub const EQUITY_PDF: &str = "/assets/regulations/si-pol-4-equity-diversity-inclusion.pdf";
