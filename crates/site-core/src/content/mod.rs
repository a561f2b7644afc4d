//! Page Content
//!
//! Display records and the literal content of every page. Everything here
//! is `'static` and immutable for the life of the page.

pub mod about;
pub mod ai_agent;
pub mod contact;
pub mod home;
pub mod industries;
pub mod regulations;
pub mod solutions;

use serde::Serialize;

use crate::nav::NavLink;

/// Named icon, rendered as a CSS class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    BarChart,
    Bot,
    Brain,
    Building,
    CheckCircle,
    ChevronRight,
    Clock,
    Close,
    Cloud,
    Cpu,
    Download,
    Facebook,
    Globe,
    GraduationCap,
    Headphones,
    Heart,
    House,
    Landmark,
    Lightbulb,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Mic,
    Mouse,
    Pause,
    Phone,
    Plane,
    Play,
    Rocket,
    Send,
    Shield,
    ShieldCheck,
    ShoppingCart,
    Smartphone,
    Sparkles,
    Target,
    TrendingUp,
    Twitter,
    Users,
    Zap,
}

impl Icon {
    /// CSS class list for an `<i>` element
    pub const fn class(self) -> &'static str {
        match self {
            Self::ArrowRight => "icon icon-arrow-right",
            Self::BarChart => "icon icon-bar-chart",
            Self::Bot => "icon icon-bot",
            Self::Brain => "icon icon-brain",
            Self::Building => "icon icon-building",
            Self::CheckCircle => "icon icon-check-circle",
            Self::ChevronRight => "icon icon-chevron-right",
            Self::Clock => "icon icon-clock",
            Self::Close => "icon icon-close",
            Self::Cloud => "icon icon-cloud",
            Self::Cpu => "icon icon-cpu",
            Self::Download => "icon icon-download",
            Self::Facebook => "icon icon-facebook",
            Self::Globe => "icon icon-globe",
            Self::GraduationCap => "icon icon-graduation-cap",
            Self::Headphones => "icon icon-headphones",
            Self::Heart => "icon icon-heart",
            Self::House => "icon icon-house",
            Self::Landmark => "icon icon-landmark",
            Self::Lightbulb => "icon icon-lightbulb",
            Self::Linkedin => "icon icon-linkedin",
            Self::Mail => "icon icon-mail",
            Self::MapPin => "icon icon-map-pin",
            Self::Menu => "icon icon-menu",
            Self::MessageSquare => "icon icon-message-square",
            Self::Mic => "icon icon-mic",
            Self::Mouse => "icon icon-mouse",
            Self::Pause => "icon icon-pause",
            Self::Phone => "icon icon-phone",
            Self::Plane => "icon icon-plane",
            Self::Play => "icon icon-play",
            Self::Rocket => "icon icon-rocket",
            Self::Send => "icon icon-send",
            Self::Shield => "icon icon-shield",
            Self::ShieldCheck => "icon icon-shield-check",
            Self::ShoppingCart => "icon icon-shopping-cart",
            Self::Smartphone => "icon icon-smartphone",
            Self::Sparkles => "icon icon-sparkles",
            Self::Target => "icon icon-target",
            Self::TrendingUp => "icon icon-trending-up",
            Self::Twitter => "icon icon-twitter",
            Self::Users => "icon icon-users",
            Self::Zap => "icon icon-zap",
        }
    }
}

/// Colour theme of a card, mapped to a CSS modifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    Primary,
    Blue,
    Purple,
    Green,
    Orange,
    Indigo,
    Pink,
    Teal,
    Cyan,
    Amber,
    Red,
    Slate,
}

impl Accent {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "accent-primary",
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
            Self::Green => "accent-green",
            Self::Orange => "accent-orange",
            Self::Indigo => "accent-indigo",
            Self::Pink => "accent-pink",
            Self::Teal => "accent-teal",
            Self::Cyan => "accent-cyan",
            Self::Amber => "accent-amber",
            Self::Red => "accent-red",
            Self::Slate => "accent-slate",
        }
    }
}

/// Icon + heading + short description
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline number with a caption
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub icon: Option<Icon>,
    pub value: &'static str,
    pub label: &'static str,
    pub detail: Option<&'static str>,
}

/// Hero block text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    pub badge: &'static str,
    /// Headline lines, rendered with a line break between them
    pub title: &'static [&'static str],
    pub lead: &'static str,
}

/// Closing call-to-action block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub lead: &'static str,
    pub button: &'static str,
    pub href: &'static str,
}

/// Column of links in the site footer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

/// Copyright line shared by every footer
pub const COPYRIGHT: &str = "© 2025 C&G Corp. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classes_are_prefixed() {
        for icon in [Icon::Phone, Icon::ShieldCheck, Icon::GraduationCap] {
            assert!(icon.class().starts_with("icon icon-"));
        }
        assert_eq!(Accent::Teal.class(), "accent-teal");
    }
}
