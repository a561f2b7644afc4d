//! About Us page content

use serde::Serialize;

use super::{CallToAction, Feature, HeroCopy, Icon, Stat};
use crate::route::Route;

pub const HERO: HeroCopy = HeroCopy {
    badge: "Who We Are",
    title: &["Transforming Contact Centers", "Through Innovation"],
    lead: "We're not just a service provider – we're your strategic partner in building \
next-generation contact center solutions that blend human expertise with AI precision.",
};

pub const MISSION: Feature = Feature {
    icon: Icon::Rocket,
    title: "Our Mission",
    description: "To empower businesses worldwide with innovative hybrid workforce solutions \
that seamlessly integrate human intelligence and artificial intelligence, delivering exceptional \
customer experiences while optimizing operational efficiency.",
};

pub const VISION: Feature = Feature {
    icon: Icon::Lightbulb,
    title: "Our Vision",
    description: "To be the global leader in hybrid contact center solutions, setting the \
standard for innovation, quality, and customer satisfaction while fostering a sustainable and \
inclusive future for the industry.",
};

pub const VALUES: &[Feature] = &[
    Feature {
        icon: Icon::Target,
        title: "Innovation First",
        description: "We constantly push boundaries to deliver cutting-edge solutions that transform businesses.",
    },
    Feature {
        icon: Icon::Users,
        title: "Client-Centric",
        description: "Your success is our mission. We build lasting partnerships based on trust and results.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Integrity Always",
        description: "We operate with complete transparency, ensuring compliance and ethical practices.",
    },
    Feature {
        icon: Icon::Heart,
        title: "Excellence Driven",
        description: "Quality is non-negotiable. We deliver exceptional service in everything we do.",
    },
];

/// Point on the company timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2018",
        title: "Company Founded",
        description: "Started with a vision to revolutionize contact center solutions",
    },
    Milestone {
        year: "2020",
        title: "Global Expansion",
        description: "Expanded operations to serve clients across 15 countries",
    },
    Milestone {
        year: "2022",
        title: "AI Integration",
        description: "Pioneered AI-powered hybrid workforce models",
    },
    Milestone {
        year: "2024",
        title: "Industry Leader",
        description: "Recognized as top provider with 500+ enterprise clients",
    },
];

pub const TEAM: &[Stat] = &[
    Stat {
        icon: None,
        value: "25+",
        label: "Leadership Team",
        detail: Some("Years of combined experience"),
    },
    Stat {
        icon: None,
        value: "10K+",
        label: "Global Workforce",
        detail: Some("Dedicated professionals"),
    },
    Stat {
        icon: None,
        value: "30+",
        label: "Countries Served",
        detail: Some("Worldwide presence"),
    },
    Stat {
        icon: None,
        value: "98%",
        label: "Client Satisfaction",
        detail: Some("Consistent excellence"),
    },
];

pub const CTA: CallToAction = CallToAction {
    icon: None,
    title: "Ready to Transform Your Business?",
    lead: "Join hundreds of forward-thinking companies that trust C&G Corp",
    button: "Get Started Today",
    href: Route::ContactUs.path(),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_are_chronological() {
        let years: Vec<u32> = MILESTONES.iter().map(|m| m.year.parse().unwrap()).collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }
}
