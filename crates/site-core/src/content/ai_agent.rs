//! AI agent explainer content

use serde::Serialize;

use super::{CallToAction, HeroCopy};
use crate::route::Route;

pub const HERO: HeroCopy = HeroCopy {
    badge: "AI-Powered Operations",
    title: &["AI-Powered Customer", "Operations Framework"],
    lead: "A 4-step model for contact center digital transformation.",
};

/// One step of the operations framework
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FrameworkStep {
    pub number: u8,
    pub title: &'static str,
    pub points: &'static [&'static str],
    /// "Outcome" or "Impact"
    pub result_label: &'static str,
    pub result: &'static str,
}

pub const STEPS: &[FrameworkStep] = &[
    FrameworkStep {
        number: 1,
        title: "Intelligent Service Model",
        points: &[
            "Human-led support for complex cases.",
            "AI-only service available 24/7.",
            "Hybrid human + AI model for efficiency.",
        ],
        result_label: "Outcome",
        result: "faster resolution and lower costs.",
    },
    FrameworkStep {
        number: 2,
        title: "Adaptive Operations Management",
        points: &[
            "Scalable operations without slow hiring.",
            "Our trained experts or your team enhanced by AI.",
        ],
        result_label: "Outcome",
        result: "immediate scalability and operational efficiency.",
    },
    FrameworkStep {
        number: 3,
        title: "Connected Technology Ecosystem",
        points: &[
            "AI-powered contact center platform.",
            "Seamless integration with existing business systems.",
        ],
        result_label: "Outcome",
        result: "fast deployment with no technology silos.",
    },
    FrameworkStep {
        number: 4,
        title: "AI Capabilities & Automation",
        points: &[
            "Smart automation across voice, chat, and email.",
            "AI assistance, quality monitoring, and document processing.",
        ],
        result_label: "Impact",
        result: "reduced manual work and faster resolution cycles.",
    },
];

pub const CTA: CallToAction = CallToAction {
    icon: None,
    title: "Ready to Transform Your Operations?",
    lead: "Discover how our AI-powered framework can revolutionize your customer operations \
and drive unprecedented efficiency.",
    button: "Get Started Today",
    href: Route::ContactUs.path(),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_sequential_steps() {
        let numbers: Vec<u8> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
