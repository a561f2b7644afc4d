//! Solutions page content

use serde::Serialize;

use super::{Accent, CallToAction, Feature, HeroCopy, Icon};
use crate::route::Route;

pub const HERO: HeroCopy = HeroCopy {
    badge: "Our Solutions",
    title: &["Enterprise Solutions Built", "for Modern Business"],
    lead: "Harness the power of AI and human expertise with our comprehensive suite of \
contact center solutions designed to scale with your business.",
};

/// Product offering with its feature checklist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub accent: Accent,
}

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        icon: Icon::Bot,
        title: "AI-Powered Automation",
        description: "Intelligent virtual agents that handle routine inquiries with human-like conversation",
        features: &[
            "24/7 Availability",
            "Multi-language Support",
            "Natural Language Processing",
            "Self-Learning AI",
        ],
        accent: Accent::Blue,
    },
    Solution {
        icon: Icon::Users,
        title: "Hybrid Workforce Model",
        description: "Seamlessly blend AI agents with human experts for optimal customer experience",
        features: &[
            "Intelligent Routing",
            "Real-time Collaboration",
            "Skill-based Assignment",
            "Performance Analytics",
        ],
        accent: Accent::Primary,
    },
    Solution {
        icon: Icon::Cloud,
        title: "Cloud Contact Center",
        description: "Scalable, secure cloud infrastructure that grows with your business",
        features: &["Global Deployment", "99.99% Uptime", "Auto-scaling", "Data Security"],
        accent: Accent::Purple,
    },
    Solution {
        icon: Icon::BarChart,
        title: "Advanced Analytics",
        description: "Real-time insights and predictive analytics to optimize operations",
        features: &[
            "Custom Dashboards",
            "Predictive Insights",
            "Performance Metrics",
            "Quality Monitoring",
        ],
        accent: Accent::Green,
    },
    Solution {
        icon: Icon::MessageSquare,
        title: "Omnichannel Support",
        description: "Unified platform for voice, chat, email, and social media interactions",
        features: &[
            "Unified Inbox",
            "Context Preservation",
            "Channel Switching",
            "Social Integration",
        ],
        accent: Accent::Orange,
    },
    Solution {
        icon: Icon::Shield,
        title: "Compliance & Security",
        description: "Enterprise-grade security with full regulatory compliance",
        features: &[
            "End-to-end Encryption",
            "GDPR Compliant",
            "PCI DSS Certified",
            "Regular Audits",
        ],
        accent: Accent::Indigo,
    },
];

pub const BENEFITS: &[Feature] = &[
    Feature {
        icon: Icon::TrendingUp,
        title: "50% Cost Reduction",
        description: "Lower operational costs",
    },
    Feature {
        icon: Icon::Clock,
        title: "30% Faster Response",
        description: "Improved response times",
    },
    Feature {
        icon: Icon::Sparkles,
        title: "95% Customer Satisfaction",
        description: "Enhanced customer experience",
    },
    Feature {
        icon: Icon::Zap,
        title: "3x Productivity",
        description: "Increased agent efficiency",
    },
];

/// Numbered onboarding step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery & Assessment",
        description: "We analyze your current operations, pain points, and goals to design the perfect solution",
    },
    ProcessStep {
        step: "02",
        title: "Custom Solution Design",
        description: "Our experts create a tailored hybrid model that fits your specific business needs",
    },
    ProcessStep {
        step: "03",
        title: "Seamless Implementation",
        description: "We deploy and integrate our solutions with minimal disruption to your operations",
    },
    ProcessStep {
        step: "04",
        title: "Training & Optimization",
        description: "Comprehensive training for your team and continuous optimization for peak performance",
    },
    ProcessStep {
        step: "05",
        title: "Ongoing Support",
        description: "24/7 technical support and regular updates to keep you ahead of the curve",
    },
];

pub const VIDEO_DEMO_TITLE: &str = "See the Platform in Action";
pub const VIDEO_DEMO_LEAD: &str =
    "A short walkthrough of intelligent call routing and the analytics console.";

pub const CTA: CallToAction = CallToAction {
    icon: Some(Icon::Brain),
    title: "Ready to Transform Your Contact Center?",
    lead: "Let's discuss how our solutions can revolutionize your customer experience",
    button: "Schedule a Demo",
    href: Route::ContactUs.path(),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_solution_lists_four_features() {
        assert_eq!(SOLUTIONS.len(), 6);
        assert!(SOLUTIONS.iter().all(|s| s.features.len() == 4));
    }

    #[test]
    fn test_process_steps_are_numbered() {
        for (i, step) in PROCESS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }
}
