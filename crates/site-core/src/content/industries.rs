//! Industries page content

use serde::Serialize;

use super::{Accent, CallToAction, Feature, HeroCopy, Icon, Stat};
use crate::route::Route;

pub const HERO: HeroCopy = HeroCopy {
    badge: "Industries We Serve",
    title: &["Industry-Specific Solutions", "for Every Sector"],
    lead: "Deep industry expertise combined with cutting-edge technology to deliver tailored \
contact center solutions that understand your unique challenges.",
};

pub const STATS: &[Stat] = &[
    Stat {
        icon: Some(Icon::Globe),
        value: "20+",
        label: "Industries Served",
        detail: None,
    },
    Stat {
        icon: Some(Icon::Building),
        value: "500+",
        label: "Enterprise Clients",
        detail: None,
    },
    Stat {
        icon: Some(Icon::Users),
        value: "50M+",
        label: "Interactions Handled",
        detail: None,
    },
    Stat {
        icon: Some(Icon::Target),
        value: "99.9%",
        label: "Client Retention",
        detail: None,
    },
];

/// Sector card: what hurts, what we bring, and the headline result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub improvement: &'static str,
    pub metric: &'static str,
    pub accent: Accent,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        icon: Icon::ShoppingCart,
        title: "Retail & E-Commerce",
        description: "Transform customer shopping experiences with AI-powered support and personalized service",
        challenges: &["Order management", "Product inquiries", "Returns processing", "Peak season scaling"],
        solutions: &["24/7 AI chatbots", "Smart routing", "Inventory integration", "Multi-channel support"],
        improvement: "40%",
        metric: "Customer satisfaction increase",
        accent: Accent::Pink,
    },
    Industry {
        icon: Icon::Landmark,
        title: "Banking & Finance",
        description: "Secure, compliant contact center solutions for financial services excellence",
        challenges: &["Fraud prevention", "Compliance requirements", "Account security", "Complex transactions"],
        solutions: &["Secure authentication", "PCI DSS compliance", "Fraud detection AI", "Encrypted communications"],
        improvement: "60%",
        metric: "Faster issue resolution",
        accent: Accent::Blue,
    },
    Industry {
        icon: Icon::Heart,
        title: "Healthcare",
        description: "HIPAA-compliant solutions delivering compassionate patient care at scale",
        challenges: &["Patient privacy", "Appointment scheduling", "Medical inquiries", "Emergency triage"],
        solutions: &["HIPAA compliance", "Intelligent triage", "EHR integration", "Telehealth support"],
        improvement: "50%",
        metric: "Reduction in wait times",
        accent: Accent::Green,
    },
    Industry {
        icon: Icon::Smartphone,
        title: "Telecommunications",
        description: "High-volume support systems built for connectivity and network services",
        challenges: &["Technical support", "Billing inquiries", "Network issues", "Plan management"],
        solutions: &["Network diagnostics AI", "Automated troubleshooting", "Real-time monitoring", "Self-service portals"],
        improvement: "45%",
        metric: "Call deflection rate",
        accent: Accent::Teal,
    },
    Industry {
        icon: Icon::Plane,
        title: "Travel & Hospitality",
        description: "Enhance guest experiences with seamless, multi-lingual support services",
        challenges: &["Booking changes", "Multi-language support", "Complaint resolution", "Loyalty programs"],
        solutions: &["Real-time translation", "Booking system integration", "Loyalty management", "Crisis communication"],
        improvement: "70%",
        metric: "First-call resolution",
        accent: Accent::Cyan,
    },
    Industry {
        icon: Icon::GraduationCap,
        title: "Education",
        description: "Support educational institutions with enrollment, student services, and alumni relations",
        challenges: &["Enrollment inquiries", "Student support", "Financial aid", "Course registration"],
        solutions: &["Student portal integration", "Automated FAQs", "Multi-term scheduling", "Parent communication"],
        improvement: "55%",
        metric: "Inquiry response time",
        accent: Accent::Amber,
    },
    Industry {
        icon: Icon::House,
        title: "Real Estate",
        description: "Connect buyers, sellers, and agents with intelligent lead management and support",
        challenges: &["Lead qualification", "Property inquiries", "Showing coordination", "Transaction support"],
        solutions: &["CRM integration", "Lead scoring", "Automated follow-ups", "Virtual tours support"],
        improvement: "65%",
        metric: "Lead conversion increase",
        accent: Accent::Red,
    },
    Industry {
        icon: Icon::Building,
        title: "Manufacturing",
        description: "Optimize supply chain support, dealer networks, and customer service operations",
        challenges: &["Technical support", "Order tracking", "Dealer coordination", "Warranty claims"],
        solutions: &["Supply chain visibility", "Parts lookup AI", "Dealer portals", "Quality tracking"],
        improvement: "35%",
        metric: "Order accuracy improvement",
        accent: Accent::Slate,
    },
];

pub const WHY_US_BADGE: &str = "Industry Expertise";
pub const WHY_US_TITLE: &str = "Why Industry Leaders Choose Us";

pub const REASONS: &[Feature] = &[
    Feature {
        icon: Icon::CheckCircle,
        title: "Deep Industry Knowledge",
        description: "We understand your sector's unique challenges and regulations",
    },
    Feature {
        icon: Icon::Zap,
        title: "Rapid Deployment",
        description: "Industry-specific templates for faster implementation",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Proven ROI",
        description: "Measurable results across all industries we serve",
    },
    Feature {
        icon: Icon::Users,
        title: "Dedicated Support",
        description: "Industry specialists who understand your business",
    },
];

pub const CTA: CallToAction = CallToAction {
    icon: None,
    title: WHY_US_TITLE,
    lead: "",
    button: "Discuss Your Industry Needs",
    href: Route::ContactUs.path(),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_cards_are_balanced() {
        assert_eq!(INDUSTRIES.len(), 8);
        for industry in INDUSTRIES {
            assert_eq!(industry.challenges.len(), industry.solutions.len());
            assert!(industry.improvement.ends_with('%'));
        }
    }
}
