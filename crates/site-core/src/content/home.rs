//! Home page content

use serde::Serialize;

use super::{Feature, FooterColumn, Icon};
use crate::nav::NavLink;
use crate::route::Route;

pub const TAGLINE: &str = "AI voice agents that transform your call center.";

/// Primary hero CTA
pub const BOOK_DEMO: NavLink = NavLink::new("Book a Demo", Route::ContactUs.path());
/// Secondary hero CTA
pub const TALK_TO_TEAM: NavLink = NavLink::new("Talk to our Team", Route::AboutUs.path());

pub const ABOUT_TITLE: &str = "Redefining";
pub const ABOUT_TITLE_ACCENT: &str = "Voice Process Outsourcing";
pub const ABOUT_LEAD: &str = "C&G CORP combines human expertise with cutting-edge AI to deliver \
next-generation customer experiences. Our intelligent voice agents handle complex interactions \
with natural fluency, reducing operational costs while ensuring your customers always feel heard.";

pub const HIGHLIGHTS: &[Feature] = &[
    Feature {
        icon: Icon::BarChart,
        title: "Cost Optimization",
        description: "Reduce operational overhead by up to 60%",
    },
    Feature {
        icon: Icon::Headphones,
        title: "Customer Experience",
        description: "Zero wait times and instant resolution",
    },
    Feature {
        icon: Icon::Cpu,
        title: "Scalable AI",
        description: "Infinite capacity during peak hours",
    },
];

pub const VOICE_SOLUTIONS: &[Feature] = &[
    Feature {
        icon: Icon::Headphones,
        title: "Inbound Support Agent",
        description: "Handle Tier 1 queries instantly with empathetic AI that solves problems.",
    },
    Feature {
        icon: Icon::Phone,
        title: "Outbound Collections",
        description: "Ethical, efficient payment reminders that improve recovery rates.",
    },
    Feature {
        icon: Icon::Clock,
        title: "Appointment Scheduling",
        description: "Seamless booking management integrated directly with your calendar.",
    },
    Feature {
        icon: Icon::Mic,
        title: "24/7 Virtual Receptionist",
        description: "Never miss a call. Professional greeting and routing around the clock.",
    },
];

pub const AUDIO_DEMO_TITLE: &str = "Hear Our Voice Agent";
pub const AUDIO_DEMO_LEAD: &str =
    "Listen to a real call handled end-to-end by a C&G AI voice agent.";

pub const INDUSTRIES: &[&str] = &[
    "Telecom",
    "Financial Services",
    "Healthcare",
    "E-commerce & Retail",
    "Utilities",
    "Insurance",
];

pub const COMPLIANCE_LEAD: &str = "We adhere to the strictest global standards to ensure your \
data and your customers' privacy are protected at all times.";

pub const COMPLIANCE_BADGES: &[&str] = &["GDPR Ready", "ISO 27001", "HIPAA"];

/// Compliance pillar with its bullet points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComplianceCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const COMPLIANCE_CARDS: &[ComplianceCard] = &[
    ComplianceCard {
        title: "Data Protection",
        items: &["End-to-end encryption", "Data residency options", "Regular audits"],
    },
    ComplianceCard {
        title: "Security & Reliability",
        items: &["99.99% Uptime SLA", "DDoS Protection", "24/7 Monitoring"],
    },
    ComplianceCard {
        title: "Quality & Monitoring",
        items: &[
            "Real-time sentiment analysis",
            "Automated QA scoring",
            "Human-in-the-loop review",
        ],
    },
];

/// Article teaser
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
}

const NEWS_EXCERPT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore...";

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        title: "The Future of Voice AI in 2025",
        date: "Oct 12, 2025",
        category: "Trends",
        excerpt: NEWS_EXCERPT,
    },
    NewsItem {
        title: "How C&G Reduced Wait Times by 80% for FinTech Client",
        date: "Sep 28, 2025",
        category: "Case Study",
        excerpt: NEWS_EXCERPT,
    },
    NewsItem {
        title: "Understanding the New AI Ethics Guidelines",
        date: "Sep 15, 2025",
        category: "Compliance",
        excerpt: NEWS_EXCERPT,
    },
];

pub const FOOTER_BLURB: &str =
    "Transforming enterprise communication with intelligent voice agents.";

pub const FOOTER_ADDRESS: &[&str] = &["123 Innovation Drive", "Tech District, NY 10012"];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink::new("About Us", Route::AboutUs.path()),
            NavLink::new("Careers", "#"),
            NavLink::new("Blog", "#news"),
            NavLink::new("Contact", Route::ContactUs.path()),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            NavLink::new("Privacy Policy", "#"),
            NavLink::new("Terms of Service", "#"),
            NavLink::new("Cookie Policy", "#"),
            NavLink::new("Compliance", Route::Regulations.path()),
        ],
    },
];

pub const FOOTER_SOCIAL: &[Icon] = &[Icon::Globe, Icon::Phone];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_demo_targets_contact() {
        assert_eq!(BOOK_DEMO.href, "/contact-us");
    }

    #[test]
    fn test_sections_populated() {
        assert_eq!(HIGHLIGHTS.len(), 3);
        assert_eq!(VOICE_SOLUTIONS.len(), 4);
        assert_eq!(INDUSTRIES.len(), 6);
        assert!(COMPLIANCE_CARDS.iter().all(|card| card.items.len() == 3));
        assert_eq!(NEWS.len(), 3);
    }
}
