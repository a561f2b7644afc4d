//! Contact Us page content

use serde::Serialize;

use super::{HeroCopy, Icon};

pub const HERO: HeroCopy = HeroCopy {
    badge: "Get in Touch",
    title: &["Let's Start a Conversation"],
    lead: "Ready to transform your contact center? Our team is here to answer your questions \
and help you find the perfect solution for your business.",
};

/// Way to reach the company
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub action: &'static str,
}

pub const CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Phone,
        title: "Phone",
        details: &["+1 (555) 123-4567", "+1 (555) 987-6543"],
        action: "Call us anytime",
    },
    ContactChannel {
        icon: Icon::Mail,
        title: "Email",
        details: &["sales@cgcorp.com", "support@cgcorp.com"],
        action: "We reply within 24h",
    },
    ContactChannel {
        icon: Icon::MapPin,
        title: "Office",
        details: &["123 Business Avenue", "New York, NY 10001"],
        action: "Visit our headquarters",
    },
    ContactChannel {
        icon: Icon::Clock,
        title: "Business Hours",
        details: &["Mon-Fri: 9AM - 6PM EST", "24/7 Support Available"],
        action: "Always here for you",
    },
];

pub const FORM_TITLE: &str = "Send us a Message";
pub const FORM_LEAD: &str = "Fill out the form and we'll get back to you within 24 hours";

pub const SUCCESS_TITLE: &str = "Thank You!";
pub const SUCCESS_LEAD: &str =
    "Your message has been sent successfully. We'll be in touch soon.";

pub const WHY_CONTACT: &[&str] = &[
    "Get expert advice tailored to your business needs",
    "Schedule a personalized demo of our solutions",
    "Receive a custom quote within 48 hours",
    "Connect with industry specialists",
];

/// Regional office
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub country: &'static str,
}

pub const OFFICES: &[Office] = &[
    Office {
        city: "New York",
        address: "123 Business Avenue, Suite 500",
        country: "United States",
    },
    Office {
        city: "London",
        address: "456 Tech Street, Floor 10",
        country: "United Kingdom",
    },
    Office {
        city: "Singapore",
        address: "789 Innovation Road, Tower A",
        country: "Singapore",
    },
];

/// Social network profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Linkedin,
        name: "LinkedIn",
        href: "#",
    },
    SocialLink {
        icon: Icon::Twitter,
        name: "Twitter",
        href: "#",
    },
    SocialLink {
        icon: Icon::Facebook,
        name: "Facebook",
        href: "#",
    },
];

pub const SOCIAL_LEAD: &str = "Stay updated with our latest news and insights";
