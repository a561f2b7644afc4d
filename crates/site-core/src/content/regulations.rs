//! Regulations page content

use serde::Serialize;

use super::{Accent, CallToAction, HeroCopy, Icon};
use crate::assets;
use crate::route::Route;

pub const HERO: HeroCopy = HeroCopy {
    badge: "Compliance & Security",
    title: &["Enterprise-Grade Compliance", "You Can Trust"],
    lead: "We maintain the highest standards of data protection, privacy, and security \
compliance across all major regulatory frameworks worldwide.",
};

/// Published policy document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub title: &'static str,
    pub organization: &'static str,
    pub year: &'static str,
    pub key_skills: &'static [&'static str],
    pub pdf: &'static str,
    pub accent: Accent,
}

impl Certificate {
    /// File name offered by the download link
    pub fn download_name(&self) -> &'static str {
        self.pdf.rsplit('/').next().unwrap_or(self.pdf)
    }
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Data Protection Policy",
        organization: "C&G CORP",
        year: "2025",
        key_skills: &["Data Privacy", "GDPR Compliance"],
        pdf: assets::DATA_PROTECTION_PDF,
        accent: Accent::Blue,
    },
    Certificate {
        title: "Global Information Security Policy",
        organization: "C&G CORP",
        year: "2025",
        key_skills: &["Information Security", "Provider Management"],
        pdf: assets::GLOBAL_SECURITY_PDF,
        accent: Accent::Purple,
    },
    Certificate {
        title: "Equity, Diversity & Inclusion Policy",
        organization: "C&G CORP",
        year: "2025",
        key_skills: &["Diversity", "Inclusion"],
        pdf: assets::EQUITY_PDF,
        accent: Accent::Green,
    },
];

pub const CTA: CallToAction = CallToAction {
    icon: Some(Icon::Shield),
    title: "Your Data Security is Our Priority",
    lead: "We invest heavily in maintaining the highest security standards and compliance \
certifications to protect your business and customer data. Our commitment to regulatory \
compliance ensures you can trust us with your most sensitive information.",
    button: "Request Compliance Documentation",
    href: Route::ContactUs.path(),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_names() {
        assert_eq!(
            CERTIFICATES[0].download_name(),
            "si-pol-3-data-protection.pdf"
        );
        assert!(CERTIFICATES.iter().all(|c| c.download_name().ends_with(".pdf")));
    }
}
