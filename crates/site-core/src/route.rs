//! Client-side Routes
//!
//! Maps the site's static paths to pages. Anything else resolves to
//! [`Route::NotFound`].

use serde::{Deserialize, Serialize};

/// A page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    AboutUs,
    Solutions,
    Industries,
    Regulations,
    ContactUs,
    AiAgent,
    NotFound,
}

impl Route {
    /// Every routable page, in navigation order
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::AboutUs,
        Self::Solutions,
        Self::Industries,
        Self::Regulations,
        Self::ContactUs,
        Self::AiAgent,
    ];

    /// Canonical path for the page
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AboutUs => "/about-us",
            Self::Solutions => "/solutions",
            Self::Industries => "/industries",
            Self::Regulations => "/regulations",
            Self::ContactUs => "/contact-us",
            Self::AiAgent => "/ai-agent",
            Self::NotFound => "/404",
        }
    }

    /// Document title shown in the browser tab
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "C&G Corp | AI Voice Agents",
            Self::AboutUs => "About Us | C&G Corp",
            Self::Solutions => "Solutions | C&G Corp",
            Self::Industries => "Industries | C&G Corp",
            Self::Regulations => "Regulations | C&G Corp",
            Self::ContactUs => "Contact Us | C&G Corp",
            Self::AiAgent => "AI Operations Framework | C&G Corp",
            Self::NotFound => "Page Not Found | C&G Corp",
        }
    }
}

/// Which optional pages are wired into the router
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sitemap {
    /// Serve the AI agent explainer at `/ai-agent`
    pub ai_agent: bool,
}

impl Sitemap {
    pub const fn new(ai_agent: bool) -> Self {
        Self { ai_agent }
    }

    /// Resolve a request path to a page.
    ///
    /// A single trailing slash and any query string or fragment are ignored.
    pub fn resolve(&self, path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let path = if path.is_empty() { "/" } else { path };

        Route::ALL
            .into_iter()
            .filter(|route| self.is_enabled(*route))
            .find(|route| route.path() == path)
            .unwrap_or(Route::NotFound)
    }

    /// Whether a route is reachable under this sitemap
    pub const fn is_enabled(&self, route: Route) -> bool {
        match route {
            Route::AiAgent => self.ai_agent,
            Route::NotFound => false,
            _ => true,
        }
    }

    /// Enabled routes, in navigation order
    pub fn routes(&self) -> Vec<Route> {
        Route::ALL
            .into_iter()
            .filter(|route| self.is_enabled(*route))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        let sitemap = Sitemap::default();
        assert_eq!(sitemap.resolve("/"), Route::Home);
        assert_eq!(sitemap.resolve("/about-us"), Route::AboutUs);
        assert_eq!(sitemap.resolve("/solutions"), Route::Solutions);
        assert_eq!(sitemap.resolve("/industries"), Route::Industries);
        assert_eq!(sitemap.resolve("/regulations"), Route::Regulations);
        assert_eq!(sitemap.resolve("/contact-us"), Route::ContactUs);
    }

    #[test]
    fn test_resolve_normalizes() {
        let sitemap = Sitemap::default();
        assert_eq!(sitemap.resolve("/contact-us/"), Route::ContactUs);
        assert_eq!(sitemap.resolve("/solutions?ref=nav"), Route::Solutions);
        assert_eq!(sitemap.resolve("/#news"), Route::Home);
        assert_eq!(sitemap.resolve(""), Route::Home);
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        let sitemap = Sitemap::default();
        assert_eq!(sitemap.resolve("/pricing"), Route::NotFound);
        assert_eq!(sitemap.resolve("/about-us/team"), Route::NotFound);
        assert_eq!(sitemap.resolve("/404"), Route::NotFound);
    }

    #[test]
    fn test_ai_agent_is_opt_in() {
        assert_eq!(Sitemap::default().resolve("/ai-agent"), Route::NotFound);
        assert_eq!(Sitemap::new(true).resolve("/ai-agent"), Route::AiAgent);
        assert_eq!(Sitemap::default().routes().len(), 6);
        assert_eq!(Sitemap::new(true).routes().len(), 7);
    }
}
