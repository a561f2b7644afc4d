//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};
use site_core::{Route as SiteRoute, Sitemap};

use crate::pages::{
    AboutPage, AiAgentPage, ContactPage, HomePage, IndustriesPage, NotFoundPage,
    RegulationsPage, SolutionsPage,
};

/// Routes compiled into this build
pub const SITEMAP: Sitemap = Sitemap::new(cfg!(feature = "ai-agent"));

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about-us") view=AboutPage />
                    <Route path=path!("/solutions") view=SolutionsPage />
                    <Route path=path!("/industries") view=IndustriesPage />
                    <Route path=path!("/regulations") view=RegulationsPage />
                    <Route path=path!("/contact-us") view=ContactPage />
                    <Route path=path!("/ai-agent") view=AiAgentGate />
                </Routes>
            </main>
        </Router>
    }
}

/// `/ai-agent` renders the explainer only in builds with the `ai-agent` feature
#[component]
fn AiAgentGate() -> impl IntoView {
    if SITEMAP.is_enabled(SiteRoute::AiAgent) {
        view! { <AiAgentPage /> }.into_any()
    } else {
        view! { <NotFoundPage /> }.into_any()
    }
}
