//! Industries Page

use leptos::prelude::*;
use site_core::content::industries::{self, Industry};
use site_core::content::Icon;
use site_core::{stagger_delay, Route};

use crate::components::{
    CtaBanner, FeatureCard, Footer, IconBadge, Nav, PageHero, SectionHeading, StatCard,
};
use crate::hooks::use_page_title;

/// One sector with its challenges, our answer and the headline result
#[component]
fn IndustryCard(industry: Industry, index: usize) -> impl IntoView {
    view! {
        <article
            class=format!("card industry-card reveal-up {}", industry.accent.class())
            style=stagger_delay(index % 2, 150)
        >
            <header class="industry-header">
                <IconBadge icon=industry.icon />
                <div>
                    <h3 class="card-title">{industry.title}</h3>
                    <p class="card-text">{industry.description}</p>
                </div>
            </header>
            <div class="industry-columns">
                <div>
                    <h4>"Key Challenges"</h4>
                    <ul>
                        {industry.challenges.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Our Solutions"</h4>
                    <ul class="check-list">
                        {industry
                            .solutions
                            .iter()
                            .map(|s| {
                                view! {
                                    <li>
                                        <i class=Icon::CheckCircle.class() aria-hidden="true"></i>
                                        {*s}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <footer class="industry-result">
                <span class="stat-value">{industry.improvement}</span>
                <span class="stat-label">{industry.metric}</span>
            </footer>
        </article>
    }
}

#[component]
pub fn IndustriesPage() -> impl IntoView {
    use_page_title(Route::Industries);

    view! {
        <div class="page industries">
            <Nav />
            <PageHero copy=industries::HERO />

            <section class="section section--tight">
                <div class="container card-grid card-grid--4">
                    {industries::STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| view! { <StatCard stat=*stat index=i /> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="container card-grid card-grid--2">
                    {industries::INDUSTRIES
                        .iter()
                        .enumerate()
                        .map(|(i, industry)| view! { <IndustryCard industry=*industry index=i /> })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    <SectionHeading badge=industries::WHY_US_BADGE title=industries::WHY_US_TITLE />
                    <div class="card-grid card-grid--4">
                        {industries::REASONS
                            .iter()
                            .enumerate()
                            .map(|(i, reason)| view! { <FeatureCard feature=*reason index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner cta=industries::CTA />
            <Footer />
        </div>
    }
}
