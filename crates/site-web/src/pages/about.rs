//! About Us Page

use leptos::prelude::*;
use site_core::content::{about, Feature};
use site_core::{assets, stagger_delay, Route};

use crate::components::{
    CtaBanner, FeatureCard, Footer, IconBadge, Nav, PageHero, SectionHeading, StatCard,
};
use crate::hooks::use_page_title;

/// Mission or vision panel
#[component]
fn Statement(feature: Feature) -> impl IntoView {
    view! {
        <div class="card statement-card reveal-up">
            <IconBadge icon=feature.icon class="icon-badge--large" />
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    use_page_title(Route::AboutUs);

    view! {
        <div class="page about">
            <Nav />
            <PageHero copy=about::HERO />

            <section class="section">
                <div class="container card-grid card-grid--2">
                    <Statement feature=about::MISSION />
                    <Statement feature=about::VISION />
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    <SectionHeading badge="What Drives Us" title="Our Core" accent="Values" />
                    <div class="card-grid card-grid--4">
                        {about::VALUES
                            .iter()
                            .enumerate()
                            .map(|(i, value)| view! { <FeatureCard feature=*value index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeading badge="Our Journey" title="Milestones" />
                    <ol class="timeline">
                        {about::MILESTONES
                            .iter()
                            .enumerate()
                            .map(|(i, milestone)| {
                                view! {
                                    <li class="timeline-item reveal-up" style=stagger_delay(i, 150)>
                                        <span class="timeline-year">{milestone.year}</span>
                                        <div class="timeline-body">
                                            <h3>{milestone.title}</h3>
                                            <p>{milestone.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section class="section section--muted">
                <div class="container split">
                    <div class="split-media reveal-left">
                        <img src=assets::TEAM alt="The C&G Corp team" />
                    </div>
                    <div class="split-copy">
                        <SectionHeading badge="Our Team" title="People Behind the" accent="Platform" />
                        <div class="card-grid card-grid--2">
                            {about::TEAM
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| view! { <StatCard stat=*stat index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            <CtaBanner cta=about::CTA />
            <Footer />
        </div>
    }
}
