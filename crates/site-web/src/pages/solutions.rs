//! Solutions Page

use leptos::prelude::*;
use site_core::content::{solutions, Icon};
use site_core::{assets, stagger_delay, Route};

use crate::components::{
    CtaBanner, FeatureCard, Footer, IconBadge, Nav, PageHero, SectionHeading, VideoPlayer,
};
use crate::hooks::use_page_title;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    use_page_title(Route::Solutions);

    view! {
        <div class="page solutions">
            <Nav />
            <PageHero copy=solutions::HERO />

            <section class="section">
                <div class="container card-grid card-grid--3">
                    {solutions::SOLUTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, solution)| {
                            view! {
                                <div
                                    class=format!("card solution-card reveal-up {}", solution.accent.class())
                                    style=stagger_delay(i, 100)
                                >
                                    <IconBadge icon=solution.icon />
                                    <h3 class="card-title">{solution.title}</h3>
                                    <p class="card-text">{solution.description}</p>
                                    <ul class="check-list">
                                        {solution
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <i class=Icon::CheckCircle.class() aria-hidden="true"></i>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    <SectionHeading badge="Benefits" title="Why Choose" accent="Our Solutions" />
                    <div class="card-grid card-grid--4">
                        {solutions::BENEFITS
                            .iter()
                            .enumerate()
                            .map(|(i, benefit)| view! { <FeatureCard feature=*benefit index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <SectionHeading
                        badge="Product Tour"
                        title=solutions::VIDEO_DEMO_TITLE
                        lead=solutions::VIDEO_DEMO_LEAD
                    />
                    <VideoPlayer src=assets::PLATFORM_DEMO_VIDEO poster=assets::PLATFORM_DEMO_POSTER />
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    <SectionHeading badge="How It Works" title="Our Implementation" accent="Process" />
                    <ol class="process">
                        {solutions::PROCESS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <li class="process-step reveal-up" style=stagger_delay(i, 120)>
                                        <span class="process-number">{step.step}</span>
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <CtaBanner cta=solutions::CTA />
            <Footer />
        </div>
    }
}
