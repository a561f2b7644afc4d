//! Home Page

use leptos::prelude::*;
use site_core::content::{home, Icon};
use site_core::{assets, stagger_delay, NavConfig, Route};

use crate::components::{
    AudioPlayer, FeatureCard, IconBadge, Nav, SectionHeading, SiteFooter, VideoHero,
};
use crate::hooks::use_page_title;

#[component]
pub fn HomePage() -> impl IntoView {
    use_page_title(Route::Home);

    view! {
        <div class="page home">
            <Nav config=NavConfig::HOME />
            <VideoHero />

            // ==================================================================
            // About
            // ==================================================================
            <section id="about" class="section">
                <div class="container split">
                    <div class="split-copy">
                        <SectionHeading
                            title=home::ABOUT_TITLE
                            accent=home::ABOUT_TITLE_ACCENT
                            lead=home::ABOUT_LEAD
                        />
                        <div class="highlight-list">
                            {home::HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(i, feature)| {
                                    view! {
                                        <div class="highlight reveal-left" style=stagger_delay(i, 150)>
                                            <IconBadge icon=feature.icon />
                                            <div>
                                                <h3>{feature.title}</h3>
                                                <p>{feature.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="split-media reveal-right">
                        <img src=assets::CALL_CENTER alt="AI-assisted call center" />
                    </div>
                </div>
            </section>

            // ==================================================================
            // Voice solutions
            // ==================================================================
            <section id="solutions" class="section section--muted">
                <div class="container">
                    <SectionHeading badge="Our Solutions" title="Intelligent Voice" accent="Solutions" />
                    <div class="card-grid card-grid--4">
                        {home::VOICE_SOLUTIONS
                            .iter()
                            .enumerate()
                            .map(|(i, feature)| view! { <FeatureCard feature=*feature index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section audio-demo">
                <div class="container narrow">
                    <SectionHeading
                        badge="Live Demo"
                        title=home::AUDIO_DEMO_TITLE
                        lead=home::AUDIO_DEMO_LEAD
                    />
                    <AudioPlayer src=assets::AGENT_DEMO_AUDIO title="C&G voice agent sample call" />
                </div>
            </section>

            // ==================================================================
            // Industries
            // ==================================================================
            <section id="industries" class="section">
                <div class="container">
                    <SectionHeading badge="Industries" title="Sectors We" accent="Serve" />
                    <div class="chip-grid">
                        {home::INDUSTRIES
                            .iter()
                            .enumerate()
                            .map(|(i, name)| {
                                view! {
                                    <div class="chip reveal-up" style=stagger_delay(i, 80)>
                                        <i class=Icon::CheckCircle.class() aria-hidden="true"></i>
                                        {*name}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a href=Route::Industries.path() class="btn btn-outline">
                        "Explore Industries"
                        <i class=Icon::ArrowRight.class() aria-hidden="true"></i>
                    </a>
                </div>
            </section>

            // ==================================================================
            // Compliance
            // ==================================================================
            <section id="regulations" class="section section--dark">
                <div class="container">
                    <SectionHeading
                        badge="Compliance"
                        title="Security &"
                        accent="Regulations"
                        lead=home::COMPLIANCE_LEAD
                    />
                    <div class="badge-row">
                        {home::COMPLIANCE_BADGES
                            .iter()
                            .map(|badge| {
                                view! {
                                    <span class="badge badge--outline">
                                        <i class=Icon::ShieldCheck.class() aria-hidden="true"></i>
                                        {*badge}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="card-grid card-grid--3">
                        {home::COMPLIANCE_CARDS
                            .iter()
                            .enumerate()
                            .map(|(i, card)| {
                                view! {
                                    <div class="card compliance-card reveal-up" style=stagger_delay(i, 100)>
                                        <h3 class="card-title">{card.title}</h3>
                                        <ul class="check-list">
                                            {card.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // ==================================================================
            // News
            // ==================================================================
            <section id="news" class="section">
                <div class="container">
                    <SectionHeading badge="Newsroom" title="Latest" accent="News" />
                    <div class="card-grid card-grid--3">
                        {home::NEWS
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <article class="card news-card reveal-up" style=stagger_delay(i, 100)>
                                        <div class="news-meta">
                                            <span class="badge">{item.category}</span>
                                            <time>{item.date}</time>
                                        </div>
                                        <h3 class="card-title">{item.title}</h3>
                                        <p class="card-text">{item.excerpt}</p>
                                        <a href="#" class="link-arrow">
                                            "Read more"
                                            <i class=Icon::ChevronRight.class() aria-hidden="true"></i>
                                        </a>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <SiteFooter />
        </div>
    }
}
