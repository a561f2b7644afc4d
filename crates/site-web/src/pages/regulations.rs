//! Regulations Page

use leptos::prelude::*;
use site_core::content::regulations::{self, Certificate};
use site_core::content::Icon;
use site_core::{stagger_delay, Route};

use crate::components::{CtaBanner, Footer, IconBadge, Nav, PageHero, SectionHeading};
use crate::hooks::use_page_title;

/// Policy card that flips on hover to show its key areas and download link
#[component]
fn FlipCard(certificate: Certificate, index: usize) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);

    view! {
        <div
            class=move || {
                if flipped.get() { "flip-card flip-card--flipped" } else { "flip-card" }
            }
            style=stagger_delay(index, 150)
            on:mouseenter=move |_| set_flipped.set(true)
            on:mouseleave=move |_| set_flipped.set(false)
        >
            <div class="flip-card-inner">
                <div class=format!("flip-card-face flip-card-front {}", certificate.accent.class())>
                    <IconBadge icon=Icon::ShieldCheck class="icon-badge--large" />
                    <h3 class="card-title">{certificate.title}</h3>
                    <p class="card-text">{certificate.organization}</p>
                    <span class="badge">{certificate.year}</span>
                </div>
                <div class=format!("flip-card-face flip-card-back {}", certificate.accent.class())>
                    <h4>"Key Areas"</h4>
                    <ul class="check-list">
                        {certificate
                            .key_skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <li>
                                        <i class=Icon::CheckCircle.class() aria-hidden="true"></i>
                                        {*skill}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <a
                        href=certificate.pdf
                        download=certificate.download_name()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        <i class=Icon::Download.class() aria-hidden="true"></i>
                        "Download PDF"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RegulationsPage() -> impl IntoView {
    use_page_title(Route::Regulations);

    view! {
        <div class="page regulations">
            <Nav />
            <PageHero copy=regulations::HERO />

            <section class="section">
                <div class="container">
                    <SectionHeading badge="Policies" title="Our Compliance" accent="Documents" />
                    <div class="card-grid card-grid--3">
                        {regulations::CERTIFICATES
                            .iter()
                            .enumerate()
                            .map(|(i, certificate)| view! { <FlipCard certificate=*certificate index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner cta=regulations::CTA />
            <Footer />
        </div>
    }
}
