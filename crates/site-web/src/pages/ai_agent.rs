//! AI Agent Page

use leptos::prelude::*;
use site_core::content::ai_agent;
use site_core::{stagger_delay, NavConfig, Route};

use crate::components::{CtaBanner, Footer, Nav, PageHero};
use crate::hooks::{scroll_to_top, use_page_title};

#[component]
pub fn AiAgentPage() -> impl IntoView {
    use_page_title(Route::AiAgent);
    scroll_to_top();

    view! {
        <div class="page ai-agent">
            <Nav config=NavConfig::SOLID />
            <PageHero copy=ai_agent::HERO />

            <section class="section">
                <div class="container framework">
                    {ai_agent::STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <article class="card framework-step reveal-up" style=stagger_delay(i, 150)>
                                    <span class="framework-number">{step.number}</span>
                                    <h3 class="card-title">{step.title}</h3>
                                    <ul>
                                        {step.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                                    </ul>
                                    <p class="framework-result">
                                        <strong>{step.result_label} ": "</strong>
                                        {step.result}
                                    </p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <CtaBanner cta=ai_agent::CTA />
            <Footer />
        </div>
    }
}
