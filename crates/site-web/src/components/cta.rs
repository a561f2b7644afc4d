//! Closing call-to-action banner

use leptos::prelude::*;
use site_core::content::{CallToAction, Icon};

use super::IconBadge;

#[component]
pub fn CtaBanner(cta: CallToAction) -> impl IntoView {
    view! {
        <section class="cta-banner">
            <div class="container cta-inner reveal-up">
                {cta.icon.map(|icon| view! { <IconBadge icon=icon class="icon-badge--large" /> })}
                <h2 class="section-title">{cta.title}</h2>
                {(!cta.lead.is_empty()).then(|| view! { <p class="section-lead">{cta.lead}</p> })}
                <a href=cta.href class="btn btn-primary btn-large">
                    {cta.button}
                    <i class=Icon::ArrowRight.class() aria-hidden="true"></i>
                </a>
            </div>
        </section>
    }
}
