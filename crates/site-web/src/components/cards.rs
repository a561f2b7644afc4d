//! Card and heading building blocks shared by the pages

use leptos::prelude::*;
use site_core::content::{Feature, Icon, Stat};
use site_core::stagger_delay;

/// Icon in a rounded tile
#[component]
pub fn IconBadge(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("icon-badge {class}")>
            <i class=icon.class() aria-hidden="true"></i>
        </div>
    }
}

/// Badge, headline and lead paragraph above a section
#[component]
pub fn SectionHeading(
    #[prop(optional)] badge: &'static str,
    title: &'static str,
    #[prop(optional)] accent: &'static str,
    #[prop(optional)] lead: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-heading reveal-up">
            {(!badge.is_empty()).then(|| view! { <span class="badge">{badge}</span> })}
            <h2 class="section-title">
                {title}
                {(!accent.is_empty()).then(|| view! { " " <span class="text-gradient">{accent}</span> })}
            </h2>
            {(!lead.is_empty()).then(|| view! { <p class="section-lead">{lead}</p> })}
        </div>
    }
}

/// Feature tile, fading in after the ones before it
#[component]
pub fn FeatureCard(feature: Feature, #[prop(optional)] index: usize) -> impl IntoView {
    view! {
        <div class="card feature-card reveal-up" style=stagger_delay(index, 100)>
            <IconBadge icon=feature.icon />
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </div>
    }
}

/// Headline number
#[component]
pub fn StatCard(stat: Stat, #[prop(optional)] index: usize) -> impl IntoView {
    view! {
        <div class="card stat-card reveal-up" style=stagger_delay(index, 100)>
            {stat.icon.map(|icon| view! { <IconBadge icon=icon /> })}
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
            {stat.detail.map(|detail| view! { <p class="stat-detail">{detail}</p> })}
        </div>
    }
}
