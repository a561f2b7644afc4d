//! Page heroes with scroll-linked parallax

use leptos::prelude::*;
use site_core::content::{home, HeroCopy, Icon};
use site_core::{assets, HeroParallax, IntroSequence, INTRO_DURATION};

use crate::hooks::{use_scroll_y, ScopedTimeout};

/// Headline lines separated by line breaks
fn title_lines(lines: &'static [&'static str]) -> impl IntoView {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| view! { {(i > 0).then(|| view! { <br /> })} {*line} })
        .collect_view()
}

/// Hero banner of the inner pages. The copy drifts down and fades out as
/// the page scrolls.
#[component]
pub fn PageHero(
    copy: HeroCopy,
    #[prop(default = HeroParallax::inner_page())] parallax: HeroParallax,
) -> impl IntoView {
    let scroll_y = use_scroll_y();

    view! {
        <section class="page-hero">
            <div class="hero-glow hero-glow--left"></div>
            <div class="hero-glow hero-glow--right"></div>
            <div
                class="container hero-copy reveal-up"
                style=move || parallax.frame(scroll_y.get()).style()
            >
                <span class="badge">{copy.badge}</span>
                <h1 class="hero-title">{title_lines(copy.title)}</h1>
                <p class="hero-lead">{copy.lead}</p>
            </div>
        </section>
    }
}

/// Full-screen home hero. The intro clip plays once, then crossfades into
/// the looping background.
#[component]
pub fn VideoHero() -> impl IntoView {
    let scroll_y = use_scroll_y();
    let (intro, set_intro) = signal(IntroSequence::new());

    ScopedTimeout::new().schedule(INTRO_DURATION, move || {
        set_intro.update(IntroSequence::advance);
    });

    let media = HeroParallax::video_hero();
    let logo = HeroParallax::logo();

    view! {
        <section class="video-hero">
            <div class="hero-media" style=move || media.frame(scroll_y.get()).style()>
                <video
                    class="hero-video"
                    src=assets::INTRO_VIDEO
                    autoplay=true
                    muted=true
                    playsinline=true
                    style=move || format!("opacity: {};", intro.with(IntroSequence::intro_opacity))
                ></video>
                <video
                    class="hero-video"
                    src=assets::LOOP_VIDEO
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    style=move || format!("opacity: {};", intro.with(IntroSequence::loop_opacity))
                ></video>
                <div class="hero-overlay"></div>
            </div>

            <div class="container hero-copy">
                <img
                    src=assets::LOGO
                    alt="C&G Corp"
                    class="hero-logo"
                    style=move || logo.frame(scroll_y.get()).style()
                />
                <p class="hero-tagline reveal-up">{home::TAGLINE}</p>
                <div class="hero-actions reveal-up">
                    <a href=home::BOOK_DEMO.href class="btn btn-primary btn-large">
                        {home::BOOK_DEMO.name}
                        <i class=Icon::ArrowRight.class() aria-hidden="true"></i>
                    </a>
                    <a href=home::TALK_TO_TEAM.href class="btn btn-outline btn-large">
                        {home::TALK_TO_TEAM.name}
                    </a>
                </div>
            </div>

            <a href="#about" class="scroll-indicator" aria-label="Scroll to content">
                <i class=Icon::Mouse.class() aria-hidden="true"></i>
            </a>
        </section>
    }
}
