//! Top navigation bar

use leptos::prelude::*;
use site_core::content::Icon;
use site_core::{assets, NavConfig, NavState};

use crate::hooks::use_scroll_y;

/// Fixed navigation bar. Turns opaque once the page is scrolled and
/// collapses into a toggle on narrow screens.
#[component]
pub fn Nav(#[prop(optional)] config: NavConfig) -> impl IntoView {
    let scroll_y = use_scroll_y();
    let (state, set_state) = signal(NavState::new());

    Effect::new(move |_| {
        let y = scroll_y.get();
        set_state.maybe_update(|nav| nav.on_scroll(y));
    });

    let close = move |_| set_state.update(NavState::close_menu);

    view! {
        <nav class=move || state.with(|nav| nav.class(config.variant))>
            <div class="container nav-bar">
                <a href="/" class="nav-logo">
                    <img src=assets::LOGO_NAV alt="C&G Corp" />
                </a>

                <div class="nav-links">
                    {config
                        .links
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.name}</a> })
                        .collect_view()}
                    <a href="/contact-us" class="btn btn-primary nav-cta">"Contact Us"</a>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_state.update(NavState::toggle_menu)
                >
                    <i class=move || {
                        if state.with(|nav| nav.menu_open) {
                            Icon::Close.class()
                        } else {
                            Icon::Menu.class()
                        }
                    }></i>
                </button>
            </div>

            <Show when=move || state.with(|nav| nav.menu_open)>
                <div class="nav-mobile">
                    {config
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="nav-mobile-link" on:click=close>
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="/contact-us" class="btn btn-primary" on:click=close>
                        "Contact Us"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
