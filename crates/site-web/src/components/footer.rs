//! Footers

use leptos::prelude::*;
use site_core::assets;
use site_core::content::{home, Icon, COPYRIGHT};

/// Copyright strip used by the inner pages
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}

/// Full footer of the home page
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer footer--full">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img src=assets::LOGO_NAV alt="C&G Corp" class="footer-logo" />
                    <p class="footer-blurb">{home::FOOTER_BLURB}</p>
                    <div class="footer-social">
                        {home::FOOTER_SOCIAL
                            .iter()
                            .map(|icon| {
                                view! {
                                    <a href="#" class="social-link">
                                        <i class=icon.class() aria-hidden="true"></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {home::FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer-column">
                                <h4>{column.heading}</h4>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href=link.href>{link.name}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="footer-column">
                    <h4>"Contact"</h4>
                    <p class="footer-address">
                        <i class=Icon::MapPin.class() aria-hidden="true"></i>
                        {home::FOOTER_ADDRESS
                            .iter()
                            .map(|line| view! { <span>{*line}</span> })
                            .collect_view()}
                    </p>
                </div>
            </div>
            <div class="container footer-bottom">
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
