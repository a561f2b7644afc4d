//! Not Found Page

use leptos::prelude::*;
use site_core::content::Icon;
use site_core::Route;

use crate::components::{Footer, Nav};
use crate::hooks::use_page_title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    use_page_title(Route::NotFound);

    view! {
        <div class="page not-found">
            <Nav />
            <section class="section section--center">
                <div class="container narrow">
                    <h1 class="hero-title">"404"</h1>
                    <p class="hero-lead">"The page you are looking for does not exist."</p>
                    <a href=Route::Home.path() class="btn btn-primary">
                        <i class=Icon::House.class() aria-hidden="true"></i>
                        "Back to Home"
                    </a>
                </div>
            </section>
            <Footer />
        </div>
    }
}
