//! Contact Us Page

use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use site_core::content::{contact, Icon};
use site_core::{stagger_delay, ContactFormMachine, Field, Interest, Route, RESET_DELAY};

use crate::components::{Footer, IconBadge, Nav, PageHero};
use crate::hooks::{use_page_title, ScopedTimeout};
use crate::sink::ConsoleSink;

#[component]
pub fn ContactPage() -> impl IntoView {
    use_page_title(Route::ContactUs);

    let (machine, set_machine) = signal(ContactFormMachine::new());
    let (error, set_error) = signal(None::<String>);
    let reset_timer = ScopedTimeout::new();

    let update = move |field: Field, value: String| {
        set_machine.update(|m| {
            if let Err(err) = m.set_field(field, value) {
                warn!("contact form edit ignored: {err}");
            }
        });
    };

    let value_of = move |field: Field| move || machine.with(|m| m.form().get(field).to_string());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match set_machine.try_update(|m| m.submit(&ConsoleSink)) {
            Some(Ok(_)) => {
                set_error.set(None);
                reset_timer.schedule(RESET_DELAY, move || {
                    set_machine.update(ContactFormMachine::reset);
                });
            }
            Some(Err(err)) => {
                warn!("contact form rejected: {err}");
                set_error.set(Some(err.user_message()));
            }
            None => {}
        }
    };

    view! {
        <div class="page contact">
            <Nav />
            <PageHero copy=contact::HERO />

            <section class="section section--tight">
                <div class="container card-grid card-grid--4">
                    {contact::CHANNELS
                        .iter()
                        .enumerate()
                        .map(|(i, channel)| {
                            view! {
                                <div class="card channel-card reveal-up" style=stagger_delay(i, 100)>
                                    <IconBadge icon=channel.icon />
                                    <h3 class="card-title">{channel.title}</h3>
                                    {channel
                                        .details
                                        .iter()
                                        .map(|line| view! { <p class="card-text">{*line}</p> })
                                        .collect_view()}
                                    <span class="channel-action">{channel.action}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="container split">
                    <div class="card form-card">
                        <Show
                            when=move || machine.with(ContactFormMachine::is_submitted)
                            fallback=move || {
                                view! {
                                    <h2 class="card-title">{contact::FORM_TITLE}</h2>
                                    <p class="card-text">{contact::FORM_LEAD}</p>
                                    <form class="contact-form" on:submit=submit>
                                        <div class="form-row">
                                            <label>
                                                "Full Name *"
                                                <input
                                                    type="text"
                                                    name=Field::Name.input_name()
                                                    required=true
                                                    placeholder="John Doe"
                                                    prop:value=value_of(Field::Name)
                                                    on:input=move |ev| update(Field::Name, event_target_value(&ev))
                                                />
                                            </label>
                                            <label>
                                                "Email Address *"
                                                <input
                                                    type="email"
                                                    name=Field::Email.input_name()
                                                    required=true
                                                    placeholder="john@company.com"
                                                    prop:value=value_of(Field::Email)
                                                    on:input=move |ev| update(Field::Email, event_target_value(&ev))
                                                />
                                            </label>
                                        </div>
                                        <div class="form-row">
                                            <label>
                                                "Company"
                                                <input
                                                    type="text"
                                                    name=Field::Company.input_name()
                                                    placeholder="Your Company"
                                                    prop:value=value_of(Field::Company)
                                                    on:input=move |ev| update(Field::Company, event_target_value(&ev))
                                                />
                                            </label>
                                            <label>
                                                "Phone Number"
                                                <input
                                                    type="tel"
                                                    name=Field::Phone.input_name()
                                                    placeholder="+1 (555) 000-0000"
                                                    prop:value=value_of(Field::Phone)
                                                    on:input=move |ev| update(Field::Phone, event_target_value(&ev))
                                                />
                                            </label>
                                        </div>
                                        <label>
                                            "I'm interested in"
                                            <select
                                                name=Field::Interest.input_name()
                                                prop:value=value_of(Field::Interest)
                                                on:change=move |ev| update(Field::Interest, event_target_value(&ev))
                                            >
                                                {Interest::ALL
                                                    .iter()
                                                    .map(|interest| {
                                                        view! { <option value=interest.value()>{interest.label()}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </label>
                                        <label>
                                            "Message *"
                                            <textarea
                                                name=Field::Message.input_name()
                                                required=true
                                                rows="5"
                                                placeholder="Tell us about your needs..."
                                                prop:value=value_of(Field::Message)
                                                on:input=move |ev| update(Field::Message, event_target_value(&ev))
                                            ></textarea>
                                        </label>
                                        {move || error.get().map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                                        <button type="submit" class="btn btn-primary btn-large">
                                            "Send Message"
                                            <i class=Icon::Send.class() aria-hidden="true"></i>
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="form-success" role="status">
                                <IconBadge icon=Icon::CheckCircle class="icon-badge--large" />
                                <h2 class="card-title">{contact::SUCCESS_TITLE}</h2>
                                <p class="card-text">{contact::SUCCESS_LEAD}</p>
                            </div>
                        </Show>
                    </div>

                    <aside class="contact-aside">
                        <div class="card">
                            <h3 class="card-title">"Why Contact Us?"</h3>
                            <ul class="check-list">
                                {contact::WHY_CONTACT
                                    .iter()
                                    .map(|reason| {
                                        view! {
                                            <li>
                                                <i class=Icon::CheckCircle.class() aria-hidden="true"></i>
                                                {*reason}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="card">
                            <h3 class="card-title">"Our Offices"</h3>
                            {contact::OFFICES
                                .iter()
                                .map(|office| {
                                    view! {
                                        <div class="office">
                                            <i class=Icon::MapPin.class() aria-hidden="true"></i>
                                            <div>
                                                <h4>{office.city}</h4>
                                                <p>{office.address}</p>
                                                <p>{office.country}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="card">
                            <h3 class="card-title">"Follow Us"</h3>
                            <p class="card-text">{contact::SOCIAL_LEAD}</p>
                            <div class="social-row">
                                {contact::SOCIAL
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a href=social.href class="social-link" aria-label=social.name>
                                                <i class=social.icon.class() aria-hidden="true"></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </aside>
                </div>
            </section>

            <Footer />
        </div>
    }
}
