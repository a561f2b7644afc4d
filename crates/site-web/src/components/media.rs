//! Audio and video players with a custom transport bar

use leptos::ev::MouseEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use site_core::content::Icon;
use site_core::Playback;
use wasm_bindgen::JsCast;
use web_sys::HtmlMediaElement;

/// Start or pause the element to match the toggled state.
fn toggle_playback(el: &HtmlMediaElement, set_playback: WriteSignal<Playback>) {
    let playing = set_playback.try_update(Playback::toggle).unwrap_or(false);
    if playing {
        if let Err(err) = el.play() {
            warn!("media playback refused: {err:?}");
            set_playback.update(|p| p.playing = false);
        }
    } else if let Err(err) = el.pause() {
        warn!("media pause failed: {err:?}");
    }
}

/// Jump to the position under the pointer. Does nothing until the
/// duration is known.
fn seek_to_pointer(ev: &MouseEvent, el: &HtmlMediaElement, set_playback: WriteSignal<Playback>) {
    let Some(bar) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let rect = bar.get_bounding_client_rect();
    let target = set_playback
        .try_update(|p| p.seek(f64::from(ev.client_x()), rect.left(), rect.width()))
        .flatten();
    if let Some(seconds) = target {
        el.set_current_time(seconds);
    }
}

/// Progress track and `elapsed / total` label
fn transport(
    playback: ReadSignal<Playback>,
    on_seek: impl FnMut(MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="media-progress" on:click=on_seek>
            <div
                class="media-progress-fill"
                style=move || format!("width: {:.2}%;", playback.with(Playback::progress))
            ></div>
        </div>
        <span class="media-time">{move || playback.with(Playback::time_label)}</span>
    }
}

fn play_icon(playback: ReadSignal<Playback>) -> impl Fn() -> &'static str + Send + Sync + 'static {
    move || {
        if playback.with(|p| p.playing) {
            Icon::Pause.class()
        } else {
            Icon::Play.class()
        }
    }
}

/// Audio sample with play/pause and a seekable progress bar
#[component]
pub fn AudioPlayer(src: &'static str, title: &'static str) -> impl IntoView {
    let audio = NodeRef::<leptos::html::Audio>::new();
    let (playback, set_playback) = signal(Playback::new());

    let on_seek = move |ev: MouseEvent| {
        if let Some(el) = audio.get() {
            seek_to_pointer(&ev, &el, set_playback);
        }
    };

    view! {
        <div class="media-player audio-player">
            <audio
                node_ref=audio
                src=src
                preload="metadata"
                on:loadedmetadata=move |_| {
                    if let Some(el) = audio.get() {
                        set_playback.update(|p| p.on_loaded(el.duration()));
                    }
                }
                on:timeupdate=move |_| {
                    if let Some(el) = audio.get() {
                        set_playback.update(|p| p.on_time_update(el.current_time()));
                    }
                }
                on:ended=move |_| set_playback.update(Playback::on_ended)
            ></audio>

            <button
                class="media-toggle"
                aria-label="Play or pause"
                on:click=move |_| {
                    if let Some(el) = audio.get() {
                        toggle_playback(&el, set_playback);
                    }
                }
            >
                <i class=play_icon(playback) aria-hidden="true"></i>
            </button>

            <div class="media-body">
                <span class="media-title">{title}</span>
                {transport(playback, on_seek)}
            </div>
        </div>
    }
}

/// Video with a poster frame and the same transport as [`AudioPlayer`]
#[component]
pub fn VideoPlayer(src: &'static str, poster: &'static str) -> impl IntoView {
    let video = NodeRef::<leptos::html::Video>::new();
    let (playback, set_playback) = signal(Playback::new());

    let toggle = move |_| {
        if let Some(el) = video.get() {
            toggle_playback(&el, set_playback);
        }
    };
    let on_seek = move |ev: MouseEvent| {
        if let Some(el) = video.get() {
            seek_to_pointer(&ev, &el, set_playback);
        }
    };

    view! {
        <div class="media-player video-player">
            <video
                node_ref=video
                src=src
                poster=poster
                preload="metadata"
                playsinline=true
                on:click=toggle
                on:loadedmetadata=move |_| {
                    if let Some(el) = video.get() {
                        set_playback.update(|p| p.on_loaded(el.duration()));
                    }
                }
                on:timeupdate=move |_| {
                    if let Some(el) = video.get() {
                        set_playback.update(|p| p.on_time_update(el.current_time()));
                    }
                }
                on:ended=move |_| set_playback.update(Playback::on_ended)
            ></video>

            <div class="media-controls">
                <button class="media-toggle" aria-label="Play or pause" on:click=toggle>
                    <i class=play_icon(playback) aria-hidden="true"></i>
                </button>
                {transport(playback, on_seek)}
            </div>
        </div>
    }
}
