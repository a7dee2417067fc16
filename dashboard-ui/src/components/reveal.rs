//! Reveal Hook
//!
//! Drives a `RevealState` from the DOM: mount-triggered elements reveal after
//! the first frame, viewport-triggered ones on their first intersection. The
//! observer unobserves its element as soon as the entrance starts.

use leptos::html::Div;
use leptos::*;
use tutorboard::dashboard::{Motion, RevealState, RevealTrigger};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

/// Delay before a mount reveal, long enough for the hidden style to paint
const FIRST_FRAME_MS: u32 = 16;

/// Attach one-shot entrance behaviour to a `<div>`
///
/// Returns the node ref to put on the element and its reactive inline style.
pub fn use_reveal(motion: Motion) -> (NodeRef<Div>, Signal<String>) {
    let node_ref = create_node_ref::<Div>();
    let state = create_rw_signal(RevealState::new(motion));

    match motion.trigger {
        RevealTrigger::Mount => {
            gloo_timers::callback::Timeout::new(FIRST_FRAME_MS, move || {
                state.update(|s| {
                    s.on_mount();
                });
            })
            .forget();
        }
        RevealTrigger::FirstViewportEntry => {
            create_effect(move |observed: Option<bool>| {
                if observed == Some(true) {
                    return true;
                }
                let Some(el) = node_ref.get() else {
                    return false;
                };
                if !state.with_untracked(RevealState::wants_observer) {
                    return true;
                }
                match observe_first_entry(&el, state) {
                    Ok(()) => true,
                    Err(e) => {
                        web_sys::console::warn_1(&e);
                        // No IntersectionObserver: reveal immediately
                        state.update(|s| {
                            s.on_visibility(true);
                        });
                        true
                    }
                }
            });
        }
    }

    let style = Signal::derive(move || state.with(RevealState::style));
    (node_ref, style)
}

fn observe_first_entry(
    target: &web_sys::Element,
    state: RwSignal<RevealState>,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let started = state
                    .try_update(|s| s.on_visibility(entry.is_intersecting()))
                    .unwrap_or(false);
                if started {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                }
            }
        },
    );

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(target);
    callback.forget();

    Ok(())
}
