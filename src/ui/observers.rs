//! Visibility-triggered reveals, stat counters and lazy images

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::core::LandingConfig;
use crate::core::counter::{CounterAnimation, parse_target, should_animate};
use crate::core::reveal::{
    CARD_REVEAL, CARD_SELECTOR, COUNTER_SELECTOR, LAZY_IMAGE_SELECTOR, REVEALED_OPACITY,
    REVEALED_TRANSFORM, RevealStyle, RevealTracker, SECTION_REVEAL, SECTION_SELECTOR,
    STATS_SELECTOR, stagger_delay,
};
use crate::ui::dom::{query_all, query_all_in, set_styles};
use crate::ui::timers::timer_millis;

type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Class added to an image once its real source is set
const LOADED_CLASS: &str = "loaded";

/// Attach every visibility observer the page uses.
pub fn observe_page(document: &Document, config: &LandingConfig) {
    observe_stats(document, config);
    observe_cards(document, config);
    observe_sections(document, config);
    observe_lazy_images(document);
}

/// Observe `elements` and call `on_reveal` the first time each becomes
/// visible, with its position in the notification batch. Each element is
/// unobserved once revealed and the observer disconnects after the last one.
fn observe_once<F>(elements: Vec<Element>, threshold: Option<f64>, mut on_reveal: F)
where
    F: FnMut(&Element, usize) + 'static,
{
    if elements.is_empty() {
        return;
    }

    let mut tracker = RevealTracker::new();
    for key in 0..elements.len() {
        tracker.watch(key);
    }

    let watched = elements.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for (batch_index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = watched.iter().position(|el| *el == target) else {
                    continue;
                };

                if tracker.on_visibility(&key, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    on_reveal(&target, batch_index);
                }
            }
            if tracker.is_empty() {
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for element in &elements {
                observer.observe(element);
            }
            // Keep the callback alive for the lifetime of the page
            callback.forget();
        }
        Err(e) => tracing::warn!("IntersectionObserver unavailable: {:?}", e),
    }
}

fn hide(element: &Element, style: RevealStyle) {
    set_styles(
        element,
        &[
            ("opacity", style.opacity),
            ("transform", style.transform),
            ("transition", style.transition),
        ],
    );
}

fn reveal(element: &Element) {
    set_styles(
        element,
        &[
            ("opacity", REVEALED_OPACITY),
            ("transform", REVEALED_TRANSFORM),
        ],
    );
}

fn observe_stats(document: &Document, config: &LandingConfig) {
    let Ok(Some(stats)) = document.query_selector(STATS_SELECTOR) else {
        return;
    };

    let frames = config.counter_frames();
    observe_once(vec![stats], Some(config.stats_threshold), move |section, _| {
        for counter in query_all_in(section, COUNTER_SELECTOR) {
            if should_animate(&counter.text_content().unwrap_or_default()) {
                animate_counter(counter, frames);
            }
        }
    });
}

/// Count `element` up to its `data-target`, one step per animation frame.
fn animate_counter(element: Element, frames: f64) {
    let Some(target) = element
        .get_attribute("data-target")
        .as_deref()
        .and_then(parse_target)
    else {
        return;
    };

    let mut animation = CounterAnimation::new(target, frames);
    let handle: FrameHandle = Rc::new(RefCell::new(None));
    let next = handle.clone();

    *handle.borrow_mut() = Some(Closure::new(move || {
        let Some(frame) = animation.next_frame() else {
            return;
        };
        element.set_text_content(Some(&frame.text));

        if frame.finished {
            // Drop our own closure; nothing schedules it again
            let _ = next.borrow_mut().take();
        } else {
            request_frame(&next);
        }
    }));

    request_frame(&handle);
}

fn request_frame(handle: &FrameHandle) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = handle.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

fn observe_cards(document: &Document, config: &LandingConfig) {
    let cards = query_all(document, CARD_SELECTOR);
    for card in &cards {
        hide(card, CARD_REVEAL);
    }

    let step_ms = config.card_stagger_ms;
    observe_once(cards, Some(config.reveal_threshold), move |card, index| {
        let card = card.clone();
        Timeout::new(timer_millis(stagger_delay(index, step_ms)), move || {
            reveal(&card);
        })
        .forget();
    });
}

fn observe_sections(document: &Document, config: &LandingConfig) {
    let sections = query_all(document, SECTION_SELECTOR);
    for section in &sections {
        hide(section, SECTION_REVEAL);
    }

    observe_once(sections, Some(config.reveal_threshold), |section, _| {
        reveal(section);
    });
}

fn observe_lazy_images(document: &Document) {
    observe_once(query_all(document, LAZY_IMAGE_SELECTOR), None, |img, _| {
        if let Some(src) = img.get_attribute("data-src") {
            let _ = img.set_attribute("src", &src);
        }
        let _ = img.class_list().add_1(LOADED_CLASS);
    });
}
