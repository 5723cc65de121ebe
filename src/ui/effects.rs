//! Event listeners wiring the page to the controller

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent,
    MouseEvent, Window,
};

use crate::core::ripple::{CTA_CLASS, relative_position, ripple_style};
use crate::core::surface::{FORM_ID, HEADER_ID, HERO_SELECTOR, PHONE_FIELD_ID};
use crate::core::{LandingController, TrackedEvent, track_event};
use crate::ui::dom::{query_all, set_styles};
use crate::ui::timers::timer_millis;

/// Cards whose hover is tracked
const PROGRAM_CARD_SELECTOR: &str = ".program-card";
const PROGRAM_TITLE_SELECTOR: &str = ".program-title";

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to listen for '{}': {:?}", event, e);
    }
    // Leak the closure to keep the listener alive
    closure.forget();
}

/// Attach every listener the page needs.
pub fn attach_listeners(controller: &Rc<LandingController>, document: &Document, window: &Window) {
    attach_scroll_effects(controller, document, window);
    attach_form(controller, document);
    attach_phone_formatting(controller, document);
    attach_cta_buttons(controller, document);
    attach_program_tracking(document);
    attach_keyboard_and_pointer(controller, document);
}

fn attach_scroll_effects(controller: &Rc<LandingController>, document: &Document, window: &Window) {
    let header = document.get_element_by_id(HEADER_ID);
    let hero = document.query_selector(HERO_SELECTOR).ok().flatten();
    let controller = controller.clone();
    let win = window.clone();

    listen(window, "scroll", move |_| {
        let offset = win.scroll_y().unwrap_or_default();
        let viewport_height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let effects = controller.on_scroll(offset, viewport_height);

        if let Some(header) = &header {
            set_styles(header, &[("box-shadow", effects.header_shadow)]);
        }
        if let (Some(hero), Some(transform)) = (&hero, effects.hero_transform.as_deref()) {
            set_styles(hero, &[("transform", transform)]);
        }
    });
}

fn attach_form(controller: &Rc<LandingController>, document: &Document) {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return;
    };
    let controller = controller.clone();

    listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            let outcome = controller.submit().await;
            tracing::debug!(?outcome, "Enquiry form submit finished");
        });
    });
}

fn attach_phone_formatting(controller: &Rc<LandingController>, document: &Document) {
    let Some(phone) = document
        .get_element_by_id(PHONE_FIELD_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let controller = controller.clone();
    let input = phone.clone();

    listen(&phone, "input", move |_| {
        if let Some(formatted) = controller.on_phone_input(&input.value()) {
            input.set_value(&formatted);
        }
    });
}

fn attach_cta_buttons(controller: &Rc<LandingController>, document: &Document) {
    let ripple_ms = timer_millis(controller.config().ripple_duration());

    for button in query_all(document, &format!(".{CTA_CLASS}")) {
        let document = document.clone();
        let target = button.clone();

        listen(&button, "click", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                spawn_ripple(&document, &target, mouse, ripple_ms);
            }
            let label = target.text_content().unwrap_or_default();
            track_event(&TrackedEvent::cta_click(&label));
        });
    }
}

/// Expanding circle at the click point, removed once its animation ends
fn spawn_ripple(document: &Document, button: &Element, mouse: &MouseEvent, lifetime_ms: u32) {
    let rect = button.get_bounding_client_rect();
    let (x, y) = relative_position(
        (f64::from(mouse.client_x()), f64::from(mouse.client_y())),
        (rect.left(), rect.top()),
    );

    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let _ = ripple.set_attribute("style", &ripple_style(x, y));

    if button.append_child(&ripple).is_ok() {
        Timeout::new(lifetime_ms, move || ripple.remove()).forget();
    }
}

fn attach_program_tracking(document: &Document) {
    for card in query_all(document, PROGRAM_CARD_SELECTOR) {
        let target = card.clone();

        listen(&card, "mouseenter", move |_| {
            let title = target
                .query_selector(PROGRAM_TITLE_SELECTOR)
                .ok()
                .flatten()
                .and_then(|title| title.text_content());
            if let Some(title) = title {
                track_event(&TrackedEvent::program_hover(&title));
            }
        });
    }
}

fn attach_keyboard_and_pointer(controller: &Rc<LandingController>, document: &Document) {
    let on_key = controller.clone();
    listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
        let on_cta = target
            .as_ref()
            .is_some_and(|t| t.class_list().contains(CTA_CLASS));

        if on_key.on_key_down(&key_event.key(), on_cta).activate_target {
            if let Some(target) = target {
                target.click();
            }
        }
    });

    let on_mouse = controller.clone();
    listen(document, "mousedown", move |_| on_mouse.on_mouse_down());

    let on_click = controller.clone();
    listen(document, "click", move |event| {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            on_click.on_document_click(&target.id());
        }
    });
}
