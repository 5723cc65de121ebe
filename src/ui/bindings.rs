//! Functions the page markup calls from `onclick` attributes

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::core::{LandingController, ModalKind, ScrollTarget};

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<LandingController>>> = const { RefCell::new(None) };
}

/// Make `controller` the target of the exported functions.
pub fn install(controller: Rc<LandingController>) {
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}

/// Run `f` against the installed controller; a no-op before start-up.
fn with_controller(f: impl FnOnce(&LandingController)) {
    let controller = CONTROLLER.with(|slot| slot.borrow().clone());
    match controller {
        Some(controller) => f(&controller),
        None => tracing::warn!("Landing controller is not running yet"),
    }
}

#[wasm_bindgen(js_name = scrollToForm)]
pub fn scroll_to_form() {
    with_controller(|c| c.scroll_to(ScrollTarget::ApplicationForm));
}

#[wasm_bindgen(js_name = scrollToPrograms)]
pub fn scroll_to_programs() {
    with_controller(|c| c.scroll_to(ScrollTarget::Programs));
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_controller(|c| c.close_modal(ModalKind::Success));
}

#[wasm_bindgen(js_name = closeAdModal)]
pub fn close_ad_modal() {
    with_controller(|c| c.close_modal(ModalKind::Advertisement));
}

#[wasm_bindgen(js_name = closeAdModalAndScroll)]
pub fn close_ad_modal_and_scroll() {
    with_controller(LandingController::close_ad_modal_and_scroll);
}
