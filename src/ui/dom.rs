//! [`PageSurface`] over the live document

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::core::modal::ACTIVE_CLASS;
use crate::core::surface::{FIELD_IDS, FORM_ID, KEYBOARD_NAV_CLASS, SUBMIT_SELECTOR};
use crate::core::{FormFields, ModalKind, PageSurface, ScrollTarget};

/// Submit button content while a submission is in flight
const SUBMITTING_LABEL: &str = r#"
    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" style="animation: spin 1s linear infinite;">
        <circle cx="12" cy="12" r="10"></circle>
    </svg>
    Submitting...
"#;

pub struct DomSurface {
    document: Document,
    /// Submit button markup saved while the loading label is shown
    saved_label: RefCell<Option<String>>,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            saved_label: RefCell::new(None),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn form(&self) -> Option<HtmlFormElement> {
        self.element(FORM_ID)?.dyn_into::<HtmlFormElement>().ok()
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.form()?
            .query_selector(SUBMIT_SELECTOR)
            .ok()??
            .dyn_into::<HtmlButtonElement>()
            .ok()
    }

    /// `value` of an input, select or textarea; empty when missing
    fn field_value(&self, id: &str) -> String {
        self.element(id)
            .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }
}

impl PageSurface for DomSurface {
    fn read_form(&self) -> Option<FormFields> {
        self.form()?;

        let [full_name, email, phone, program, qualification, message] =
            FIELD_IDS.map(|id| self.field_value(id));

        Some(FormFields {
            full_name,
            email,
            phone,
            program,
            qualification,
            message,
        })
    }

    fn reset_form(&self) {
        if let Some(form) = self.form() {
            form.reset();
        }
    }

    fn begin_submit(&self) {
        if let Some(button) = self.submit_button() {
            self.saved_label.replace(Some(button.inner_html()));
            button.set_inner_html(SUBMITTING_LABEL);
            button.set_disabled(true);
        }
    }

    fn end_submit(&self) {
        if let Some(button) = self.submit_button() {
            if let Some(label) = self.saved_label.take() {
                button.set_inner_html(&label);
            }
            button.set_disabled(false);
        }
    }

    fn set_modal_active(&self, kind: ModalKind, active: bool) -> bool {
        let Some(modal) = self.element(kind.element_id()) else {
            return false;
        };

        let classes = modal.class_list();
        let _ = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        true
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
        }
    }

    fn set_keyboard_nav(&self, enabled: bool) {
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            let _ = if enabled {
                classes.add_1(KEYBOARD_NAV_CLASS)
            } else {
                classes.remove_1(KEYBOARD_NAV_CLASS)
            };
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn scroll_to(&self, target: ScrollTarget) {
        if let Some(element) = self.element(target.element_id()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Set inline style properties on an element, ignoring non-HTML elements.
pub fn set_styles(element: &Element, properties: &[(&str, &str)]) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let style = element.style();
        for (name, value) in properties {
            let _ = style.set_property(name, value);
        }
    }
}

/// Elements matching `selector`, in document order
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Elements matching `selector` below `root`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(nodes: NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
