//! Browser binding of the landing page controller
//!
//! Builds the controller over the live document once the page is ready,
//! then hooks up observers, listeners and the functions exported to markup.

pub mod bindings;
pub mod dom;
pub mod effects;
pub mod observers;
pub mod storage;
pub mod styles;
pub mod timers;

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::core::{LandingConfig, LandingController, SimulatedSubmitter};
use dom::DomSurface;
use storage::LocalStorageStore;
use timers::BrowserScheduler;

/// Body attribute holding an optional JSON config override
const CONFIG_ATTRIBUTE: &str = "data-landing-config";

/// Start the controller now, or on `DOMContentLoaded` while still loading.
pub fn mount_when_ready() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        effects::listen(&document, "DOMContentLoaded", move |_| {
            mount(&ready_window, &ready_document);
        });
    } else {
        mount(&window, &document);
    }
}

fn load_config(document: &Document) -> LandingConfig {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

    LandingConfig::from_optional_json(raw.as_deref()).unwrap_or_else(|e| {
        tracing::error!("{}; using defaults", e);
        LandingConfig::default()
    })
}

/// Build the controller and attach it to the page.
pub fn mount(window: &Window, document: &Document) -> Rc<LandingController> {
    let config = load_config(document);

    let scheduler = Rc::new(BrowserScheduler);
    let submitter = Rc::new(SimulatedSubmitter::new(
        Rc::new(LocalStorageStore),
        scheduler.clone(),
        config.storage_key.clone(),
        config.submit_delay(),
    ));
    let surface = Rc::new(DomSurface::new(document.clone()));

    let controller = LandingController::new(config, surface, scheduler, submitter);

    styles::inject_styles(document);
    observers::observe_page(document, controller.config());
    effects::attach_listeners(&controller, document, window);
    bindings::install(controller.clone());

    controller.start();
    controller
}
