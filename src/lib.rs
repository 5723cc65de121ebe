//! Anvikshiki Law Department landing page
//!
//! Client-side behavior for the admissions landing page, built with
//! WebAssembly: scroll reveals, stat counters, the enquiry form and its
//! modals. `core` holds the browser-independent rules; `ui` binds them to
//! the live document.

pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
#[cfg(feature = "hydrate")]
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    ui::mount_when_ready();
}
