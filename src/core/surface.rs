//! Capabilities the controller needs from its host
//!
//! The browser binding implements these over the live document and the
//! window timers; tests implement them in memory.

use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::modal::ModalKind;
use super::submission::FormFields;

/// Id of the enquiry form element
pub const FORM_ID: &str = "enquiryForm";
/// Ids of the enquiry form fields, in record order
pub const FIELD_IDS: [&str; 6] = [
    "fullName",
    "email",
    "phone",
    "program",
    "qualification",
    "message",
];
/// Id of the phone field that gets live formatting
pub const PHONE_FIELD_ID: &str = "phone";
/// Selector of the submit button inside the form
pub const SUBMIT_SELECTOR: &str = ".form-submit";
/// Id of the page header
pub const HEADER_ID: &str = "header";
/// Selector of the hero block moved by the parallax effect
pub const HERO_SELECTOR: &str = ".hero";
/// Body class enabling visible focus outlines
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

/// Scroll destinations reachable from the page's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    ApplicationForm,
    Programs,
}

impl ScrollTarget {
    pub fn element_id(self) -> &'static str {
        match self {
            ScrollTarget::ApplicationForm => "application-form",
            ScrollTarget::Programs => "programs",
        }
    }
}

/// Document mutations and reads the controller performs.
///
/// Every method tolerates missing elements: reads return `None`, writes
/// do nothing.
pub trait PageSurface {
    /// Current values of the enquiry form, `None` when the form is missing
    fn read_form(&self) -> Option<FormFields>;
    fn reset_form(&self);
    /// Disable the submit button and show the loading label
    fn begin_submit(&self);
    /// Restore the submit button label and re-enable it
    fn end_submit(&self);
    /// Toggle a modal. Returns `false` when its element is missing.
    fn set_modal_active(&self, kind: ModalKind, active: bool) -> bool;
    fn set_scroll_locked(&self, locked: bool);
    fn set_keyboard_nav(&self, enabled: bool);
    /// Blocking message to the user
    fn alert(&self, message: &str);
    /// Smooth-scroll so the target's top aligns with the viewport
    fn scroll_to(&self, target: ScrollTarget);
}

/// Timer capability
pub trait Scheduler {
    /// Run `task` once after `delay`. Fire-and-forget; there is no cancel.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
    /// Future resolving after `delay`
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;
}
