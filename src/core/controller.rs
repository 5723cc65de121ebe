//! Landing page controller
//!
//! Owns the enquiry form lifecycle and both modals. Everything it touches on
//! the page goes through [`PageSurface`], every delay through [`Scheduler`],
//! so the whole flow runs without a browser.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::config::LandingConfig;
use super::modal::{ModalKind, ModalSet};
use super::phone::format_phone_input;
use super::scroll::{ScrollEffects, scroll_effects};
use super::submission::FormSubmission;
use super::submitter::{SubmitReceipt, Submitter};
use super::surface::{PageSurface, Scheduler, ScrollTarget};
use super::validation::{ValidationError, validate_submission};

/// Alert shown when the submission backend fails
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "There was an error submitting your application. Please try again or contact us directly.";

/// Lines logged once the controller is running
pub const STARTUP_BANNER: [&str; 3] = [
    "🎓 ANVIKSHIKI Law Department Landing Page Loaded",
    "📧 For inquiries: admissions@kanchiuniv.ac.in",
    "📞 Phone: +91 44 2747 2005",
];

/// Where the enquiry form currently is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The page has no enquiry form
    NoForm,
    /// A rule failed; the user was alerted
    Invalid(ValidationError),
    Submitted(SubmitReceipt),
    /// The backend failed; the user was alerted and the form kept its values
    Failed,
}

/// Reaction to a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyResponse {
    /// The focused element should be activated as if clicked
    pub activate_target: bool,
}

pub struct LandingController {
    config: LandingConfig,
    surface: Rc<dyn PageSurface>,
    scheduler: Rc<dyn Scheduler>,
    submitter: Rc<dyn Submitter>,
    modals: Cell<ModalSet>,
    form_state: Cell<FormState>,
    weak_self: Weak<LandingController>,
}

impl LandingController {
    pub fn new(
        config: LandingConfig,
        surface: Rc<dyn PageSurface>,
        scheduler: Rc<dyn Scheduler>,
        submitter: Rc<dyn Submitter>,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak_self| Self {
            config,
            surface,
            scheduler,
            submitter,
            modals: Cell::new(ModalSet::default()),
            form_state: Cell::new(FormState::Idle),
            weak_self: weak_self.clone(),
        })
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn form_state(&self) -> FormState {
        self.form_state.get()
    }

    pub fn is_modal_active(&self, kind: ModalKind) -> bool {
        self.modals.get().is_active(kind)
    }

    /// Page-ready hook: log the banner and arm the advertisement popup.
    pub fn start(&self) {
        for line in STARTUP_BANNER {
            tracing::info!("{}", line);
        }

        self.after(self.config.ad_popup_delay(), |controller| {
            controller.show_ad_modal();
        });
    }

    /// Run `task` against this controller after `delay`, if it still exists.
    fn after(&self, delay: Duration, task: impl FnOnce(&LandingController) + 'static) {
        let weak = self.weak_self.clone();
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(controller) = weak.upgrade() {
                    task(&controller);
                }
            }),
        );
    }

    fn update_modals<R>(&self, update: impl FnOnce(&mut ModalSet) -> R) -> R {
        let mut modals = self.modals.get();
        let result = update(&mut modals);
        self.modals.set(modals);
        result
    }

    // ------------------------------------------------------------------
    // Enquiry form
    // ------------------------------------------------------------------

    /// Validate the form, submit it and report the result to the user.
    ///
    /// The submit button is restored whatever the outcome. A second call
    /// while one is in flight is only prevented by the disabled button.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(fields) = self.surface.read_form() else {
            return SubmitOutcome::NoForm;
        };

        self.form_state.set(FormState::Validating);
        let submission = FormSubmission::now(fields);

        if let Err(error) = validate_submission(&submission) {
            self.form_state.set(FormState::Idle);
            self.surface.alert(&error.to_string());
            return SubmitOutcome::Invalid(error);
        }

        self.form_state.set(FormState::Submitting);
        self.surface.begin_submit();

        let outcome = match self.submitter.submit(&submission).await {
            Ok(receipt) => {
                self.form_state.set(FormState::Success);
                self.show_success_modal();
                self.surface.reset_form();
                SubmitOutcome::Submitted(receipt)
            }
            Err(error) => {
                self.form_state.set(FormState::Error);
                self.surface.alert(SUBMIT_FAILURE_MESSAGE);
                tracing::error!("Form submission error: {}", error);
                SubmitOutcome::Failed
            }
        };

        self.surface.end_submit();
        self.form_state.set(FormState::Idle);
        outcome
    }

    /// New phone field value for a raw input, if it should change
    pub fn on_phone_input(&self, raw: &str) -> Option<String> {
        format_phone_input(raw)
    }

    // ------------------------------------------------------------------
    // Modals
    // ------------------------------------------------------------------

    /// Activate `kind` on the page. Returns the opening's generation, or
    /// `None` when the modal element is missing.
    fn open_modal(&self, kind: ModalKind) -> Option<u64> {
        if !self.surface.set_modal_active(kind, true) {
            return None;
        }

        let generation = self.update_modals(|m| m.open(kind));
        if kind.locks_scroll() {
            self.surface.set_scroll_locked(true);
        }
        Some(generation)
    }

    fn hide_modal(&self, kind: ModalKind) {
        if self.surface.set_modal_active(kind, false) {
            self.update_modals(|m| m.close(kind));
            if kind.locks_scroll() {
                self.surface.set_scroll_locked(false);
            }
        }
    }

    /// Show the confirmation and arm its auto-close.
    pub fn show_success_modal(&self) {
        let Some(generation) = self.open_modal(ModalKind::Success) else {
            return;
        };

        self.after(self.config.success_auto_close(), move |controller| {
            if controller.modals.get().is_current_success(generation) {
                controller.close_success_modal();
            }
        });
    }

    pub fn close_success_modal(&self) {
        self.hide_modal(ModalKind::Success);
    }

    pub fn show_ad_modal(&self) {
        if self.open_modal(ModalKind::Advertisement).is_none() {
            tracing::error!("Ad modal element not found");
            return;
        }

        tracing::info!("Advertisement popup shown");
    }

    pub fn close_ad_modal(&self) {
        self.hide_modal(ModalKind::Advertisement);
    }

    /// Close the advertisement, then bring the application form into view.
    pub fn close_ad_modal_and_scroll(&self) {
        self.close_ad_modal();
        self.after(self.config.ad_scroll_delay(), |controller| {
            controller.scroll_to(ScrollTarget::ApplicationForm);
        });
    }

    pub fn close_modal(&self, kind: ModalKind) {
        self.hide_modal(kind);
    }

    /// Click anywhere on the page. Only a click landing on a modal's own
    /// backdrop element closes that modal.
    pub fn on_document_click(&self, target_id: &str) {
        if let Some(kind) = ModalKind::from_element_id(target_id) {
            self.close_modal(kind);
        }
    }

    // ------------------------------------------------------------------
    // Keyboard, pointer and scroll
    // ------------------------------------------------------------------

    pub fn on_key_down(&self, key: &str, target_is_cta: bool) -> KeyResponse {
        match key {
            "Escape" => {
                self.close_ad_modal();
                self.close_success_modal();
                KeyResponse::default()
            }
            "Tab" => {
                self.surface.set_keyboard_nav(true);
                KeyResponse::default()
            }
            "Enter" => KeyResponse {
                activate_target: target_is_cta,
            },
            _ => KeyResponse::default(),
        }
    }

    pub fn on_mouse_down(&self) {
        self.surface.set_keyboard_nav(false);
    }

    pub fn on_scroll(&self, offset: f64, viewport_height: f64) -> ScrollEffects {
        scroll_effects(
            offset,
            viewport_height,
            self.config.header_shadow_offset,
            self.config.parallax_factor,
        )
    }

    pub fn scroll_to(&self, target: ScrollTarget) {
        self.surface.scroll_to(target);
    }
}
