#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use crate::core::controller::SUBMIT_FAILURE_MESSAGE;
    use crate::core::storage::StorageError;
    use crate::core::{
        FormFields, FormState, KeyValueStore, LandingConfig, LandingController, MemoryStore,
        ModalKind, PageSurface, Scheduler, ScrollTarget, SimulatedSubmitter, SubmitError,
        SubmitOutcome, SubmitReceipt, Submitter, SubmissionLog, ValidationError,
    };

    // ========================================================================
    // Test doubles
    // ========================================================================

    /// Page stand-in recording every mutation
    #[derive(Default)]
    struct FakePage {
        form: RefCell<Option<FormFields>>,
        has_success_modal: Cell<bool>,
        has_ad_modal: Cell<bool>,
        success_active: Cell<bool>,
        ad_active: Cell<bool>,
        scroll_locked: Cell<bool>,
        keyboard_nav: Cell<bool>,
        submit_busy: Cell<bool>,
        busy_transitions: RefCell<Vec<bool>>,
        alerts: RefCell<Vec<String>>,
        scrolls: RefCell<Vec<ScrollTarget>>,
    }

    impl FakePage {
        fn full() -> Rc<Self> {
            let page = Self::default();
            page.form.replace(Some(FormFields::default()));
            page.has_success_modal.set(true);
            page.has_ad_modal.set(true);
            Rc::new(page)
        }

        fn fill(&self, fields: FormFields) {
            self.form.replace(Some(fields));
        }

        fn form_is_empty(&self) -> bool {
            self.form.borrow().as_ref() == Some(&FormFields::default())
        }
    }

    impl PageSurface for FakePage {
        fn read_form(&self) -> Option<FormFields> {
            self.form.borrow().clone()
        }

        fn reset_form(&self) {
            if let Some(form) = self.form.borrow_mut().as_mut() {
                *form = FormFields::default();
            }
        }

        fn begin_submit(&self) {
            self.submit_busy.set(true);
            self.busy_transitions.borrow_mut().push(true);
        }

        fn end_submit(&self) {
            self.submit_busy.set(false);
            self.busy_transitions.borrow_mut().push(false);
        }

        fn set_modal_active(&self, kind: ModalKind, active: bool) -> bool {
            let (present, flag) = match kind {
                ModalKind::Success => (&self.has_success_modal, &self.success_active),
                ModalKind::Advertisement => (&self.has_ad_modal, &self.ad_active),
            };
            if present.get() {
                flag.set(active);
            }
            present.get()
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn set_keyboard_nav(&self, enabled: bool) {
            self.keyboard_nav.set(enabled);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn scroll_to(&self, target: ScrollTarget) {
            self.scrolls.borrow_mut().push(target);
        }
    }

    /// Virtual clock; timers only fire when the test advances time
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        next_seq: Cell<u64>,
        tasks: RefCell<Vec<(Duration, u64, Box<dyn FnOnce()>)>>,
        sleeps: RefCell<Vec<Duration>>,
    }

    impl ManualScheduler {
        fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        fn advance(&self, by: Duration) {
            let until = self.now.get() + by;
            loop {
                let next = {
                    let mut tasks = self.tasks.borrow_mut();
                    let due = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= until)
                        .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                        .map(|(index, _)| index);
                    due.map(|index| tasks.remove(index))
                };
                match next {
                    Some((at, _, task)) => {
                        self.now.set(at);
                        task();
                    }
                    None => break,
                }
            }
            self.now.set(until);
        }

        fn advance_ms(&self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            let seq = self.next_seq.get();
            self.next_seq.set(seq + 1);
            self.tasks
                .borrow_mut()
                .push((self.now.get() + delay, seq, task));
        }

        fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
            self.sleeps.borrow_mut().push(delay);
            Box::pin(futures::future::ready(()))
        }
    }

    /// Backend that always fails
    struct RejectingSubmitter;

    impl Submitter for RejectingSubmitter {
        fn submit<'a>(
            &'a self,
            _submission: &'a crate::core::FormSubmission,
        ) -> LocalBoxFuture<'a, Result<SubmitReceipt, SubmitError>> {
            Box::pin(async { Err(SubmitError::Rejected("endpoint down".to_string())) })
        }
    }

    /// Storage whose writes always fail, like a full quota
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
            })
        }
    }

    struct Harness {
        page: Rc<FakePage>,
        scheduler: Rc<ManualScheduler>,
        store: Rc<MemoryStore>,
        controller: Rc<LandingController>,
    }

    fn harness() -> Harness {
        harness_with_page(FakePage::full())
    }

    fn harness_with_page(page: Rc<FakePage>) -> Harness {
        let config = LandingConfig::default();
        let scheduler = Rc::new(ManualScheduler::default());
        let store = Rc::new(MemoryStore::new());
        let submitter = Rc::new(SimulatedSubmitter::new(
            store.clone(),
            scheduler.clone(),
            config.storage_key.clone(),
            config.submit_delay(),
        ));
        let controller =
            LandingController::new(config, page.clone(), scheduler.clone(), submitter);

        Harness {
            page,
            scheduler,
            store,
            controller,
        }
    }

    fn valid_fields() -> FormFields {
        FormFields {
            full_name: "Asha Raman".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 9876543210".to_string(),
            program: "ba-llb".to_string(),
            qualification: "12th".to_string(),
            message: "Hostel availability?".to_string(),
        }
    }

    fn stored(h: &Harness) -> usize {
        SubmissionLog::new(h.store.as_ref(), "lawApplications")
            .len()
            .unwrap()
    }

    // ========================================================================
    // Form submission
    // ========================================================================

    #[test]
    fn test_valid_submit_stores_record_opens_modal_and_resets() {
        let h = harness();
        h.page.fill(valid_fields());

        let outcome = block_on(h.controller.submit());

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted(SubmitReceipt { stored_entries: 1 })
        );
        assert_eq!(stored(&h), 1);
        assert!(h.page.success_active.get());
        assert!(h.controller.is_modal_active(ModalKind::Success));
        assert!(h.page.form_is_empty());
        assert!(h.page.alerts.borrow().is_empty());
        assert_eq!(h.controller.form_state(), FormState::Idle);
    }

    #[test]
    fn test_submit_waits_for_simulated_latency() {
        let h = harness();
        h.page.fill(valid_fields());

        block_on(h.controller.submit());

        assert_eq!(*h.scheduler.sleeps.borrow(), [Duration::from_millis(1500)]);
    }

    #[test]
    fn test_stored_record_matches_form() {
        let h = harness();
        h.page.fill(valid_fields());

        block_on(h.controller.submit());

        let records = SubmissionLog::new(h.store.as_ref(), "lawApplications")
            .submissions()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "Asha Raman");
        assert_eq!(records[0].message, "Hostel availability?");
        assert!(records[0].timestamp.ends_with('Z'));
    }

    #[test]
    fn test_button_is_busy_then_restored() {
        let h = harness();
        h.page.fill(valid_fields());

        block_on(h.controller.submit());

        assert_eq!(*h.page.busy_transitions.borrow(), [true, false]);
        assert!(!h.page.submit_busy.get());
    }

    #[test]
    fn test_invalid_submit_alerts_once_and_stores_nothing() {
        let h = harness();
        h.page.fill(FormFields {
            full_name: "Al".to_string(),
            email: "not-an-email".to_string(),
            ..valid_fields()
        });

        let outcome = block_on(h.controller.submit());

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::NameTooShort));
        assert_eq!(
            *h.page.alerts.borrow(),
            ["Please enter your full name (at least 3 characters)"]
        );
        assert_eq!(stored(&h), 0);
        assert!(h.page.busy_transitions.borrow().is_empty());
        assert!(!h.page.success_active.get());
        assert!(!h.page.form_is_empty());
    }

    #[test]
    fn test_nine_digit_phone_rejected() {
        let h = harness();
        h.page.fill(FormFields {
            phone: "987-654-321".to_string(),
            ..valid_fields()
        });

        let outcome = block_on(h.controller.submit());

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::InvalidPhone));
        assert_eq!(stored(&h), 0);
    }

    #[test]
    fn test_missing_program_rejected() {
        let h = harness();
        h.page.fill(FormFields {
            program: String::new(),
            ..valid_fields()
        });

        let outcome = block_on(h.controller.submit());

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::MissingProgram)
        );
        assert_eq!(
            *h.page.alerts.borrow(),
            ["Please select a program of interest"]
        );
    }

    #[test]
    fn test_backend_failure_alerts_and_keeps_form() {
        let page = FakePage::full();
        page.fill(valid_fields());
        let scheduler = Rc::new(ManualScheduler::default());
        let controller = LandingController::new(
            LandingConfig::default(),
            page.clone(),
            scheduler,
            Rc::new(RejectingSubmitter),
        );

        let outcome = block_on(controller.submit());

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(*page.alerts.borrow(), [SUBMIT_FAILURE_MESSAGE]);
        assert!(SUBMIT_FAILURE_MESSAGE.starts_with("There was an error submitting"));
        assert_eq!(page.form.borrow().as_ref(), Some(&valid_fields()));
        assert!(!page.success_active.get());
        assert_eq!(*page.busy_transitions.borrow(), [true, false]);
        assert_eq!(controller.form_state(), FormState::Idle);
    }

    #[test]
    fn test_storage_failure_rejects_submission() {
        let page = FakePage::full();
        page.fill(valid_fields());
        let scheduler = Rc::new(ManualScheduler::default());
        let submitter = Rc::new(SimulatedSubmitter::new(
            Rc::new(FullStore),
            scheduler.clone(),
            "lawApplications",
            Duration::from_millis(1500),
        ));
        let controller = LandingController::new(
            LandingConfig::default(),
            page.clone(),
            scheduler.clone(),
            submitter,
        );

        let outcome = block_on(controller.submit());

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(scheduler.sleeps.borrow().is_empty());
        assert_eq!(page.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_submit_without_form_is_noop() {
        let page = Rc::new(FakePage::default());
        let h = harness_with_page(page);

        assert_eq!(block_on(h.controller.submit()), SubmitOutcome::NoForm);
        assert!(h.page.alerts.borrow().is_empty());
    }

    #[test]
    fn test_repeated_submits_append() {
        let h = harness();
        for _ in 0..3 {
            h.page.fill(valid_fields());
            block_on(h.controller.submit());
        }

        assert_eq!(stored(&h), 3);
    }

    // ========================================================================
    // Success modal
    // ========================================================================

    #[test]
    fn test_success_modal_auto_closes_after_five_seconds() {
        let h = harness();
        h.page.fill(valid_fields());
        block_on(h.controller.submit());

        h.scheduler.advance_ms(4999);
        assert!(h.page.success_active.get());

        h.scheduler.advance_ms(1);
        assert!(!h.page.success_active.get());
        assert!(!h.controller.is_modal_active(ModalKind::Success));
    }

    #[test]
    fn test_stale_auto_close_ignores_reopened_modal() {
        let h = harness();
        h.controller.show_success_modal();
        h.scheduler.advance_ms(3000);
        h.controller.close_success_modal();
        h.controller.show_success_modal();

        h.scheduler.advance_ms(2000);
        assert!(h.page.success_active.get());

        h.scheduler.advance_ms(3000);
        assert!(!h.page.success_active.get());
    }

    #[test]
    fn test_backdrop_click_closes_matching_modal_only() {
        let h = harness();
        h.controller.show_success_modal();
        h.controller.show_ad_modal();

        h.controller.on_document_click("enquiryForm");
        assert!(h.page.success_active.get());
        assert!(h.page.ad_active.get());

        h.controller.on_document_click("successModal");
        assert!(!h.page.success_active.get());
        assert!(h.page.ad_active.get());

        h.controller.on_document_click("adModal");
        assert!(!h.page.ad_active.get());
        assert!(!h.page.scroll_locked.get());
    }

    #[test]
    fn test_success_modal_never_locks_scroll() {
        let h = harness();
        h.controller.show_success_modal();
        assert!(h.page.success_active.get());
        assert!(!h.page.scroll_locked.get());

        h.controller.show_ad_modal();
        assert!(h.page.scroll_locked.get());

        h.controller.close_modal(ModalKind::Success);
        assert!(h.page.scroll_locked.get());

        h.controller.close_modal(ModalKind::Advertisement);
        assert!(!h.page.scroll_locked.get());
    }

    #[test]
    fn test_missing_success_modal_is_silent() {
        let page = FakePage::full();
        page.has_success_modal.set(false);
        let h = harness_with_page(page);

        h.controller.show_success_modal();

        assert!(!h.controller.is_modal_active(ModalKind::Success));
        assert_eq!(h.scheduler.pending(), 0);
    }

    // ========================================================================
    // Advertisement modal
    // ========================================================================

    #[test]
    fn test_ad_opens_two_seconds_after_start() {
        let h = harness();
        h.controller.start();

        h.scheduler.advance_ms(1999);
        assert!(!h.page.ad_active.get());

        h.scheduler.advance_ms(1);
        assert!(h.page.ad_active.get());
        assert!(h.page.scroll_locked.get());
    }

    #[test]
    fn test_missing_ad_modal_leaves_scroll_alone() {
        let page = FakePage::full();
        page.has_ad_modal.set(false);
        let h = harness_with_page(page);

        h.controller.show_ad_modal();

        assert!(!h.page.scroll_locked.get());
        assert!(!h.controller.is_modal_active(ModalKind::Advertisement));
    }

    #[test]
    fn test_close_ad_and_scroll_to_form() {
        let h = harness();
        h.controller.show_ad_modal();

        h.controller.close_ad_modal_and_scroll();
        assert!(!h.page.ad_active.get());
        assert!(!h.page.scroll_locked.get());
        assert!(h.page.scrolls.borrow().is_empty());

        h.scheduler.advance_ms(300);
        assert_eq!(*h.page.scrolls.borrow(), [ScrollTarget::ApplicationForm]);
    }

    // ========================================================================
    // Keyboard and pointer
    // ========================================================================

    #[test]
    fn test_escape_closes_both_modals() {
        let h = harness();
        h.controller.show_success_modal();
        h.controller.show_ad_modal();

        h.controller.on_key_down("Escape", false);

        assert!(!h.page.success_active.get());
        assert!(!h.page.ad_active.get());
        assert!(!h.page.scroll_locked.get());
    }

    #[test]
    fn test_escape_with_no_modal_open_is_idempotent() {
        let h = harness();

        h.controller.on_key_down("Escape", false);
        h.controller.on_key_down("Escape", false);

        assert!(!h.page.success_active.get());
        assert!(!h.page.ad_active.get());
        assert!(!h.controller.is_modal_active(ModalKind::Success));
    }

    #[test]
    fn test_tab_enables_and_mousedown_disables_keyboard_nav() {
        let h = harness();

        h.controller.on_key_down("Tab", false);
        assert!(h.page.keyboard_nav.get());

        h.controller.on_mouse_down();
        assert!(!h.page.keyboard_nav.get());
    }

    #[test]
    fn test_enter_activates_only_cta() {
        let h = harness();

        assert!(h.controller.on_key_down("Enter", true).activate_target);
        assert!(!h.controller.on_key_down("Enter", false).activate_target);
        assert!(!h.controller.on_key_down("a", true).activate_target);
    }

    // ========================================================================
    // Phone and scroll
    // ========================================================================

    #[test]
    fn test_phone_input_formatting() {
        let h = harness();

        assert_eq!(
            h.controller.on_phone_input("9876543210").as_deref(),
            Some("+91 9876543210")
        );
        assert_eq!(h.controller.on_phone_input("+919876543210"), None);
        assert_eq!(h.controller.on_phone_input("98765"), None);
    }

    #[test]
    fn test_scroll_effects_use_config() {
        let h = harness();

        let effects = h.controller.on_scroll(120.0, 900.0);
        assert_eq!(effects.header_shadow, "0 4px 12px rgba(0, 0, 0, 0.15)");
        assert_eq!(effects.hero_transform.as_deref(), Some("translateY(60px)"));
    }

    #[test]
    fn test_dropped_controller_ignores_timers() {
        let h = harness();
        h.controller.start();
        let Harness {
            page,
            scheduler,
            controller,
            ..
        } = h;
        drop(controller);

        scheduler.advance_ms(2000);
        assert!(!page.ad_active.get());
    }
}
