//! Interaction tracking
//!
//! Events only go to the log; no analytics backend is wired up.

/// One tracked interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl TrackedEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    /// Click on a call-to-action button, labelled by its trimmed text
    pub fn cta_click(button_text: &str) -> Self {
        Self::new("CTA", "click", button_text.trim())
    }

    /// Pointer entering a program card, labelled by its title
    pub fn program_hover(program_title: &str) -> Self {
        Self::new("Program", "hover", program_title)
    }
}

pub fn track_event(event: &TrackedEvent) {
    tracing::info!(
        category = %event.category,
        action = %event.action,
        label = %event.label,
        "Event tracked"
    );
}
