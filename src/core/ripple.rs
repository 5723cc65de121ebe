//! Click ripple on call-to-action buttons

/// Class of the buttons that get a ripple and click tracking
pub const CTA_CLASS: &str = "cta-button";

/// Inline style of a ripple placed at `(x, y)` relative to its button
pub fn ripple_style(x: f64, y: f64) -> String {
    format!(
        "position: absolute; width: 20px; height: 20px; \
         background: rgba(255, 255, 255, 0.5); border-radius: 50%; \
         transform: translate(-50%, -50%); left: {x}px; top: {y}px; \
         animation: ripple 0.6s ease-out; pointer-events: none;"
    )
}

/// Click position relative to the button's top-left corner
pub fn relative_position(client: (f64, f64), rect_origin: (f64, f64)) -> (f64, f64) {
    (client.0 - rect_origin.0, client.1 - rect_origin.1)
}
