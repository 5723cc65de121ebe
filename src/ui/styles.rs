//! Stylesheet rules the controller relies on

use web_sys::Document;

/// Id of the injected `<style>` element
const STYLE_ID: &str = "landing-controller-styles";

/// Spinner rotation, ripple expansion and keyboard focus outline
const CONTROLLER_CSS: &str = r#"
@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@keyframes ripple {
    to {
        width: 200px;
        height: 200px;
        opacity: 0;
    }
}

body.keyboard-nav *:focus {
    outline: 3px solid #ffc107;
    outline-offset: 2px;
}
"#;

/// Append the controller stylesheet to `<head>` unless it is already there.
pub fn inject_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }

    let Some(head) = document.head() else {
        return;
    };

    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ID);
        style.set_text_content(Some(CONTROLLER_CSS));
        let _ = head.append_child(&style);
    }
}
