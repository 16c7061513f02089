//! Error types for DOM binding initialization.
//!
//! Only initialization can fail in a way worth reporting; once bound, every
//! event handler degrades to inaction instead of raising.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while binding widgets to the page.
#[derive(Debug, Clone, Error)]
pub enum WebError {
    /// No window object (not running in a browser context).
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// No document on the window.
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// `querySelector`/`querySelectorAll` rejected a selector.
    #[error("selector query failed for `{selector}`: {details}")]
    QueryFailed { selector: String, details: String },

    /// Event listener registration failed.
    #[error("failed to attach {event} listener: {details}")]
    ListenerFailed {
        event: &'static str,
        details: String,
    },
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        Self::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn display_names_the_selector() {
        let err = WebError::QueryFailed {
            selector: ".carousel".to_string(),
            details: "syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "selector query failed for `.carousel`: syntax error"
        );
    }

    #[test]
    fn display_for_missing_globals() {
        assert!(WebError::WindowNotAvailable.to_string().contains("window"));
        assert!(
            WebError::DocumentNotAvailable
                .to_string()
                .contains("document")
        );
    }
}
