//! Document title derivation
//!
//! The displayed title prefers the session title, then the configured
//! fallback, then the bare product name. The title side effect only fires
//! once a session title exists, even an empty one.

use tracing::debug;

pub const TITLE_SUFFIX: &str = "Playroom";

/// Compute the text shown as the document title
pub fn display_title(explicit: Option<&str>, fallback: Option<&str>) -> String {
    if let Some(title) = explicit.filter(|t| !t.is_empty()) {
        return format!("{} | {}", title, TITLE_SUFFIX);
    }

    if let Some(title) = fallback.filter(|t| !t.is_empty()) {
        return format!("{} | {}", title, TITLE_SUFFIX);
    }

    TITLE_SUFFIX.to_string()
}

/// The title to push to the host, or `None` when the session title was never set
pub fn document_title(explicit: Option<&str>, fallback: Option<&str>) -> Option<String> {
    explicit.map(|_| display_title(explicit, fallback))
}

/// Receiver of document title updates (window title, browser tab, ...)
pub trait TitleSink {
    fn set_document_title(&mut self, title: &str);
}

/// Remembers the last title handed to a sink so repeated renders stay quiet
#[derive(Debug, Default)]
pub struct DocumentTitle {
    applied: Option<String>,
}

impl DocumentTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    /// Forward `title` to `sink` when present and different from the last one.
    /// Returns whether the sink was called.
    pub fn apply(&mut self, sink: &mut dyn TitleSink, title: Option<&str>) -> bool {
        let Some(title) = title else {
            return false;
        };
        if self.applied.as_deref() == Some(title) {
            return false;
        }
        debug!("Document title -> {:?}", title);
        sink.set_document_title(title);
        self.applied = Some(title.to_string());
        true
    }
}
