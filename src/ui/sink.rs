//! Error display and alerts
//!
//! Capabilities the validators and the controller write to instead of
//! touching a page directly.

use crate::forms::Field;

/// Receives validation messages and focus changes.
pub trait ErrorSink {
    /// Shows `message` in the error display and moves focus to `field`.
    fn show_error(&mut self, message: &str, field: Option<Field>);

    /// Hides the error display.
    fn clear_error(&mut self);
}

/// Receives confirmation messages shown after a successful submit.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// A single shared error region, the way a page has one.
///
/// Each `show_error` overwrites the previous message.
#[derive(Debug, Default, Clone)]
pub struct ErrorDisplay {
    message: Option<String>,
    visible: bool,
    focused: Option<Field>,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently on display, if the region is visible.
    pub fn message(&self) -> Option<&str> {
        if self.visible {
            self.message.as_deref()
        } else {
            None
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Field holding focus after the last error.
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }
}

impl ErrorSink for ErrorDisplay {
    fn show_error(&mut self, message: &str, field: Option<Field>) {
        self.message = Some(message.to_string());
        self.visible = true;
        if field.is_some() {
            self.focused = field;
        }
    }

    fn clear_error(&mut self) {
        // Hidden, not erased: the stale text stays until the next error.
        self.visible = false;
    }
}

/// Collected alert messages, drained by whoever renders them.
#[derive(Debug, Default, Clone)]
pub struct Alerts {
    pending: Vec<String>,
}

impl Alerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    pub fn last(&self) -> Option<&str> {
        self.pending.last().map(String::as_str)
    }
}

impl Notifier for Alerts {
    fn alert(&mut self, message: &str) {
        self.pending.push(message.to_string());
    }
}

/// Forwards only the first error of a submission to the wrapped sink.
pub struct FirstErrorOnly<'a> {
    inner: &'a mut dyn ErrorSink,
    shown: bool,
}

impl<'a> FirstErrorOnly<'a> {
    pub fn new(inner: &'a mut dyn ErrorSink) -> Self {
        Self {
            inner,
            shown: false,
        }
    }
}

impl ErrorSink for FirstErrorOnly<'_> {
    fn show_error(&mut self, message: &str, field: Option<Field>) {
        if !self.shown {
            self.shown = true;
            self.inner.show_error(message, field);
        }
    }

    fn clear_error(&mut self) {
        self.shown = false;
        self.inner.clear_error();
    }
}
