#![forbid(unsafe_code)]

//! Injected diagnostics for out-of-contract input.
//!
//! Every Chromatin operation is total: bad input degrades to a documented
//! sentinel value. The only observable trace of the problem is a call to
//! [`Diagnostics::warn`]. Which implementation is wired in decides whether the
//! warning reaches a log, is recorded, or is dropped, so production behavior
//! is a configuration choice made by the caller rather than a global flag.

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for non-fatal diagnostics.
pub trait Diagnostics {
    /// Report a recoverable misuse.
    fn warn(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Box<D> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Rc<D> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(diagnostic = %message, "chromatin.invalid_input");
    }
}

/// Drops every diagnostic. Used for production builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn warn(&self, _message: &str) {}
}

/// Records diagnostics in memory.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

/// Build profile that selects a diagnostics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildProfile {
    /// Diagnostics are logged through `tracing`.
    #[default]
    Development,
    /// Diagnostics are discarded.
    Production,
}

/// Diagnostics sink for a build profile.
#[must_use]
pub fn diagnostics_for(profile: BuildProfile) -> Box<dyn Diagnostics> {
    match profile {
        BuildProfile::Development => Box::new(TracingDiagnostics),
        BuildProfile::Production => Box::new(SilentDiagnostics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn recording_clones_share_buffer() {
        let recorder = RecordingDiagnostics::new();
        let handed_out = recorder.clone();
        handed_out.warn("first");
        handed_out.warn("second");
        assert_eq!(recorder.messages(), vec!["first", "second"]);
        recorder.clear();
        assert!(handed_out.is_empty());
    }

    #[test]
    fn blanket_impls_forward() {
        let recorder = RecordingDiagnostics::new();
        let boxed: Box<dyn Diagnostics> = Box::new(recorder.clone());
        boxed.warn("boxed");
        (&recorder).warn("borrowed");
        Rc::new(recorder.clone()).warn("shared");
        assert_eq!(recorder.len(), 3);
    }

    #[traced_test]
    #[test]
    fn development_profile_logs_through_tracing() {
        diagnostics_for(BuildProfile::Development).warn("factor out of range");
        assert!(logs_contain("factor out of range"));
    }

    #[traced_test]
    #[test]
    fn production_profile_is_silent() {
        diagnostics_for(BuildProfile::Production).warn("should not appear");
        assert!(!logs_contain("should not appear"));
    }
}
