//! Session-scoped storage contracts for cross-page signals.
//!
//! The portfolio view and the case-study pages communicate through a one-shot flag:
//! the detail page raises it before navigating back, and the portfolio view consumes
//! it exactly once on mount. [`SessionStore::take_value`] is the consuming read that
//! backs that contract.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Marker value written by [`raise_flag`] and matched by [`take_flag`].
pub const FLAG_SET: &str = "true";

/// Host service for session-scoped string values.
///
/// Unlike [`crate::PrefsStore`], values here do not outlive the browsing session, and
/// reads are destructive where the one-shot contract requires it.
pub trait SessionStore {
    /// Writes `value` under `key`, replacing any previous value.
    fn set_value(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removes and returns the value stored under `key`.
    fn take_value(&self, key: &str) -> Result<Option<String>, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op session store for unsupported targets and baseline tests.
pub struct NoopSessionStore;

impl SessionStore for NoopSessionStore {
    fn set_value(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn take_value(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory session store keyed by string.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemorySessionStore {
    fn set_value(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn take_value(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow_mut().remove(key))
    }
}

/// Raises a one-shot flag under `key`.
///
/// # Errors
///
/// Returns an error when the underlying store write fails.
pub fn raise_flag<S: SessionStore + ?Sized>(store: &S, key: &str) -> Result<(), String> {
    store.set_value(key, FLAG_SET)
}

/// Consumes a one-shot flag, returning whether it was raised.
///
/// The flag is cleared regardless of its stored value, so a second call always
/// reports `false` until the flag is raised again.
pub fn take_flag<S: SessionStore + ?Sized>(store: &S, key: &str) -> Result<bool, String> {
    Ok(store.take_value(key)?.as_deref() == Some(FLAG_SET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_value_is_a_consuming_read() {
        let store = MemorySessionStore::default();
        store.set_value("signal", "payload").expect("set");

        assert_eq!(
            store.take_value("signal").expect("take"),
            Some("payload".to_string())
        );
        assert_eq!(store.take_value("signal").expect("take"), None);
    }

    #[test]
    fn flag_round_trip_consumes_on_first_read() {
        let store = MemorySessionStore::default();
        let store_obj: &dyn SessionStore = &store;

        raise_flag(store_obj, "returnToCaseStudies").expect("raise");
        assert!(take_flag(store_obj, "returnToCaseStudies").expect("take"));
        assert!(!take_flag(store_obj, "returnToCaseStudies").expect("take again"));
    }

    #[test]
    fn take_flag_clears_non_matching_values() {
        let store = MemorySessionStore::default();
        store.set_value("signal", "false").expect("set");

        assert!(!take_flag(&store, "signal").expect("take"));
        assert_eq!(store.take_value("signal").expect("take"), None);
    }

    #[test]
    fn noop_session_store_reports_nothing() {
        let store = NoopSessionStore;
        raise_flag(&store, "signal").expect("raise");
        assert!(!take_flag(&store, "signal").expect("take"));
    }
}
