use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
}

/// A dismissible, non-blocking notification for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

/// Destination for toasts raised by feeds and the contact relay.
pub trait ToastSink: Send + Sync {
    fn push(&self, toast: Toast);
}

/// Collects toasts for one view so they can be handed to the renderer.
#[derive(Debug, Clone, Default)]
pub struct ToastLog {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic elsewhere must not lose toasts, so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    /// Remove and return everything collected so far.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ToastSink for ToastLog {
    fn push(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => info!(text = %toast.message, "Toast raised"),
            ToastLevel::Error => warn!(text = %toast.message, "Toast raised"),
        }
        self.lock().push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_collects_and_drains() {
        let log = ToastLog::new();
        log.push(Toast::success("saved"));
        log.push(Toast::error("failed"));
        assert_eq!(log.len(), 2);

        let drained = log.drain();
        assert_eq!(drained[0].level, ToastLevel::Success);
        assert_eq!(drained[1].message, "failed");
        assert!(log.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let log = ToastLog::new();
        let other = log.clone();
        other.push(Toast::error("boom"));
        assert_eq!(log.snapshot(), vec![Toast::error("boom")]);
    }

    #[test]
    fn test_push_survives_poisoned_lock() {
        let log = ToastLog::new();
        let shared = log.clone();
        let result = std::thread::spawn(move || {
            let _guard = shared.toasts.lock().unwrap();
            panic!("renderer crashed while holding the toast log");
        })
        .join();
        assert!(result.is_err());
        assert!(log.toasts.is_poisoned());

        log.push(Toast::error(crate::feed::FETCH_FAILED_MESSAGE));
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.drain(),
            vec![Toast::error(crate::feed::FETCH_FAILED_MESSAGE)]
        );
        assert!(log.is_empty());
    }
}
