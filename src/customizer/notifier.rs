//! Toast notifications emitted by the customizer

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::error::ErrorSeverity;

/// Toast variant determines how a notification is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl ToastVariant {
    pub fn from_severity(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info => ToastVariant::Info,
            ErrorSeverity::Warning => ToastVariant::Warning,
            ErrorSeverity::Error => ToastVariant::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn new(variant: ToastVariant, title: impl Into<String>, message: impl Into<String>) -> Self {
        Toast {
            variant,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, title, message)
    }
}

/// Fire-and-forget sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Success | ToastVariant::Info => {
                info!(title = %toast.title, message = %toast.message, "Notification")
            }
            ToastVariant::Warning => {
                warn!(title = %toast.title, message = %toast.message, "Notification")
            }
            ToastVariant::Error => {
                error!(title = %toast.title, message = %toast.message, "Notification")
            }
        }
    }
}

/// Keeps every notification in memory, newest last
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
