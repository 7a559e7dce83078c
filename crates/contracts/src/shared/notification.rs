use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient user-facing message produced by table and form operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub summary: String,
    pub detail: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn success(detail: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, "Success", detail)
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, "Error", detail)
    }

    /// A confirmation the user declined
    pub fn cancelled(detail: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, "Cancelled", detail)
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, summary, detail)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
