//! Transient toast notifications

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One notification: title, description, variant, and its deadline.
/// The event loop prunes expired toasts every tick.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Success,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Error,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::success("Success!", "All done");
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_past_deadline_is_expired() {
        let mut toast = Toast::error("Error", "Something failed");
        toast.expires_at = Instant::now() - Duration::from_millis(1);
        assert!(toast.is_expired());
    }

    #[test]
    fn test_error_variant() {
        let toast = Toast::error("Error", "boom");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "boom");
    }
}
