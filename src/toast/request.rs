use std::time::Duration;

use super::ToastKind;
use crate::config::DEFAULT_DURATION_MS;

/// One call's worth of toast content. Built fresh for every `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Normal,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
        }
    }

    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration = Duration::from_millis(duration_ms);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
