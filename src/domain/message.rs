use crate::error::ApiError;

/// How long a status message stays on screen before auto-hiding.
pub const AUTO_HIDE_MS: u32 = 5_000;

/// The status message area above the signup form.
///
/// Exactly three observable states; transitions happen only when an action
/// completes or the auto-hide timer fires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl StatusMessage {
    /// Message state for a finished mutation: the server's confirmation on
    /// success, its `detail` on rejection, or the given fallback when the
    /// server provided nothing usable.
    pub fn from_result(result: &Result<String, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(message) => StatusMessage::Success(message.clone()),
            Err(err) => {
                StatusMessage::Error(err.detail().unwrap_or(fallback).to_string())
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, StatusMessage::Hidden)
    }

    /// Visible text, empty when hidden.
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Hidden => "",
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    /// CSS class for the message div, matching the page stylesheet.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusMessage::Hidden => "message hidden",
            StatusMessage::Success(_) => "message success",
            StatusMessage::Error(_) => "message error",
        }
    }
}

/// Slot for the pending auto-hide timer.
///
/// Showing a message arms a fresh timer and drops the previous handle, so an
/// older timer can never hide a newer message early; transitioning to
/// `Hidden` clears the slot without arming anything.
#[derive(Debug)]
pub struct AutoHide<T> {
    pending: Option<T>,
}

impl<T> AutoHide<T> {
    pub fn new() -> Self {
        AutoHide { pending: None }
    }

    /// Apply a message transition: arm for a visible message, clear for
    /// `Hidden`. `arm` is only invoked when a timer is actually needed.
    pub fn transition(&mut self, next: &StatusMessage, arm: impl FnOnce() -> T) {
        if next.is_hidden() {
            self.pending = None;
        } else {
            self.pending = Some(arm());
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for AutoHide<T> {
    fn default() -> Self {
        Self::new()
    }
}
