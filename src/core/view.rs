use crate::utils::error::PortfolioError;
use serde::Serialize;

/// State of one async operation as seen by the view layer.
#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Failed(PortfolioError),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PortfolioError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<crate::utils::error::Result<T>> for LoadState<T> {
    fn from(result: crate::utils::error::Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Short-lived toast shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn message_sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message Sent!".to_string(),
            description: "Thank you for your message. I'll get back to you soon!".to_string(),
        }
    }

    pub fn submission_failed(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Submission failed".to_string(),
            description: description.into(),
        }
    }
}
