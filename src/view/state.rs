//! Request lifecycle state: one active variant per view instance.

use crate::error::{FetchError, FetchErrorKind};

/// Lifecycle of a single view's fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(Failure),
}

/// Payload-free discriminant of a [`RequestState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Display-safe failure reason. The raw transport error is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl From<&FetchError> for Failure {
    fn from(err: &FetchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.display_message(),
        }
    }
}

impl<T> RequestState<T> {
    pub fn phase(&self) -> Phase {
        match self {
            RequestState::Idle => Phase::Idle,
            RequestState::Loading => Phase::Loading,
            RequestState::Success(_) => Phase::Success,
            RequestState::Failure(_) => Phase::Failure,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RequestState::Failure(f) => Some(f),
            _ => None,
        }
    }

    /// Build the terminal state for a resolved fetch.
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => RequestState::Success(data),
            Err(e) => RequestState::Failure(Failure::from(&e)),
        }
    }
}
