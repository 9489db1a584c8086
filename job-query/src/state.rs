use std::sync::Arc;

use crate::QueryError;

/// What a page sees of one query.
/// Errors are a state to render, they never propagate as panics.
#[derive(Debug)]
pub enum QueryState<T> {
    /// The query is disabled and issued no request
    Idle,
    Loading,
    Error(QueryError),
    Success(Arc<T>),
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Error(e) => QueryState::Error(e.clone()),
            QueryState::Success(data) => QueryState::Success(Arc::clone(data)),
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data.as_ref()),
            _ => None,
        }
    }
}

impl<T> From<crate::Result<Arc<T>>> for QueryState<T> {
    fn from(result: crate::Result<Arc<T>>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => QueryState::Error(e),
        }
    }
}
