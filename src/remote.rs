//! Request State
//!
//! Every fetched value is tracked separately so "still loading" and "failed to
//! load" render differently.

use crate::api::ApiError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Remote<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Remote::Loaded(value),
            Err(e) => {
                log::warn!("request failed: {}", e);
                Remote::Failed(e.to_string())
            }
        }
    }
}
