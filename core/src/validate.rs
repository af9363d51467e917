use crate::model::JobPosting;
use std::collections::HashSet;
use thiserror::Error;

/// Request-shape problems a boundary rejects before calling the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("posting id must not be empty")]
    EmptyPostingId,
    #[error("duplicate posting id: {0}")]
    DuplicatePostingId(String),
}

pub fn validate_postings(postings: &[JobPosting]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(postings.len());
    for posting in postings {
        let id = posting.id.trim();
        if id.is_empty() {
            return Err(InputError::EmptyPostingId);
        }
        if !seen.insert(id) {
            return Err(InputError::DuplicatePostingId(id.to_string()));
        }
    }
    Ok(())
}
