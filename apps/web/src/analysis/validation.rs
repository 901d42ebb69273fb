use serde::Serialize;
use thiserror::Error;

pub const MIN_RESUME_CHARS: usize = 50;
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 30;

/// Client-side guard failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Resume text must be at least 50 characters long.")]
    ResumeTooShort,

    #[error("Job description must be at least 30 characters long.")]
    JobDescriptionTooShort,
}

/// Lengths are counted in characters, not bytes. The resume guard is checked first.
pub fn validate_lengths(resume_text: &str, job_description: &str) -> Result<(), ValidationError> {
    if resume_text.chars().count() < MIN_RESUME_CHARS {
        return Err(ValidationError::ResumeTooShort);
    }
    if job_description.chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(ValidationError::JobDescriptionTooShort);
    }
    Ok(())
}
