//! Core configuration, event payload, and error handling for nitpick.
//!
//! This crate provides the shared foundation used by the review crate and
//! the binary:
//! - [`NitpickError`] — unified error type using `thiserror`
//! - [`ActionInputs`] — run configuration read from the invoking environment
//! - [`PullRequestContext`] — the triggering pull request, read once from the
//!   event payload and passed as an explicit immutable parameter

mod config;
mod error;
mod event;

pub use config::{
    ActionInputs, SamplingParams, DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_P,
};
pub use error::NitpickError;
pub use event::PullRequestContext;

/// A convenience `Result` type for nitpick operations.
pub type Result<T> = std::result::Result<T, NitpickError>;
