//! Review orchestration: fetch a pull-request diff, ask a chat-completion
//! model for a review, post the reply as a comment.
//!
//! Provides the GitHub client, the completion client behind its narrow
//! `get_review` interface, the built-in review instructions, and the
//! straight-line pipeline tying them together.

pub mod github;
pub mod llm;
pub mod pipeline;
pub mod prompt;
