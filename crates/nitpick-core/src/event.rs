use std::path::Path;

use serde::Deserialize;

use crate::error::NitpickError;

/// The pull request a run operates on.
///
/// Read once from the triggering event payload at startup and passed down
/// the pipeline as an explicit immutable parameter.
///
/// # Examples
///
/// ```
/// use nitpick_core::PullRequestContext;
///
/// let ctx = PullRequestContext::from_json(r#"{
///     "pull_request": { "number": 42, "diff_url": "https://github.com/acme/widgets/pull/42.diff" },
///     "repository": { "name": "widgets", "owner": { "login": "acme" } }
/// }"#).unwrap();
/// assert_eq!(ctx.owner, "acme");
/// assert_eq!(ctx.number, 42);
/// ```
#[derive(Debug, Clone)]
pub struct PullRequestContext {
    /// Repository owner login.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Pull request number, used as the issue number when commenting.
    pub number: u64,
    /// Human-facing diff URL from the event payload.
    pub diff_url: String,
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: PullRequestPayload,
    repository: RepositoryPayload,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
    diff_url: String,
}

#[derive(Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
}

#[derive(Deserialize)]
struct OwnerPayload {
    login: String,
}

impl PullRequestContext {
    /// Parse the context from an event payload file (`$GITHUB_EVENT_PATH`).
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Event`] if the file cannot be read or does
    /// not carry a pull request.
    pub fn from_event_file(path: &Path) -> Result<Self, NitpickError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NitpickError::Event(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Parse the context from an event payload JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Event`] if the payload is not a pull-request
    /// event.
    pub fn from_json(content: &str) -> Result<Self, NitpickError> {
        let payload: EventPayload = serde_json::from_str(content).map_err(|e| {
            NitpickError::Event(format!("payload is not a pull_request event: {e}"))
        })?;
        Ok(Self {
            owner: payload.repository.owner.login,
            repo: payload.repository.name,
            number: payload.pull_request.number,
            diff_url: payload.pull_request.diff_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULL_REQUEST_EVENT: &str = r#"{
        "action": "opened",
        "number": 7,
        "pull_request": {
            "number": 7,
            "state": "open",
            "diff_url": "https://github.com/acme/widgets/pull/7.diff",
            "html_url": "https://github.com/acme/widgets/pull/7"
        },
        "repository": {
            "name": "widgets",
            "full_name": "acme/widgets",
            "owner": { "login": "acme", "id": 1 }
        }
    }"#;

    #[test]
    fn parses_pull_request_event() {
        let ctx = PullRequestContext::from_json(PULL_REQUEST_EVENT).unwrap();
        assert_eq!(ctx.owner, "acme");
        assert_eq!(ctx.repo, "widgets");
        assert_eq!(ctx.number, 7);
        assert_eq!(ctx.diff_url, "https://github.com/acme/widgets/pull/7.diff");
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        // The real payload carries dozens of fields beyond the four we use.
        let ctx = PullRequestContext::from_json(PULL_REQUEST_EVENT);
        assert!(ctx.is_ok());
    }

    #[test]
    fn non_pull_request_event_is_an_error() {
        let push_event = r#"{ "ref": "refs/heads/main", "repository": { "name": "widgets", "owner": { "login": "acme" } } }"#;
        let result = PullRequestContext::from_json(push_event);
        assert!(matches!(result, Err(NitpickError::Event(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PullRequestContext::from_json("{{not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = PullRequestContext::from_event_file(Path::new("/nonexistent/event.json"));
        assert!(matches!(result, Err(NitpickError::Event(_))));
    }
}
