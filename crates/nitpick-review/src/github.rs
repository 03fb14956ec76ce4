use nitpick_core::NitpickError;

/// Rewrite a pull request's human-facing diff URL into the hosting API's
/// pull-request endpoint.
///
/// Three literal substring replacements, applied unconditionally. Input that
/// does not match the expected shape passes through with whatever
/// replacements do apply and surfaces as an HTTP failure downstream.
///
/// # Examples
///
/// ```
/// use nitpick_review::github::diff_api_url;
///
/// assert_eq!(
///     diff_api_url("https://github.com/acme/widgets/pull/42.diff"),
///     "https://api.github.com/repos/acme/widgets/pulls/42"
/// );
/// ```
pub fn diff_api_url(diff_url: &str) -> String {
    diff_url
        .replace("github.com", "api.github.com/repos")
        .replace("/pull/", "/pulls/")
        .replace(".diff", "")
}

/// GitHub client for fetching pull-request diffs and posting comments.
pub struct GitHubClient {
    octocrab: octocrab::Octocrab,
    http: reqwest::Client,
    token: String,
}

impl GitHubClient {
    /// Create a client for the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::GitHub`] if the client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nitpick_review::github::GitHubClient;
    ///
    /// let client = GitHubClient::new("ghp_xxxx").unwrap();
    /// ```
    pub fn new(token: &str) -> Result<Self, NitpickError> {
        Self::with_api_root(token, "https://api.github.com")
    }

    /// Create a client against an alternate API root (GitHub Enterprise, or
    /// a stub server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::GitHub`] if `api_root` is not a valid URI or
    /// the client cannot be built.
    pub fn with_api_root(token: &str, api_root: &str) -> Result<Self, NitpickError> {
        let octocrab = octocrab::Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_root)
            .map_err(|e| NitpickError::GitHub(format!("invalid API root: {e}")))?
            .build()
            .map_err(|e| NitpickError::GitHub(format!("failed to create GitHub client: {e}")))?;

        let http = reqwest::Client::new();

        Ok(Self {
            octocrab,
            http,
            token: token.to_string(),
        })
    }

    /// Fetch the unified diff behind an already-transformed pull-request
    /// endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::GitHub`] on network failure or any
    /// non-success HTTP status.
    pub async fn fetch_diff(&self, url: &str) -> Result<String, NitpickError> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github.diff")
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "nitpick")
            .send()
            .await
            .map_err(|e| NitpickError::GitHub(format!("failed to fetch PR diff: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NitpickError::GitHub(format!(
                "GitHub API error {status}: {body}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| NitpickError::GitHub(format!("failed to read diff response: {e}")))
    }

    /// Post `body` verbatim as a new comment on a pull request.
    ///
    /// Pull requests share the issue comment endpoint, so the PR number is
    /// used as the issue number.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::GitHub`] on API errors.
    pub async fn post_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<(), NitpickError> {
        let route = format!("/repos/{owner}/{repo}/issues/{number}/comments");
        let payload = serde_json::json!({ "body": body });

        let _response: serde_json::Value = self
            .octocrab
            .post(route, Some(&payload))
            .await
            .map_err(|e| NitpickError::GitHub(format!("failed to post comment: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_diff_url_to_api_endpoint() {
        assert_eq!(
            diff_api_url("https://github.com/acme/widgets/pull/42.diff"),
            "https://api.github.com/repos/acme/widgets/pulls/42"
        );
    }

    #[test]
    fn transform_handles_multi_segment_owner_names() {
        assert_eq!(
            diff_api_url("https://github.com/rust-lang/rust/pull/12345.diff"),
            "https://api.github.com/repos/rust-lang/rust/pulls/12345"
        );
    }

    #[test]
    fn transform_does_not_validate_its_input() {
        // Unrecognized hosts pass through with the path substitutions only.
        assert_eq!(
            diff_api_url("http://127.0.0.1:9999/acme/widgets/pull/1.diff"),
            "http://127.0.0.1:9999/acme/widgets/pulls/1"
        );
        assert_eq!(diff_api_url("not a url"), "not a url");
    }

    #[tokio::test]
    async fn client_construction_succeeds() {
        let client = GitHubClient::new("ghp_test");
        assert!(client.is_ok());
    }

    #[test]
    fn invalid_api_root_is_an_error() {
        let result = GitHubClient::with_api_root("ghp_test", "not a uri");
        assert!(matches!(result, Err(NitpickError::GitHub(_))));
    }
}
