use std::time::Duration;

use nitpick_core::{ActionInputs, NitpickError, SamplingParams};
use serde::Serialize;

/// A message in a chat conversation with the model.
///
/// # Examples
///
/// ```
/// use nitpick_review::llm::{ChatMessage, Role};
///
/// let msg = ChatMessage {
///     role: Role::User,
///     content: "+ added line".into(),
/// };
/// assert!(matches!(msg.role, Role::User));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: Role,
    /// Text content of the message.
    pub content: String,
}

/// Role in the chat conversation.
///
/// # Examples
///
/// ```
/// use nitpick_review::llm::Role;
///
/// assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction framing for the review task.
    System,
    /// The diff under review.
    User,
}

/// OpenAI-compatible chat completions client.
///
/// Works with any provider that exposes a `/chat/completions` endpoint under
/// the configured base URL. The whole completion call sits behind
/// [`ChatClient::get_review`] so an alternative client can be swapped in
/// without touching the pipeline.
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    sampling: SamplingParams,
    debug: bool,
}

impl ChatClient {
    /// Create a completion client from the run's inputs.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Llm`] if the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use nitpick_core::ActionInputs;
    /// use nitpick_review::llm::ChatClient;
    ///
    /// let inputs = ActionInputs::from_lookup(|name| match name {
    ///     "INPUT_APIKEY" => Some("sk-test".into()),
    ///     "INPUT_GITHUBTOKEN" => Some("ghp_test".into()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// let client = ChatClient::new(&inputs).unwrap();
    /// assert_eq!(client.model(), "gpt-3.5-turbo");
    /// ```
    pub fn new(inputs: &ActionInputs) -> Result<Self, NitpickError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| NitpickError::Llm(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: inputs.api_base_url.clone(),
            api_key: inputs.api_key.clone(),
            model: inputs.model.clone(),
            sampling: inputs.sampling,
            debug: inputs.debug,
        })
    }

    /// Return the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model to review `diff` under `system_message` and return the
    /// reply text.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Llm`] on HTTP errors or response parsing
    /// failures.
    pub async fn get_review(
        &self,
        diff: &str,
        system_message: &str,
    ) -> Result<String, NitpickError> {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: system_message.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: diff.to_string(),
            },
        ];
        self.chat(messages).await
    }

    /// Send a chat completion request and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Llm`] on HTTP errors or response parsing
    /// failures.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, NitpickError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.sampling.temperature,
            "top_p": self.sampling.top_p,
        });

        if self.debug {
            eprintln!("chat request to {url}:");
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&body).unwrap_or_default()
            );
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| NitpickError::Llm(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(NitpickError::Llm(format!(
                "LLM API error {status}: {body_text}"
            )));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| NitpickError::Llm(format!("failed to parse response: {e}")))?;

        let content = response_body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                NitpickError::Llm(format!("unexpected response structure: {response_body}"))
            })?;

        Ok(content.to_string())
    }
}
