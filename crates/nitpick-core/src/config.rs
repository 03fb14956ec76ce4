use crate::error::NitpickError;

/// Default chat-completion endpoint root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Default nucleus-sampling bound.
pub const DEFAULT_TOP_P: f64 = 1.0;

/// Generation parameters forwarded verbatim to the completion request.
///
/// # Examples
///
/// ```
/// use nitpick_core::SamplingParams;
///
/// let params = SamplingParams::default();
/// assert_eq!(params.temperature, 0.1);
/// assert_eq!(params.top_p, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus-sampling (top-p) bound.
    pub top_p: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

/// Run configuration, read once from the invoking environment.
///
/// Inputs follow the GitHub Actions convention: an input named `apiKey`
/// arrives as the environment variable `INPUT_APIKEY`. Values are read once
/// at startup and never mutated.
///
/// # Examples
///
/// ```
/// use nitpick_core::ActionInputs;
///
/// let inputs = ActionInputs::from_lookup(|name| match name {
///     "INPUT_APIKEY" => Some("sk-test".into()),
///     "INPUT_GITHUBTOKEN" => Some("ghp_test".into()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(inputs.model, "gpt-3.5-turbo");
/// assert_eq!(inputs.sampling.top_p, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ActionInputs {
    /// Credential for the chat-completion API.
    pub api_key: String,
    /// Root URL of the chat-completion API.
    pub api_base_url: String,
    /// Credential for the source-hosting API.
    pub github_token: String,
    /// Model identifier.
    pub model: String,
    /// Generation parameters.
    pub sampling: SamplingParams,
    /// When `true`, the completion client logs its outgoing request payload.
    pub debug: bool,
    /// Verbatim override for the built-in review instructions.
    pub system_message: Option<String>,
}

impl ActionInputs {
    /// Read inputs from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Config`] if a required input is missing.
    pub fn from_env() -> Result<Self, NitpickError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read inputs through an arbitrary variable lookup.
    ///
    /// Numeric inputs supplied as strings are parsed and used verbatim;
    /// empty or unparsable values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NitpickError::Config`] if `apiKey` or `githubToken` is
    /// missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NitpickError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| -> Option<String> {
            lookup(&format!("INPUT_{}", name.to_uppercase()))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = input("apiKey")
            .ok_or_else(|| NitpickError::Config("apiKey input is required".into()))?;
        let github_token = input("githubToken")
            .ok_or_else(|| NitpickError::Config("githubToken input is required".into()))?;

        let api_base_url = input("apiBaseUrl").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let model = input("model").unwrap_or_else(|| DEFAULT_MODEL.into());

        let temperature = input("temperature")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        // The action's `top_n` input maps to the nucleus-sampling parameter.
        let top_p = input("top_n")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TOP_P);

        let debug = input("debug").is_some_and(|v| v.eq_ignore_ascii_case("true"));
        let system_message = input("systemMessage");

        Ok(Self {
            api_key,
            api_base_url,
            github_token,
            model,
            sampling: SamplingParams { temperature, top_p },
            debug,
            system_message,
        })
    }
}
