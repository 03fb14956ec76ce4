use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;

use nitpick_core::{ActionInputs, NitpickError, PullRequestContext};
use nitpick_review::github::GitHubClient;
use nitpick_review::llm::ChatClient;
use nitpick_review::pipeline::Reviewer;

#[derive(Parser)]
#[command(
    name = "nitpick",
    version,
    about = "Post an LLM code review as a pull request comment",
    long_about = "Fetches a pull request's diff, asks a chat-completion model to review it,\n\
                   and posts the reply as a comment on the pull request.\n\n\
                   Designed to run as a GitHub Actions step: inputs arrive as INPUT_* environment\n\
                   variables and the triggering pull request is read from $GITHUB_EVENT_PATH.\n\n\
                   Examples:\n  \
                     nitpick                         Run inside a pull_request workflow job\n  \
                     nitpick --event event.json      Run locally against a saved event payload"
)]
struct Cli {
    /// Path to the event payload JSON (default: $GITHUB_EVENT_PATH)
    #[arg(long)]
    event: Option<PathBuf>,
}

async fn run(cli: &Cli) -> Result<String, NitpickError> {
    let inputs = ActionInputs::from_env()?;

    let event_path = match &cli.event {
        Some(path) => path.clone(),
        None => std::env::var_os("GITHUB_EVENT_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| {
                NitpickError::Config(
                    "GITHUB_EVENT_PATH not set; pass --event <path> when running outside CI"
                        .into(),
                )
            })?,
    };
    let ctx = PullRequestContext::from_event_file(&event_path)?;

    let github = GitHubClient::new(&inputs.github_token)?;
    let chat = ChatClient::new(&inputs)?;

    Reviewer::new(github, chat)
        .run(&ctx, inputs.system_message.as_deref())
        .await
}

/// Workflow-command payloads must percent-escape `%`, CR, and LF.
fn annotation_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(_) => Ok(()),
        Err(err) => {
            // GitHub Actions renders ::error:: lines as failure annotations
            // on the job; the non-zero exit fails the step itself.
            println!("::error::{}", annotation_data(&err.to_string()));
            Err(err).into_diagnostic()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_data_escapes_command_characters() {
        assert_eq!(annotation_data("plain"), "plain");
        assert_eq!(annotation_data("a\nb"), "a%0Ab");
        assert_eq!(annotation_data("a\r\nb"), "a%0D%0Ab");
        assert_eq!(annotation_data("50%"), "50%25");
    }
}
