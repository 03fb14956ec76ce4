use std::io::IsTerminal;
use std::time::Instant;

use nitpick_core::{NitpickError, PullRequestContext};

use crate::github::{diff_api_url, GitHubClient};
use crate::llm::ChatClient;
use crate::prompt;

/// Straight-line review pipeline: fetch the diff, ask the model, post the
/// reply.
///
/// Each step is awaited to completion before the next begins; the first
/// error aborts the remaining steps.
pub struct Reviewer {
    github: GitHubClient,
    chat: ChatClient,
}

impl Reviewer {
    /// Create a pipeline from the two API clients.
    pub fn new(github: GitHubClient, chat: ChatClient) -> Self {
        Self { github, chat }
    }

    /// Run a review for `ctx` and post the result as a comment.
    ///
    /// `system_message` overrides the built-in review instructions verbatim
    /// when supplied. Returns the review text that was posted.
    ///
    /// # Errors
    ///
    /// Returns the first error from the diff fetch, the completion call, or
    /// the comment post; later steps are skipped.
    pub async fn run(
        &self,
        ctx: &PullRequestContext,
        system_message: Option<&str>,
    ) -> Result<String, NitpickError> {
        let api_url = diff_api_url(&ctx.diff_url);
        eprintln!("pull request diff endpoint: {api_url}");

        let diff = self.github.fetch_diff(&api_url).await?;
        eprintln!("fetched diff: {} bytes", diff.len());

        let system = match system_message {
            Some(s) => s.to_string(),
            None => prompt::review_instructions(&ctx.owner, &ctx.repo),
        };
        eprintln!("{system}");

        let spinner = if std::io::stderr().is_terminal() {
            let pb = indicatif::ProgressBar::new_spinner();
            pb.set_style(
                indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                    .unwrap(),
            );
            pb.set_message(format!("Reviewing with {}...", self.chat.model()));
            pb.enable_steady_tick(std::time::Duration::from_millis(120));
            Some(pb)
        } else {
            None
        };

        let started = Instant::now();
        let review = self
            .chat
            .get_review(&diff, &system)
            .await
            .inspect_err(|_e| {
                if let Some(pb) = &spinner {
                    pb.finish_with_message("Failed");
                }
            })?;
        if let Some(pb) = spinner {
            pb.finish_with_message("Done");
        }
        eprintln!(
            "review generated in {:.1}s",
            started.elapsed().as_secs_f64()
        );
        eprintln!("{review}");

        self.github
            .post_comment(&ctx.owner, &ctx.repo, ctx.number, &review)
            .await?;

        Ok(review)
    }
}
