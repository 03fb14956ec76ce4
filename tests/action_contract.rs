use std::io::Write;

use nitpick_core::{ActionInputs, PullRequestContext};
use nitpick_review::github::diff_api_url;

#[test]
fn event_payload_round_trips_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "action": "synchronize",
            "pull_request": {{
                "number": 42,
                "diff_url": "https://github.com/acme/widgets/pull/42.diff"
            }},
            "repository": {{
                "name": "widgets",
                "owner": {{ "login": "acme" }}
            }}
        }}"#
    )
    .unwrap();

    let ctx = PullRequestContext::from_event_file(file.path()).unwrap();
    assert_eq!(ctx.owner, "acme");
    assert_eq!(ctx.repo, "widgets");
    assert_eq!(ctx.number, 42);
    assert_eq!(
        diff_api_url(&ctx.diff_url),
        "https://api.github.com/repos/acme/widgets/pulls/42"
    );
}

#[test]
fn inputs_resolve_through_the_actions_env_convention() {
    // GitHub Actions exposes an input named `apiKey` as INPUT_APIKEY.
    let inputs = ActionInputs::from_lookup(|name| match name {
        "INPUT_APIKEY" => Some("sk-test".into()),
        "INPUT_GITHUBTOKEN" => Some("ghp_test".into()),
        "INPUT_TEMPERATURE" => Some("0.5".into()),
        _ => None,
    })
    .unwrap();

    assert_eq!(inputs.api_key, "sk-test");
    assert_eq!(inputs.github_token, "ghp_test");
    assert_eq!(inputs.sampling.temperature, 0.5);
    assert_eq!(inputs.sampling.top_p, 1.0);
}
