//! `github_stats`: community statistics for one or more repositories.

use futures::{stream, StreamExt};
use reqwest::StatusCode;
use serde::Deserialize;
use thisslime::TracingError as _;
use tracing::instrument;

use super::{CommandResult, Context};
use crate::{
    framework::Secrets,
    invocation::Invocation,
    response::{link, Attachment, Body},
};

pub mod api;
use api::Fetched;

pub mod repo;
use repo::RepoName;

pub const MISSING_REPO: &str = "Either pass a repo name or create a secret named `github_default_repo` to avoid passing the repository.";

pub const TOKEN_HINT: &str = "For greater limits, create a secret named `github_token` with a <https://help.github.com/en/github/authenticating-to-github/creating-a-personal-access-token-for-the-command-line|GitHub token> using `/nc secret_create`.";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Params {
    #[serde(default)]
    pub repo: Option<String>,
}

pub(super) async fn run(ctx: &Context, invocation: Invocation) -> CommandResult {
    let params: Params = invocation.params()?;
    Ok(github_stats(ctx, params, &invocation.secrets).await)
}

#[instrument(skip_all)]
pub async fn github_stats(ctx: &Context, params: Params, secrets: &Secrets) -> Body {
    let repos = requested_repos(params.repo.as_deref(), secrets);
    if repos.is_empty() {
        return Body::ephemeral().text(MISSING_REPO);
    }

    let token = secrets.github_token();
    let config = &ctx.config().github;
    let request = api::Request::new(ctx.client(), config, token);
    let request = &request;

    let attachments = stream::iter(repos)
        .map(|entry| async move {
            let result = match entry.parse::<RepoName>() {
                Ok(repo) => request.repository(&repo).await,
                Err(err) => Err(err.into()),
            };
            (entry, result)
        })
        .buffered(config.max_concurrent_requests.get())
        .map(|(entry, result)| match result {
            Ok(fetched) => stats_attachment(&fetched, config.rate_limit_threshold, token),
            Err(err) => {
                err.trace();
                error_attachment(&entry, &err, token)
            }
        })
        .collect::<Vec<_>>()
        .await;

    Body::in_channel().attachments(attachments)
}

/// The `repo` parameter wins over the default repository secret.
pub fn requested_repos(param: Option<&str>, secrets: &Secrets) -> Vec<String> {
    param
        .filter(|repo| !repo.trim().is_empty())
        .or(secrets.github_default_repo())
        .map(repo::split_list)
        .unwrap_or_default()
}

fn token_hint(token: Option<&str>) -> &'static str {
    if token.is_some() {
        ""
    } else {
        TOKEN_HINT
    }
}

fn warning(headline: &str, token: Option<&str>) -> String {
    format!(":warning: *{headline}* {}", token_hint(token))
        .trim_end()
        .to_owned()
}

pub fn stats_attachment(fetched: &Fetched, threshold: u32, token: Option<&str>) -> Attachment {
    let repository = &fetched.repository;

    let text = [
        format!("Stars: {}", repository.stargazers_count),
        format!("Forks: {}", repository.forks),
        format!("Open Issues: {}", repository.open_issues_count),
        format!("Watchers: {}", repository.subscribers_count),
        format!("Contributors: {}", repository.network_count),
        format!("Default Branch: {}", repository.default_branch),
        format!(
            "Most used language: {}",
            repository.language.as_deref().unwrap_or("None")
        ),
    ]
    .join("\n");

    let pretext = fetched
        .rate_limit_remaining
        .filter(|remaining| *remaining < threshold)
        .map(|_| warning("You are about to reach the api rate limit.", token));

    Attachment::good(text)
        .title(format!(
            "{} statistics",
            link(&repository.html_url, &repository.full_name)
        ))
        .pretext(pretext)
}

pub fn error_attachment(entry: &str, err: &api::Error, token: Option<&str>) -> Attachment {
    let text = match err {
        api::Error::Status(err) if err.status == StatusCode::FORBIDDEN => {
            warning("The api rate limit has been exhausted.", token)
        }
        api::Error::Status(err) if err.status == StatusCode::NOT_FOUND => {
            format!(
                "Repository not found: {}.",
                link(format!("https://github.com/{entry}"), entry)
            )
        }
        api::Error::Status(err) => {
            let message = err
                .message
                .as_deref()
                .or(err.status.canonical_reason())
                .unwrap_or_default();

            format!("Error: {} {message}", err.status.as_u16())
                .trim_end()
                .to_owned()
        }
        api::Error::InvalidName(err) => format!(
            "Invalid repository name `{}`, expected `owner/name`.",
            err.input()
        ),
        api::Error::ParseUrl(err) => format!("Error: {err}"),
        api::Error::Client(err) => format!("Error: {err}"),
    };

    Attachment::danger(text)
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use tracing_test::traced_test;

    use super::{
        api::{self, Fetched, Repository, StatusError},
        error_attachment, requested_repos, stats_attachment, TOKEN_HINT,
    };
    use crate::{
        framework::Secrets,
        response::{Attachment, Color},
    };

    fn fetched(remaining: Option<u32>) -> Fetched {
        let repository: Repository = serde_json::from_value(api::tests::rust_lang_rust())
            .expect("fixture should deserialize");

        Fetched {
            repository,
            rate_limit_remaining: remaining,
        }
    }

    fn status(code: u16, message: Option<&str>) -> api::Error {
        StatusError::new(
            StatusCode::from_u16(code).expect("hard-coded"),
            message.map(ToOwned::to_owned),
        )
        .into()
    }

    mod repos {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn param_overrides_secret() {
            let secrets = Secrets::new(None, Some("octocat/hello-world".to_owned()));

            assert_eq!(
                requested_repos(Some("rust-lang/rust, tokio-rs/tokio"), &secrets),
                vec!["rust-lang/rust", "tokio-rs/tokio"]
            );
        }

        #[test]
        fn falls_back_to_secret() {
            let secrets = Secrets::new(None, Some("octocat/hello-world ,".to_owned()));

            assert_eq!(requested_repos(None, &secrets), vec!["octocat/hello-world"]);
            assert_eq!(requested_repos(Some("  "), &secrets), vec!["octocat/hello-world"]);
        }

        #[test]
        fn missing_everywhere() {
            assert!(requested_repos(None, &Secrets::default()).is_empty());
        }
    }

    mod stats {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn fields() {
            let attachment = stats_attachment(&fetched(Some(4999)), 3, Some("ghp_boop"));

            assert_eq!(
                attachment,
                Attachment {
                    color: Color::Good,
                    title: Some(
                        "<https://github.com/rust-lang/rust|rust-lang/rust> statistics".to_owned()
                    ),
                    text: "Stars: 98765\nForks: 12345\nOpen Issues: 9876\nWatchers: 1500\nContributors: 12345\nDefault Branch: master\nMost used language: Rust".to_owned(),
                    pretext: None,
                }
            );
        }

        #[test]
        fn no_language() {
            let mut fetched = fetched(None);
            fetched.repository.language = None;

            let attachment = stats_attachment(&fetched, 3, None);
            assert!(attachment.text.ends_with("Most used language: None"));
            assert_eq!(attachment.pretext, None);
        }

        #[test]
        fn near_rate_limit_with_token() {
            let attachment = stats_attachment(&fetched(Some(2)), 3, Some("ghp_boop"));

            assert_eq!(
                attachment.pretext.as_deref(),
                Some(":warning: *You are about to reach the api rate limit.*")
            );
        }

        #[test]
        fn near_rate_limit_without_token() {
            let attachment = stats_attachment(&fetched(Some(0)), 3, None);

            assert_eq!(
                attachment.pretext,
                Some(format!(
                    ":warning: *You are about to reach the api rate limit.* {TOKEN_HINT}"
                ))
            );
        }

        #[test]
        fn threshold_is_exclusive() {
            assert_eq!(stats_attachment(&fetched(Some(3)), 3, None).pretext, None);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        #[traced_test]
        fn rate_limit_exhausted() {
            let attachment = error_attachment("rust-lang/rust", &status(403, None), None);

            assert_eq!(attachment.color, Color::Danger);
            assert_eq!(
                attachment.text,
                format!(":warning: *The api rate limit has been exhausted.* {TOKEN_HINT}")
            );
            assert_eq!(attachment.title, None);
        }

        #[test]
        fn rate_limit_exhausted_with_token() {
            let attachment =
                error_attachment("rust-lang/rust", &status(403, None), Some("ghp_boop"));

            assert_eq!(
                attachment.text,
                ":warning: *The api rate limit has been exhausted.*"
            );
        }

        #[test]
        fn not_found() {
            let attachment =
                error_attachment("octocat/nope", &status(404, Some("Not Found")), None);

            assert_eq!(
                attachment.text,
                "Repository not found: <https://github.com/octocat/nope|octocat/nope>."
            );
        }

        #[test]
        fn other_status_with_message() {
            let attachment = error_attachment(
                "rust-lang/rust",
                &status(401, Some("Bad credentials")),
                Some("ghp_expired"),
            );

            assert_eq!(attachment.text, "Error: 401 Bad credentials");
        }

        #[test]
        fn other_status_without_message() {
            let attachment = error_attachment("rust-lang/rust", &status(502, None), None);

            assert_eq!(attachment.text, "Error: 502 Bad Gateway");
        }

        #[test]
        fn invalid_name() {
            let err: api::Error = "rust"
                .parse::<super::super::RepoName>()
                .expect_err("hard-coded")
                .into();

            assert_eq!(
                error_attachment("rust", &err, None).text,
                "Invalid repository name `rust`, expected `owner/name`."
            );
        }
    }

    mod fan_out {
        use super::*;
        use pretty_assertions::assert_eq;
        use serde_json::json;

        use crate::{
            commands::{
                github::{github_stats, Params},
                Context,
            },
            framework::{config::GithubConfig, Config},
            test_support::{Canned, Server},
        };

        #[tokio::test]
        #[traced_test]
        async fn one_attachment_per_entry_in_order() {
            let server = Server::spawn(|request| match request.target.as_str() {
                "/repos/a/ok" => Canned::json(200, api::tests::rust_lang_rust())
                    .header(api::RATE_LIMIT_REMAINING, 1),
                "/repos/a/nope" => Canned::json(404, json!({ "message": "Not Found" })),
                _ => Canned::json(401, json!({ "message": "Bad credentials" })),
            })
            .await;

            let ctx = Context::new(Config {
                github: GithubConfig {
                    api_url: server.url("/"),
                    ..Default::default()
                },
                ..Default::default()
            });
            let params = Params {
                repo: Some("a/ok, a/nope ,a/boom, owner/..".to_owned()),
            };
            let secrets = Secrets::new(Some("tok".to_owned()), None);

            let body = github_stats(&ctx, params, &secrets).await;

            assert!(!body.is_ephemeral());
            let texts: Vec<_> = body.attachments.iter().map(|a| a.text.as_str()).collect();
            assert_eq!(
                texts[1..].to_vec(),
                vec![
                    "Repository not found: <https://github.com/a/nope|a/nope>.",
                    "Error: 401 Bad credentials",
                    "Invalid repository name `owner/..`, expected `owner/name`.",
                ]
            );

            assert_eq!(body.attachments[0].color, Color::Good);
            assert_eq!(
                body.attachments[0].pretext.as_deref(),
                Some(":warning: *You are about to reach the api rate limit.*")
            );

            let received = server.received();
            assert_eq!(received.len(), 3);
            assert!(received
                .iter()
                .all(|request| request.header("authorization") == Some("Bearer tok")));
        }
    }
}
