use reqwest::{
    header::{HeaderMap, ACCEPT, USER_AGENT},
    StatusCode,
};
use tracing::debug;

use super::repo::{self, RepoName};
use crate::framework::config::GithubConfig;

pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

const MEDIA_TYPE: &str = "application/vnd.github+json";

type Result<T, E = Error> = std::result::Result<T, E>;

/// The part of `GET /repos/{owner}/{repo}` that ends up in the stats.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks: u64,
    pub open_issues_count: u64,
    pub subscribers_count: u64,
    pub network_count: u64,
    pub default_branch: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub repository: Repository,
    pub rate_limit_remaining: Option<u32>,
}

pub struct Request<'a> {
    client: &'a reqwest::Client,
    config: &'a GithubConfig,
    token: Option<&'a str>,
}

impl<'a> Request<'a> {
    pub fn new(client: &'a reqwest::Client, config: &'a GithubConfig, token: Option<&'a str>) -> Self {
        Self {
            client,
            config,
            token,
        }
    }

    fn url(&self, repo: &RepoName) -> Result<reqwest::Url, url::ParseError> {
        self.config
            .api_url
            .join(&format!("repos/{}/{}", repo.owner(), repo.name()))
    }

    #[tracing::instrument(skip_all, fields(%repo))]
    pub async fn repository(&self, repo: &RepoName) -> Result<Fetched> {
        let mut request = self
            .client
            .get(self.url(repo)?)
            .header(ACCEPT, MEDIA_TYPE)
            .header(USER_AGENT, &self.config.user_agent);

        if let Some(token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ReqwestClientError::from)?;
        let status = response.status();
        let rate_limit_remaining = rate_limit_remaining(response.headers());

        debug!(%status, ?rate_limit_remaining);

        if !status.is_success() {
            let message = response
                .json::<ErrorMessage>()
                .await
                .ok()
                .map(|body| body.message);

            return Err(StatusError::new(status, message).into());
        }

        let repository = response
            .json::<Repository>()
            .await
            .map_err(ReqwestClientError::from)?;

        Ok(Fetched {
            repository,
            rate_limit_remaining,
        })
    }
}

pub fn rate_limit_remaining(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(RATE_LIMIT_REMAINING)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[derive(serde::Deserialize)]
struct ErrorMessage {
    message: String,
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[span]
pub enum Error {
    #[error(transparent)]
    InvalidName(#[from] repo::ParseError),

    #[error(transparent)]
    #[event(level = WARN)]
    ParseUrl(#[from] url::ParseError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Client(#[from] ReqwestClientError),
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[error("github api returned {status}")]
#[event(level = WARN)]
pub struct StatusError {
    #[field(print = Display)]
    pub status: StatusCode,

    #[field(print = Debug)]
    pub message: Option<String>,
}

impl StatusError {
    pub fn new(status: StatusCode, message: Option<String>) -> Self {
        Self { status, message }
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[error("{source}")]
#[event(level = ERROR)]
pub struct ReqwestClientError {
    #[field(print = Debug)]
    #[from]
    pub(crate) source: reqwest::Error,
}
