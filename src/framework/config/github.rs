use std::num::NonZeroUsize;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GithubConfig {
    /// Base of the REST api; must end with a slash so paths join under it.
    pub api_url: url::Url,

    pub max_concurrent_requests: NonZeroUsize,

    /// Below this many remaining requests, stats get a rate limit warning.
    pub rate_limit_threshold: u32,

    pub user_agent: String,
}

impl Default for GithubConfig {
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            api_url: url::Url::parse("https://api.github.com/").unwrap(),
            max_concurrent_requests: NonZeroUsize::new(4).unwrap(),
            rate_limit_threshold: 3,
            user_agent: concat!("commander/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
