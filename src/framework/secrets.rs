use std::{fmt::Display, path::Path};

use serde::{Deserialize, Deserializer};

/// Caller-supplied values, passed by the host as `__secrets`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    #[serde(default, deserialize_with = "non_empty")]
    github_token: Option<String>,

    #[serde(default, alias = "github_repos", deserialize_with = "non_empty")]
    github_default_repo: Option<String>,
}

impl Secrets {
    pub fn new(github_token: Option<String>, github_default_repo: Option<String>) -> Self {
        Self {
            github_token: github_token.filter(|s| !s.trim().is_empty()),
            github_default_repo: github_default_repo.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    pub fn github_default_repo(&self) -> Option<&str> {
        self.github_default_repo.as_deref()
    }

    pub fn get(&self, key: SecretKey) -> Option<&str> {
        match key {
            SecretKey::GithubToken => self.github_token(),
            SecretKey::GithubDefaultRepo => self.github_default_repo(),
        }
    }

    fn slot(&mut self, key: SecretKey) -> &mut Option<String> {
        match key {
            SecretKey::GithubToken => &mut self.github_token,
            SecretKey::GithubDefaultRepo => &mut self.github_default_repo,
        }
    }

    /// Fills every secret still missing from `store`. Secrets already present win.
    #[tracing::instrument(skip_all, name = "secrets")]
    pub async fn fill_from(&mut self, store: &impl SecretStore) {
        for key in SecretKey::ALL {
            if self.get(key).is_some() {
                continue;
            }

            if let Some(value) = store.get(key).await {
                tracing::debug!(%key, "loaded secret from store");
                *self.slot(key) = Some(value);
            }
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretKey {
    GithubToken,
    GithubDefaultRepo,
}

impl SecretKey {
    pub const ALL: [Self; 2] = [Self::GithubToken, Self::GithubDefaultRepo];
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::GithubToken => "github_token",
            Self::GithubDefaultRepo => "github_default_repo",
        })
    }
}

pub trait SecretStore {
    async fn get(&self, secret: SecretKey) -> Option<String>;
}

/// One file per secret, named after its key.
pub struct SecretFiles<'path> {
    directory: &'path Path,
}

impl<'path> SecretFiles<'path> {
    pub fn new(directory: &'path Path) -> Self {
        Self { directory }
    }
}

impl SecretStore for SecretFiles<'_> {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        tokio::fs::read_to_string(self.directory.join(secret.to_string()))
            .await
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
    }
}
