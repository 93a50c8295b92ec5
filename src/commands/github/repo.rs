use std::{fmt::Display, str::FromStr, sync::OnceLock};

use regex::Regex;

/// `owner/name`, as GitHub spells repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName {
    owner: String,
    name: String,
}

impl RepoName {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::unwrap_used)]
    fn regex() -> &'static Regex {
        static REGEX: OnceLock<Regex> = OnceLock::new();

        REGEX.get_or_init(|| Regex::new(r"^([A-Za-z0-9-]+)/([A-Za-z0-9._-]+)$").unwrap())
    }
}

impl Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = Self::regex()
            .captures(s.trim())
            .ok_or_else(|| ParseError::new(s))?;

        // `.` and `..` would be resolved away as path segments
        if captures[2].chars().all(|c| c == '.') {
            return Err(ParseError::new(s));
        }

        Ok(Self {
            owner: captures[1].to_owned(),
            name: captures[2].to_owned(),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error, thisslime::TracingError)]
#[error("invalid repository name `{input}`, expected `owner/name`")]
#[event(level = WARN)]
pub struct ParseError {
    #[field(print = Display)]
    input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Splits a comma-separated list, dropping blank entries.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|repo| !repo.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
