use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::framework::config::TranslateConfig;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Let the translator detect the source language.
const SOURCE_LANGUAGE: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub source_language: Option<String>,
}

impl Translation {
    /// Reads the `translate_a/single` array: `[[[translated, original, ..], ..], null, "source", ..]`.
    ///
    /// Longer input comes back split into sentences, one segment each.
    pub fn from_value(value: &Value) -> Option<Self> {
        let segments = value.get(0)?.as_array()?;

        let text: String = segments
            .iter()
            .filter_map(|segment| segment.get(0)?.as_str())
            .collect();

        if text.is_empty() {
            return None;
        }

        let source_language = value.get(2).and_then(Value::as_str).map(ToOwned::to_owned);

        Some(Self {
            text,
            source_language,
        })
    }
}

pub struct Request<'a> {
    client: &'a reqwest::Client,
    config: &'a TranslateConfig,
}

impl<'a> Request<'a> {
    pub fn new(client: &'a reqwest::Client, config: &'a TranslateConfig) -> Self {
        Self { client, config }
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn translate(&self, target: &str, text: &str) -> Result<Translation> {
        let response = self
            .client
            .get(self.config.url.clone())
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANGUAGE),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(ReqwestClientError::from)?;

        let status = response.status();
        debug!(%status);

        if !status.is_success() {
            return Err(StatusError::new(status).into());
        }

        let value: Value = response.json().await.map_err(ReqwestClientError::from)?;

        Translation::from_value(&value).ok_or(Error::Malformed(value))
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[span]
pub enum Error {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Client(#[from] ReqwestClientError),

    #[error("unexpected response from translation service")]
    #[event(level = ERROR)]
    Malformed(Value),
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[error("translation service returned {status}")]
#[event(level = WARN)]
pub struct StatusError {
    #[field(print = Display)]
    pub status: StatusCode,
}

impl StatusError {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    /// The free endpoint answers throttled clients with 429, sometimes 403.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self.status,
            StatusCode::TOO_MANY_REQUESTS | StatusCode::FORBIDDEN
        )
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
