use std::path::Path;

use serde::Deserialize;

mod github;
pub use github::GithubConfig;

mod translate;
pub use translate::TranslateConfig;

/// Variables are read as `COMMANDER_<SECTION>__<KEY>`, e.g. `COMMANDER_GITHUB__API_URL`.
pub const ENV_PREFIX: &str = "COMMANDER";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub translate: TranslateConfig,
}

impl Config {
    /// Layers the environment over an optional TOML file over the defaults.
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            tracing::debug!(?path, "reading config file");
            builder = builder.add_source(::config::File::from(path).format(::config::FileFormat::Toml));
        }

        let config = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        tracing::debug!(?config, "done!");

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),
}
