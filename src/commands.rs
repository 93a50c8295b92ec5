use std::sync::Arc;

use crate::{errors::CommandError, framework::Config, invocation::Invocation, response::Body};

macro_rules! list {
    ($($pub:vis $module:ident => $name:literal),+ $(,)?) => {
        $(
            $pub mod $module;
        )+

        /// Names the host can invoke, in registration order.
        pub const NAMES: &[&str] = &[$($name),+];

        #[tracing::instrument(skip(ctx, invocation))]
        pub async fn dispatch(
            ctx: &Context,
            name: &str,
            invocation: Invocation,
        ) -> crate::Result<Body> {
            match name {
                $(
                    $name => {
                        invocation.log_command($name);
                        Ok($module::run(ctx, invocation).await?)
                    }
                )+
                other => Err(CommandError::Unknown(other.to_owned()).into()),
            }
        }
    };
}

list! {
    pub github => "github_stats",
    pub translate => "translate",
}

pub type CommandResult<T = Body> = Result<T, CommandError>;

/// Shared by every invocation the process handles.
#[derive(Debug, Clone)]
pub struct Context {
    client: reqwest::Client,
    config: Arc<Config>,
}

impl Context {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

trait LogCommands {
    fn log_command(&self, name: &str);
}

impl LogCommands for Invocation {
    fn log_command(&self, name: &str) {
        tracing::info!(
            command = name,
            "{}",
            self.command_text.as_deref().unwrap_or_default()
        );
    }
}
