//! The envelope the host wraps every command call in.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};
use thisslime::TracingError as _;

use crate::{
    commands::{self, Context},
    errors::InvocationError,
    framework::Secrets,
    response::{Body, Response},
};

/// Arguments as the host passes them: `{ "params": {..}, "commandText": "..", "__secrets": {..} }`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    #[serde(default)]
    pub params: Map<String, Value>,

    #[serde(default)]
    pub command_text: Option<String>,

    #[serde(default, rename = "__secrets")]
    pub secrets: Secrets,
}

impl Invocation {
    pub fn from_json(json: &str) -> Result<Self, InvocationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, InvocationError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads the parameters into a command's own shape.
    pub fn params<P: DeserializeOwned>(&self) -> Result<P, serde_json::Error> {
        serde_json::from_value(Value::Object(self.params.clone()))
    }
}

/// Runs a command, turning any failure into a message for the user.
#[tracing::instrument(skip(ctx, invocation))]
pub async fn handle(ctx: &Context, name: &str, invocation: Invocation) -> Response {
    match commands::dispatch(ctx, name, invocation).await {
        Ok(body) => body.into(),
        Err(err) => {
            err.trace();
            Body::error(err).into()
        }
    }
}
