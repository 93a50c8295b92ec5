//! `translate`: runs text through Google Translate.

use serde::Deserialize;
use thisslime::TracingError as _;
use tracing::instrument;

use super::{CommandResult, Context};
use crate::{
    invocation::Invocation,
    response::{Block, Body, Text},
};

pub mod api;
use api::Translation;

pub mod languages;

pub const DEFAULT_LANGUAGE: &str = "en";

pub const HELP: &str = "language can be a <https://en.wikipedia.org/wiki/List_of_ISO_639-1_codes|2 character ISO6931 code> or a language name such as Spanish, Chinese, etc.";

pub const UNKNOWN_LANGUAGE: &str = "Unknown language. Language can be a <https://en.wikipedia.org/wiki/List_of_ISO_639-1_codes|2 character ISO6931 code> or a language name such as Spanish, Chinese, etc.";

pub const FOOTER: &str = "add _translate_ to your Slack with <https://nimbella.com/blog/greet-your-friends-in-their-native-language-in-slack-with-nimbella-commander/ | Commander>";

pub const RATE_LIMITED: &str =
    ":warning: *The translation service is rate limiting requests.* Try again later.";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Params {
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub text: Option<String>,
}

impl Params {
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

pub(super) async fn run(ctx: &Context, invocation: Invocation) -> CommandResult {
    let params: Params = invocation.params()?;
    Ok(translate(ctx, params).await)
}

/// What to do with a set of parameters before anything goes over the wire.
#[derive(Debug, PartialEq)]
pub enum Plan<'p> {
    Reply(Body),
    Translate { language: String, text: &'p str },
}

pub fn plan(params: &Params) -> Plan<'_> {
    let language = params.language();

    let Some(text) = params.text() else {
        return Plan::Reply(Body::ephemeral().text(HELP));
    };

    if text.trim() == "help" && language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
        return Plan::Reply(Body::in_channel().text(HELP));
    }

    match languages::resolve(language) {
        Some(language) => Plan::Translate { language, text },
        None => Plan::Reply(Body::in_channel().text(UNKNOWN_LANGUAGE)),
    }
}

#[instrument(skip_all)]
pub async fn translate(ctx: &Context, params: Params) -> Body {
    let (language, text) = match plan(&params) {
        Plan::Reply(body) => return body,
        Plan::Translate { language, text } => (language, text),
    };

    let request = api::Request::new(ctx.client(), &ctx.config().translate);

    match request.translate(&language, text).await {
        Ok(translation) => {
            tracing::debug!(source = ?translation.source_language, target = %language);
            translated(&translation)
        }
        Err(err) => {
            err.trace();
            error_body(&err)
        }
    }
}

pub fn translated(translation: &Translation) -> Body {
    Body::in_channel()
        .block(Block::section(Text::mrkdwn(&translation.text)))
        .block(Block::context([Text::mrkdwn(FOOTER)]))
}

pub fn error_body(err: &api::Error) -> Body {
    match err {
        api::Error::Status(err) if err.is_rate_limited() => Body::ephemeral().text(RATE_LIMITED),
        api::Error::Status(err) => Body::error(err.status.as_u16()),
        other => Body::error(other),
    }
}
