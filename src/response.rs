//! Chat payloads returned to the host platform.
//!
//! The shapes here follow the Slack message format: a response carries either
//! plain `text`, legacy `attachments` or layout `blocks`, plus a visibility flag.

use serde::Serialize;

/// Who gets to see the response.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to everyone in the channel.
    InChannel,

    /// Only visible to the user who ran the command.
    #[default]
    Ephemeral,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub response_type: ResponseType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl Body {
    pub fn new(response_type: ResponseType) -> Self {
        Self {
            response_type,
            ..Default::default()
        }
    }

    pub fn in_channel() -> Self {
        Self::new(ResponseType::InChannel)
    }

    pub fn ephemeral() -> Self {
        Self::new(ResponseType::Ephemeral)
    }

    /// The body every failed invocation collapses into.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::ephemeral().text(format!("Error: {message}"))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.response_type == ResponseType::Ephemeral
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Good,
    Warning,
    Danger,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Attachment {
    pub color: Color,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
}

impl Attachment {
    pub fn new(color: Color, text: impl Into<String>) -> Self {
        Self {
            color,
            title: None,
            text: text.into(),
            pretext: None,
        }
    }

    pub fn good(text: impl Into<String>) -> Self {
        Self::new(Color::Good, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(Color::Danger, text)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pretext(mut self, pretext: Option<String>) -> Self {
        self.pretext = pretext;
        self
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: Text },
    Context { elements: Vec<Text> },
}

impl Block {
    pub fn section(text: Text) -> Self {
        Self::Section { text }
    }

    pub fn context(elements: impl IntoIterator<Item = Text>) -> Self {
        Self::Context {
            elements: elements.into_iter().collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    Mrkdwn { text: String },
    PlainText { text: String },
}

impl Text {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }
}

/// Renders `<url|label>` link markup.
pub fn link(url: impl std::fmt::Display, label: impl std::fmt::Display) -> String {
    format!("<{url}|{label}>")
}

/// What the host expects back from a handler: the payload wrapped in `body`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Response {
    pub body: Body,
}

impl From<Body> for Response {
    fn from(body: Body) -> Self {
        Self { body }
    }
}
