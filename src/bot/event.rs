//! Inbound event and reply shapes exchanged with the transport.
//!
//! The transport itself (Telegram, console, test harness) is a black box;
//! the dispatcher only ever sees these types.

use std::path::PathBuf;

/// One inbound event, tagged with the conversation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Free-text message.
    Message { chat: i64, text: String },
    /// Button click carrying its callback token (`remover_<id>`,
    /// `editar_<id>`).
    Callback { chat: i64, data: String },
}

/// One interactive option offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Button label shown to the user.
    pub label: String,
    /// Callback token sent back when the option is selected.
    pub data: String,
}

/// The single reply produced for an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain or lightly marked-up text.
    Text(String),
    /// Text plus a list of interactive options.
    Choices { text: String, options: Vec<Choice> },
    /// A rendered image, with an optional caption.
    Photo {
        path: PathBuf,
        caption: Option<String>,
    },
}

impl Reply {
    pub fn text(value: impl Into<String>) -> Self {
        Reply::Text(value.into())
    }
}
