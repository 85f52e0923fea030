use serde::Serialize;

/// Spoken response payload handed back to the platform. Built fresh per
/// request; optional pieces are left off the wire when unset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub speech_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub should_end_session: bool,
}

/// Visual companion shown on devices with a screen.
#[derive(Debug, Serialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Response {
    pub fn new(should_end_session: bool) -> Response {
        Response {
            speech_text: String::new(),
            reprompt_text: None,
            card: None,
            should_end_session,
        }
    }

    /// Empty acknowledgement, used for session-ended cleanup events.
    pub fn end() -> Response {
        Response::new(true)
    }

    pub fn speech<S: Into<String>>(mut self, text: S) -> Response {
        self.speech_text = text.into();
        self
    }

    pub fn reprompt<S: Into<String>>(mut self, text: S) -> Response {
        self.reprompt_text = Some(text.into());
        self
    }

    pub fn card<S: Into<String>>(mut self, title: S, body: S) -> Response {
        self.card = Some(Card {
            title: title.into(),
            body: body.into(),
        });
        self
    }
}
