use serde::Deserialize;

/// The platform delivers a parsed request envelope; this is the view of it
/// that dispatch needs. Everything else in the envelope is opaque to us.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub kind: RequestKind,
    #[serde(default)]
    intent_name: Option<String>,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub session_ended_reason: Option<String>,
}

impl Request {
    pub fn intent(&self) -> Option<Intent> {
        self.intent_name.as_deref().map(Intent::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestKind {
    Launch,
    Intent,
    SessionEnded,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Intent {
    GetNewTerm,
    Help,
    Fallback,
    Cancel,
    Stop,
    Other(String),
}

impl<'a> From<&'a str> for Intent {
    fn from(s: &'a str) -> Intent {
        match s {
            "GetNewTermIntent" => Intent::GetNewTerm,
            "AMAZON.HelpIntent" => Intent::Help,
            "AMAZON.FallbackIntent" => Intent::Fallback,
            "AMAZON.CancelIntent" => Intent::Cancel,
            "AMAZON.StopIntent" => Intent::Stop,
            _ => Intent::Other(s.to_owned()),
        }
    }
}
