use crate::{
    locale::Translator,
    log_error,
    request::{Intent, Request, RequestKind},
    resources::ResourceKey,
    response::Response,
};
use failure::{Error, Fail};
use log::info;

pub fn process_request(request: Request) -> Response {
    let mut translator = Translator::new(&request.locale);
    handle(request, &mut translator)
}

/// Dispatch the request to its handler and guarantee a response comes
/// back: any handler failure is logged and turned into the apology.
fn handle(request: Request, translator: &mut Translator) -> Response {
    let kind = request.kind;
    info!("Request Type: {:?}", kind);

    let response_result = match kind {
        RequestKind::Launch => open_term(translator),
        RequestKind::Intent => process_intent(&request, translator),
        RequestKind::SessionEnded => Ok(end_session(&request)),
    };

    match response_result {
        Ok(response) => response,
        Err(e) => {
            log_error(&e);
            end_error(translator)
        }
    }
}

fn process_intent(request: &Request, translator: &mut Translator) -> Result<Response, Error> {
    let intent = request.intent();
    info!("Intent: {:?}", intent);

    match intent {
        Some(Intent::GetNewTerm) => open_term(translator),
        Some(Intent::Help) => open_help(translator),
        Some(Intent::Fallback) => open_fallback(translator),
        Some(Intent::Cancel) | Some(Intent::Stop) => end_goodbye(translator),
        Some(Intent::Other(name)) => Err(SkillError::UnhandledIntent { name }.into()),
        None => Err(SkillError::MissingIntentName.into()),
    }
}

/// Launching the skill and asking for a new term share a handler: both
/// speak one randomly chosen term and show it on the card.
fn open_term(translator: &mut Translator) -> Result<Response, Error> {
    let term = translator.resolve(ResourceKey::Terms)?;
    let speech = format!("{}{}", translator.resolve(ResourceKey::GetTermMessage)?, term);

    Ok(Response::new(true)
        .speech(speech)
        .card(translator.resolve(ResourceKey::SkillName)?, term))
}

fn open_help(translator: &mut Translator) -> Result<Response, Error> {
    Ok(Response::new(false)
        .speech(translator.resolve(ResourceKey::HelpMessage)?)
        .reprompt(translator.resolve(ResourceKey::HelpReprompt)?))
}

fn open_fallback(translator: &mut Translator) -> Result<Response, Error> {
    Ok(Response::new(false)
        .speech(translator.resolve(ResourceKey::FallbackMessage)?)
        .reprompt(translator.resolve(ResourceKey::FallbackReprompt)?))
}

fn end_goodbye(translator: &mut Translator) -> Result<Response, Error> {
    Ok(Response::new(true).speech(translator.resolve(ResourceKey::StopMessage)?))
}

fn end_session(request: &Request) -> Response {
    info!(
        "Session ended with reason: {}",
        request.session_ended_reason.as_deref().unwrap_or("UNKNOWN")
    );
    Response::end()
}

fn end_error(translator: &mut Translator) -> Response {
    let message = translator.error_message();
    Response::new(false).speech(message.clone()).reprompt(message)
}

#[derive(Fail, Debug)]
enum SkillError {
    #[fail(display = "No handler for intent {:?}", name)]
    UnhandledIntent { name: String },
    #[fail(display = "Intent request without an intent name")]
    MissingIntentName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::RandomSource;
    use crate::resources::TERMS_EN;
    use serde_json::json;

    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn request(value: serde_json::Value) -> Request {
        serde_json::from_value(value).unwrap()
    }

    fn pinned(locale: &str, index: usize) -> Translator {
        Translator::with_source(locale, Box::new(FixedIndex(index)))
    }

    #[test]
    fn launch_speaks_a_term_with_card() {
        let mut translator = pinned("en", 3);
        let response = handle(request(json!({"kind": "Launch", "locale": "en"})), &mut translator);

        assert_eq!(
            response.speech_text,
            format!("Here's your term: {}", TERMS_EN[3])
        );
        assert_eq!(response.reprompt_text, None);
        assert_eq!(response.should_end_session, true);

        let card = response.card.unwrap();
        assert_eq!(card.title, "GSW: Speak People");
        assert_eq!(card.body, TERMS_EN[3]);
    }

    #[test]
    fn get_new_term_intent_matches_launch() {
        let mut launch_translator = pinned("en", 11);
        let launch = handle(
            request(json!({"kind": "Launch", "locale": "en"})),
            &mut launch_translator,
        );

        let mut intent_translator = pinned("en", 11);
        let by_intent = handle(
            request(json!({"kind": "Intent", "intentName": "GetNewTermIntent", "locale": "en"})),
            &mut intent_translator,
        );

        assert_eq!(launch.speech_text, by_intent.speech_text);
    }

    #[test]
    fn help_speaks_and_keeps_session_open() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(json!({"kind": "Intent", "intentName": "AMAZON.HelpIntent", "locale": "en"})),
            &mut translator,
        );

        assert_eq!(
            response.speech_text,
            "You can say tell me a space fact, or, you can say exit... What can I help you with?"
        );
        assert_eq!(
            response.reprompt_text.as_deref(),
            Some("What can I help you with?")
        );
        assert_eq!(response.should_end_session, false);
    }

    #[test]
    fn fallback_explains_what_the_skill_does() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(
                json!({"kind": "Intent", "intentName": "AMAZON.FallbackIntent", "locale": "en"}),
            ),
            &mut translator,
        );

        assert_eq!(
            response.speech_text,
            "The Speak People skill can't help you with that. It can help you learn terms and acronyms that are used daily at GSW. What can I help you with?"
        );
        assert_eq!(
            response.reprompt_text.as_deref(),
            Some("What can I help you with?")
        );
        assert_eq!(response.should_end_session, false);
    }

    #[test]
    fn stop_says_goodbye_and_ends_session() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(json!({"kind": "Intent", "intentName": "AMAZON.StopIntent", "locale": "en"})),
            &mut translator,
        );

        assert_eq!(response.speech_text, "Goodbye!");
        assert_eq!(response.reprompt_text, None);
        assert_eq!(response.should_end_session, true);
    }

    #[test]
    fn cancel_behaves_like_stop() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(
                json!({"kind": "Intent", "intentName": "AMAZON.CancelIntent", "locale": "en"}),
            ),
            &mut translator,
        );

        assert_eq!(response.speech_text, "Goodbye!");
        assert_eq!(response.should_end_session, true);
    }

    #[test]
    fn unknown_intent_yields_the_apology() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(json!({"kind": "Intent", "intentName": "TellMeAJokeIntent", "locale": "en"})),
            &mut translator,
        );

        assert_eq!(response.speech_text, "Sorry, an error occurred.");
        assert_eq!(
            response.reprompt_text.as_deref(),
            Some("Sorry, an error occurred.")
        );
    }

    #[test]
    fn intent_request_without_a_name_yields_the_apology() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(json!({"kind": "Intent", "locale": "en"})),
            &mut translator,
        );

        assert_eq!(response.speech_text, "Sorry, an error occurred.");
    }

    #[test]
    fn unknown_locale_yields_the_apology() {
        let mut translator = pinned("fr-FR", 0);
        let response = handle(
            request(json!({"kind": "Launch", "locale": "fr-FR"})),
            &mut translator,
        );

        assert_eq!(response.speech_text, "Sorry, an error occurred.");
        assert_eq!(
            response.reprompt_text.as_deref(),
            Some("Sorry, an error occurred.")
        );
    }

    #[test]
    fn session_ended_acknowledges_silently() {
        let mut translator = pinned("en", 0);
        let response = handle(
            request(json!({"kind": "SessionEnded", "sessionEndedReason": "USER_INITIATED"})),
            &mut translator,
        );

        assert_eq!(response.speech_text, "");
        assert_eq!(response.reprompt_text, None);
        assert!(response.card.is_none());
    }
}
