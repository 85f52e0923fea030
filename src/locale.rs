/// Per-request view over the static resource table.
///
/// A translator is bound to the locale of one inbound request and dropped
/// with it. Lookup tries the exact locale tag first, then its base
/// language ("en-US" falls back to "en"). A key absent from both is a
/// configuration defect and surfaces as an error, never as empty speech.
use crate::resources::{self, Resource, ResourceKey, DEFAULT_LOCALE};
use failure::Fail;
use rand::Rng;

pub struct Translator {
    locale: String,
    source: Box<dyn RandomSource>,
}

/// Supplies the index used to pick one entry out of an array resource.
/// Behind a trait so tests can pin the selection.
pub trait RandomSource {
    fn pick(&mut self, len: usize) -> usize;
}

struct SystemRandom;

impl RandomSource for SystemRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl Translator {
    pub fn new(locale: &str) -> Translator {
        Translator::with_source(locale, Box::new(SystemRandom))
    }

    pub fn with_source(locale: &str, source: Box<dyn RandomSource>) -> Translator {
        Translator {
            locale: locale.to_owned(),
            source,
        }
    }

    /// Resolve `key` for this request's locale. Array resources yield one
    /// element chosen through the random source.
    pub fn resolve(&mut self, key: ResourceKey) -> Result<String, LocaleError> {
        self.resolve_args(key, &[])
    }

    /// Like `resolve`, with positional `%s` substitutions applied after
    /// array element selection.
    pub fn resolve_args(&mut self, key: ResourceKey, args: &[&str]) -> Result<String, LocaleError> {
        let resource = lookup(&self.locale, key).ok_or_else(|| LocaleError::MissingKey {
            locale: self.locale.clone(),
            key,
        })?;

        let value = match resource {
            Resource::Text(text) => text.to_string(),
            Resource::List(items) => {
                let index = self.source.pick(items.len());
                items[index].to_string()
            }
        };

        Ok(if args.is_empty() {
            value
        } else {
            substitute(&value, args)
        })
    }

    /// The generic apology spoken when a handler fails. Resolution here
    /// must be total: if the request locale cannot answer, fall back to
    /// the default locale, which `resources::verify` proved complete at
    /// startup.
    pub fn error_message(&mut self) -> String {
        match self.resolve(ResourceKey::ErrorMessage) {
            Ok(message) => message,
            Err(_) => match lookup(DEFAULT_LOCALE, ResourceKey::ErrorMessage) {
                Some(Resource::Text(text)) => text.to_string(),
                _ => "Sorry, an error occurred.".to_owned(),
            },
        }
    }
}

#[derive(Fail, Debug)]
pub enum LocaleError {
    #[fail(display = "No resource {:?} for locale {:?} or its fallbacks", key, locale)]
    MissingKey { locale: String, key: ResourceKey },
}

fn lookup(locale: &str, key: ResourceKey) -> Option<&'static Resource> {
    let table = resources::table();
    if let Some(value) = table.get(locale).and_then(|entries| entries.get(&key)) {
        return Some(value);
    }
    base_language(locale).and_then(|base| table.get(base).and_then(|entries| entries.get(&key)))
}

/// "en-US" -> "en". None when the tag carries no region part.
fn base_language(locale: &str) -> Option<&str> {
    locale.split('-').next().filter(|base| *base != locale)
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    for arg in args {
        match rest.find("%s") {
            Some(index) => {
                out.push_str(&rest[..index]);
                out.push_str(arg);
                rest = &rest[index + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
