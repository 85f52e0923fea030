/// Compiled-in localization table for the skill.
///
/// One entry per supported locale tag. Region tags carry only the keys
/// they override; everything else resolves through the base-language
/// fallback in the locale module. The table is built once and read-only
/// for the life of the process.
use failure::{bail, Error};
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const DEFAULT_LOCALE: &str = "en";

/// The closed set of keys handlers may ask for. Adding a key here without
/// giving the default locale a value for it fails `verify` at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    SkillName,
    GetTermMessage,
    HelpMessage,
    HelpReprompt,
    FallbackMessage,
    FallbackReprompt,
    ErrorMessage,
    StopMessage,
    Terms,
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 9] = [
        ResourceKey::SkillName,
        ResourceKey::GetTermMessage,
        ResourceKey::HelpMessage,
        ResourceKey::HelpReprompt,
        ResourceKey::FallbackMessage,
        ResourceKey::FallbackReprompt,
        ResourceKey::ErrorMessage,
        ResourceKey::StopMessage,
        ResourceKey::Terms,
    ];
}

#[derive(Debug)]
pub enum Resource {
    Text(&'static str),
    List(&'static [&'static str]),
}

pub type ResourceTable = HashMap<&'static str, HashMap<ResourceKey, Resource>>;

/// The terms and acronyms the skill teaches, with their definitions.
pub const TERMS_EN: &[&str] = &[
    "2253: Final approval. Also see: DOFU.",
    "AFD: Approval for Dissemination.",
    "AFU: Approved for Use.",
    "BWS: Billing Work Sheets. Account updates these monthly for accounting.",
    "Buddy: Our old time entry program. Long live the sock puppet.",
    "CMLR: Commercial Medical Legal Review.",
    "CMO: Core Message Document.",
    "CRTD: Creation Release to Development. These are the art files (mostly PSDs) that are handed off to the developers to begin coding.",
    "CTP: Change to Production. Form used for Shire IT for deployment.",
    "CTR: Click Through Rate. Rate that websites or banners are clicked.",
    "CVA: Core Visual Aid. Also see: MVA.",
    "DOFU: Date of First Use. The first time a piece will be used or seen.",
    "DMVA: Digital Master Visual Aid. Also see: ICVA and IVA.",
    "DSA: Disease State Awareness.",
    "DTC: Direct to Consumer.",
    "FDA: Food and Drug Administration.",
    "FRD: Functional Requirement Document.",
    "ICVA: Interactive Core Visual Aid. Also see: DMVA and IVA.",
    "ISI: Important Safety Information.",
    "MARC: Endo's Med/Legal Review meetings.",
    "MBR: Monthly Business Review. A monthly meeting to predict forecasting.",
    "MLR: Med/Legal Review.",
    "MMP: Multi-Media Presentation.",
    "MOA: Mechanism of Action.",
    "MOD: Mechanism of Disease.",
    "MVA: Master Visual Aid.",
    "NSM: National Sales Meeting.",
    "PARC: Teva's Med/Legal Review meetings.",
    "PI: Prescribing Information.",
    "POA: Plan of Action meeting.",
    "POV: Point of View.",
    "QA: Quality Assurance. Strategy for how the product will be tested.",
    "QC: Quality Control. The act of testing the product.",
    "REMS: Risk Evaluation Mitigation Strategy. Used to educate about the drug (managed by a medical communications group).",
    "UI: User Interface. The Form to UX's Function.",
    "UX: User Experience. The Function to UI's Form.",
    "Vault: System used to submit projects to client's Med/Legal reviewers. Also see: Zinc.",
    "Zinc: System used to submit projects to client's Med/Legal reviewers. Also see: Vault.",
];

lazy_static! {
    static ref RESOURCES: ResourceTable = {
        let mut table = HashMap::new();

        let mut en = HashMap::new();
        en.insert(ResourceKey::SkillName, Resource::Text("GSW: Speak People"));
        en.insert(
            ResourceKey::GetTermMessage,
            Resource::Text("Here's your term: "),
        );
        en.insert(
            ResourceKey::HelpMessage,
            Resource::Text(
                "You can say tell me a space fact, or, you can say exit... What can I help you with?",
            ),
        );
        en.insert(
            ResourceKey::HelpReprompt,
            Resource::Text("What can I help you with?"),
        );
        en.insert(
            ResourceKey::FallbackMessage,
            Resource::Text(
                "The Speak People skill can't help you with that. It can help you learn terms and acronyms that are used daily at GSW. What can I help you with?",
            ),
        );
        en.insert(
            ResourceKey::FallbackReprompt,
            Resource::Text("What can I help you with?"),
        );
        en.insert(
            ResourceKey::ErrorMessage,
            Resource::Text("Sorry, an error occurred."),
        );
        en.insert(ResourceKey::StopMessage, Resource::Text("Goodbye!"));
        en.insert(ResourceKey::Terms, Resource::List(TERMS_EN));
        table.insert("en", en);

        // en-US restates only the card title; all other keys fall back to "en".
        let mut en_us = HashMap::new();
        en_us.insert(ResourceKey::SkillName, Resource::Text("GSW: Speak People"));
        table.insert("en-US", en_us);

        table
    };
}

pub fn table() -> &'static ResourceTable {
    &RESOURCES
}

/// Startup check that the default locale can answer every key and that no
/// resource anywhere in the table is empty. Failures here are deploy
/// defects, not per-request conditions.
pub fn verify() -> Result<(), Error> {
    let table = table();

    let default = match table.get(DEFAULT_LOCALE) {
        Some(entries) => entries,
        None => bail!("Default locale {:?} missing from resource table", DEFAULT_LOCALE),
    };
    for key in &ResourceKey::ALL {
        if default.get(key).is_none() {
            bail!("Default locale {:?} missing key {:?}", DEFAULT_LOCALE, key);
        }
    }

    for (locale, entries) in table {
        for (key, value) in entries {
            match value {
                Resource::Text(text) if text.is_empty() => {
                    bail!("Empty resource {:?} for locale {:?}", key, locale)
                }
                Resource::List(items) if items.is_empty() => {
                    bail!("Empty array resource {:?} for locale {:?}", key, locale)
                }
                _ => {}
            }
        }
    }

    Ok(())
}
