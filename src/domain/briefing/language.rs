//! Supported languages and the per-language strings the pipeline depends on.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Language chosen by the client for the wizard, the summary and the confirmation email.
///
/// Parsing is total: a missing, null or unrecognized code resolves to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Language {
    #[default]
    En,
    Es,
    Pl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Pl];

    /// Resolves a language code, falling back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Language::Es,
            "pl" => Language::Pl,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pl => "pl",
        }
    }

    /// English name of the language, as used in AI prompts.
    pub fn full_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Pl => "Polish",
        }
    }

    /// Strings for this language.
    pub fn pack(&self) -> &'static LanguagePack {
        LanguagePack::for_code(self.code())
    }
}

impl From<Option<String>> for Language {
    fn from(code: Option<String>) -> Self {
        code.as_deref().map_or(Language::En, Language::from_code)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Per-language option sets and client confirmation text.
#[derive(Debug)]
pub struct LanguagePack {
    pub code: &'static str,
    /// Deadline choices offered on the timeline step.
    pub deadlines: &'static [&'static str],
    /// Budget range choices offered on the timeline step.
    pub budget_ranges: &'static [&'static str],
    pub confirmation_subject: &'static str,
    /// Body template; `{name}` and `{project}` are substituted.
    pub confirmation_body: &'static str,
}

static PACKS: Lazy<Vec<LanguagePack>> = Lazy::new(|| {
    vec![
        LanguagePack {
            code: "en",
            deadlines: &["ASAP", "1 month", "2-3 months", "Flexible"],
            budget_ranges: &["< 1,000€", "1,000€ - 3,000€", "3,000€ - 10,000€", "> 10,000€"],
            confirmation_subject: "Briefing Received",
            confirmation_body: "Hi {name}, we have received the details of your project \"{project}\". We will contact you soon.",
        },
        LanguagePack {
            code: "es",
            deadlines: &["Lo antes posible", "1 mes", "2-3 meses", "Flexible"],
            budget_ranges: &["< 1.000€", "1.000€ - 3.000€", "3.000€ - 10.000€", "> 10.000€"],
            confirmation_subject: "Briefing Recibido",
            confirmation_body: "Hola {name}, hemos recibido correctamente los detalles de tu proyecto \"{project}\". Te contactaremos pronto.",
        },
        LanguagePack {
            code: "pl",
            deadlines: &["Jak najszybciej", "1 miesiąc", "2-3 miesiące", "Elastycznie"],
            budget_ranges: &["< 1 000€", "1 000€ - 3 000€", "3 000€ - 10 000€", "> 10 000€"],
            confirmation_subject: "Briefing Otrzymany",
            confirmation_body: "Cześć {name}, otrzymaliśmy szczegóły Twojego projektu \"{project}\". Wkrótce się skontaktujemy.",
        },
    ]
});

impl LanguagePack {
    /// Looks up a pack by code; unknown codes get the English pack.
    pub fn for_code(code: &str) -> &'static LanguagePack {
        let packs: &'static [LanguagePack] = &PACKS;
        packs
            .iter()
            .find(|p| p.code == code)
            .unwrap_or(&packs[0])
    }

    /// Confirmation body with the client's name and project substituted.
    pub fn confirmation_text(&self, full_name: &str, project_name: &str) -> String {
        self.confirmation_body
            .replace("{name}", full_name)
            .replace("{project}", project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_recognizes_supported_languages() {
        assert_eq!(Language::from_code("es"), Language::Es);
        assert_eq!(Language::from_code("PL"), Language::Pl);
        assert_eq!(Language::from_code("en"), Language::En);
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn serde_uses_language_codes() {
        assert_eq!(serde_json::to_string(&Language::Pl).unwrap(), "\"pl\"");
        let lang: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(lang, Language::Es);
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn null_code_falls_back_to_english() {
        let lang: Language = serde_json::from_str("null").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn full_names_for_prompts() {
        assert_eq!(Language::Es.full_name(), "Spanish");
        assert_eq!(Language::Pl.full_name(), "Polish");
    }

    #[test]
    fn every_language_has_a_pack() {
        for lang in Language::ALL {
            assert_eq!(lang.pack().code, lang.code());
        }
    }

    #[test]
    fn unknown_pack_code_uses_english_entry() {
        assert_eq!(LanguagePack::for_code("xx").confirmation_subject, "Briefing Received");
    }

    #[test]
    fn confirmation_text_interpolates_name_and_project() {
        let text = Language::Es.pack().confirmation_text("Ana", "Atlas");
        assert!(text.starts_with("Hola Ana,"));
        assert!(text.contains("\"Atlas\""));
    }

    #[test]
    fn option_sets_are_per_language() {
        assert!(Language::En.pack().deadlines.contains(&"ASAP"));
        assert!(Language::Es.pack().deadlines.contains(&"1 mes"));
        assert!(!Language::En.pack().deadlines.contains(&"1 mes"));
    }
}
