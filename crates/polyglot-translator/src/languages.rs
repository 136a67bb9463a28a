use crate::error::{TranslateError, TranslateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

const LANGUAGES: &[Language] = &[
    lang("en", "English"),
    lang("fr", "French"),
    lang("es", "Spanish"),
    lang("de", "German"),
    lang("zh", "Chinese (Simplified)"),
    lang("hi", "Hindi"),
    lang("ar", "Arabic"),
    lang("ru", "Russian"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
    lang("it", "Italian"),
    lang("pt", "Portuguese"),
    lang("nl", "Dutch"),
    lang("sv", "Swedish"),
    lang("da", "Danish"),
    lang("no", "Norwegian"),
    lang("fi", "Finnish"),
    lang("el", "Greek"),
    lang("tr", "Turkish"),
    lang("pl", "Polish"),
    lang("he", "Hebrew"),
    lang("th", "Thai"),
    lang("cs", "Czech"),
    lang("uk", "Ukrainian"),
    lang("vi", "Vietnamese"),
    lang("id", "Indonesian"),
    lang("ro", "Romanian"),
    lang("hu", "Hungarian"),
    lang("bg", "Bulgarian"),
    lang("fa", "Persian"),
    lang("mr", "Marathi"),
];

/// All supported languages in display order.
pub fn list_languages() -> &'static [Language] {
    LANGUAGES
}

pub fn display_name(code: &str) -> TranslateResult<&'static str> {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
        .ok_or_else(|| TranslateError::UnknownLanguage(code.to_string()))
}

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|l| l.code == code)
}

/// Languages a text written in `source` can be translated into.
pub fn target_languages(source: &str) -> impl Iterator<Item = &'static Language> + '_ {
    LANGUAGES.iter().filter(move |l| l.code != source)
}

/// Keeps `current` if it is still a valid target for `source`, otherwise
/// picks the first available target.
pub fn fallback_target(source: &str, current: &str) -> &'static str {
    target_languages(source)
        .find(|l| l.code == current)
        .or_else(|| target_languages(source).next())
        .map_or(LANGUAGES[0].code, |l| l.code)
}
