use std::sync::OnceLock;

/// ISO 639-1 style language code ("en", "zh-cn", ...) or the `auto` sentinel
pub type LanguageCode = String;

/// Pseudo-code asking the backend to detect the source language
pub const AUTO_CODE: &str = "auto";
/// Display name of the `auto` sentinel
pub const AUTO_DETECT_NAME: &str = "Auto Detect";

/// Returned by [`code_for_name`] when the name is unknown
pub const FALLBACK_CODE: &str = "en";
/// Returned by [`name_for_code`] when the code is unknown
pub const FALLBACK_NAME: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub code: &'static str,
}

const fn entry(name: &'static str, code: &'static str) -> LanguageEntry {
    LanguageEntry { name, code }
}

/// Declaration order matters: [`name_for_code`] returns the first match.
pub static LANGUAGES: &[LanguageEntry] = &[
    entry(AUTO_DETECT_NAME, AUTO_CODE),
    entry("English", "en"),
    entry("Spanish", "es"),
    entry("French", "fr"),
    entry("German", "de"),
    entry("Italian", "it"),
    entry("Portuguese", "pt"),
    entry("Russian", "ru"),
    entry("Chinese (Simplified)", "zh-cn"),
    entry("Chinese (Traditional)", "zh-tw"),
    entry("Japanese", "ja"),
    entry("Korean", "ko"),
    entry("Arabic", "ar"),
    entry("Hindi", "hi"),
    entry("Dutch", "nl"),
    entry("Polish", "pl"),
    entry("Turkish", "tr"),
    entry("Swedish", "sv"),
    entry("Norwegian", "no"),
    entry("Danish", "da"),
    entry("Finnish", "fi"),
    entry("Greek", "el"),
    entry("Hebrew", "he"),
    entry("Thai", "th"),
    entry("Vietnamese", "vi"),
    entry("Indonesian", "id"),
    entry("Malay", "ms"),
    entry("Czech", "cs"),
    entry("Hungarian", "hu"),
    entry("Romanian", "ro"),
    entry("Bulgarian", "bg"),
    entry("Croatian", "hr"),
    entry("Slovak", "sk"),
    entry("Slovenian", "sl"),
    entry("Estonian", "et"),
    entry("Latvian", "lv"),
    entry("Lithuanian", "lt"),
    entry("Ukrainian", "uk"),
    entry("Bengali", "bn"),
    entry("Tamil", "ta"),
    entry("Telugu", "te"),
    entry("Gujarati", "gu"),
    entry("Marathi", "mr"),
    entry("Punjabi", "pa"),
    entry("Urdu", "ur"),
    entry("Persian", "fa"),
    entry("Swahili", "sw"),
    entry("Afrikaans", "af"),
    entry("Albanian", "sq"),
    entry("Armenian", "hy"),
    entry("Azerbaijani", "az"),
    entry("Basque", "eu"),
    entry("Belarusian", "be"),
    entry("Bosnian", "bs"),
    entry("Catalan", "ca"),
    entry("Filipino", "tl"),
    entry("Galician", "gl"),
    entry("Georgian", "ka"),
    entry("Icelandic", "is"),
    entry("Irish", "ga"),
    entry("Kazakh", "kk"),
    entry("Kurdish", "ku"),
    entry("Kyrgyz", "ky"),
    entry("Latin", "la"),
    entry("Luxembourgish", "lb"),
    entry("Macedonian", "mk"),
    entry("Maltese", "mt"),
    entry("Mongolian", "mn"),
    entry("Nepali", "ne"),
    entry("Pashto", "ps"),
    entry("Serbian", "sr"),
    entry("Sinhala", "si"),
    entry("Tajik", "tg"),
    entry("Uzbek", "uz"),
    entry("Welsh", "cy"),
    entry("Yiddish", "yi"),
];

/// Which side of a translation a listing is offered for.
///
/// Targets never include the `auto` sentinel, so a caller building its
/// choices from [`Listing::Target`] cannot ask to translate *into* `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Source,
    Target,
}

static SORTED_NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();

/// All display names in ascending order, `"Auto Detect"` included
pub fn names_sorted() -> &'static [&'static str] {
    SORTED_NAMES.get_or_init(|| {
        let mut names: Vec<&'static str> = LANGUAGES.iter().map(|l| l.name).collect();
        names.sort_unstable();
        names
    })
}

/// Sorted names offered for the given side
pub fn names_for(listing: Listing) -> Vec<&'static str> {
    names_sorted()
        .iter()
        .copied()
        .filter(|name| listing == Listing::Source || *name != AUTO_DETECT_NAME)
        .collect()
}

pub fn source_names() -> Vec<&'static str> {
    names_for(Listing::Source)
}

pub fn target_names() -> Vec<&'static str> {
    names_for(Listing::Target)
}

/// Exact, case-sensitive lookup. Unknown names resolve to [`FALLBACK_CODE`].
pub fn code_for_name(name: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|l| l.name == name)
        .map(|l| l.code)
        .unwrap_or(FALLBACK_CODE)
}

/// First entry (declaration order) with this code, else [`FALLBACK_NAME`].
pub fn name_for_code(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
        .unwrap_or(FALLBACK_NAME)
}

pub fn is_auto(code: &str) -> bool {
    code == AUTO_CODE
}

/// Case-insensitive substring filter over a listing, empty query returns all
pub fn search_names(query: &str, listing: Listing) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    let names = names_for(listing);
    if query.is_empty() {
        return names;
    }

    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .collect()
}

/// Resolve typed input to the canonical name if it matches one exactly,
/// ignoring case
pub fn exact_name(query: &str, listing: Listing) -> Option<&'static str> {
    let query = query.trim().to_lowercase();
    names_for(listing)
        .into_iter()
        .find(|name| name.to_lowercase() == query)
}

/// Resolve user input naming a language, either by display name (any case)
/// or by code. Targets never resolve to the `auto` sentinel.
pub fn resolve(query: &str, listing: Listing) -> Option<LanguageEntry> {
    if let Some(name) = exact_name(query, listing) {
        return LANGUAGES.iter().find(|l| l.name == name).copied();
    }

    let code = query.trim().to_lowercase();
    LANGUAGES
        .iter()
        .filter(|l| listing == Listing::Source || l.code != AUTO_CODE)
        .find(|l| l.code == code)
        .copied()
}
