//! ISO 639-2 bibliographic language codes.
//!
//! MARC records and catalog metadata carry languages as three-letter
//! ISO 639-2/B codes (`eng`, `chi`, `ger`). [`language_name`] resolves the
//! common ones to their English names. The table covers the languages that
//! show up in general and research library catalogs, not the full registry.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref LANGUAGES: HashMap<&'static str, &'static str> = [
        ("afr", "Afrikaans"),
        ("akk", "Akkadian"),
        ("alb", "Albanian"),
        ("amh", "Amharic"),
        ("ang", "English, Old (ca. 450-1100)"),
        ("ara", "Arabic"),
        ("arc", "Official Aramaic (700-300 BCE)"),
        ("arm", "Armenian"),
        ("aze", "Azerbaijani"),
        ("baq", "Basque"),
        ("bel", "Belarusian"),
        ("ben", "Bengali"),
        ("bos", "Bosnian"),
        ("bre", "Breton"),
        ("bul", "Bulgarian"),
        ("bur", "Burmese"),
        ("cat", "Catalan"),
        ("chi", "Chinese"),
        ("cop", "Coptic"),
        ("cze", "Czech"),
        ("dan", "Danish"),
        ("dut", "Dutch"),
        ("egy", "Egyptian (Ancient)"),
        ("eng", "English"),
        ("enm", "English, Middle (1100-1500)"),
        ("epo", "Esperanto"),
        ("est", "Estonian"),
        ("fin", "Finnish"),
        ("fre", "French"),
        ("frm", "French, Middle (ca. 1400-1600)"),
        ("fro", "French, Old (842-ca. 1400)"),
        ("geo", "Georgian"),
        ("ger", "German"),
        ("gla", "Gaelic"),
        ("gle", "Irish"),
        ("glg", "Galician"),
        ("gmh", "German, Middle High (ca. 1050-1500)"),
        ("goh", "German, Old High (ca. 750-1050)"),
        ("got", "Gothic"),
        ("grc", "Greek, Ancient (to 1453)"),
        ("gre", "Greek, Modern (1453-)"),
        ("guj", "Gujarati"),
        ("hat", "Haitian"),
        ("hau", "Hausa"),
        ("heb", "Hebrew"),
        ("hin", "Hindi"),
        ("hrv", "Croatian"),
        ("hun", "Hungarian"),
        ("ice", "Icelandic"),
        ("ind", "Indonesian"),
        ("ita", "Italian"),
        ("jav", "Javanese"),
        ("jpn", "Japanese"),
        ("kan", "Kannada"),
        ("kaz", "Kazakh"),
        ("khm", "Central Khmer"),
        ("kor", "Korean"),
        ("kur", "Kurdish"),
        ("lao", "Lao"),
        ("lat", "Latin"),
        ("lav", "Latvian"),
        ("lit", "Lithuanian"),
        ("mac", "Macedonian"),
        ("mal", "Malayalam"),
        ("mao", "Maori"),
        ("mar", "Marathi"),
        ("may", "Malay"),
        ("mon", "Mongolian"),
        ("mul", "Multiple languages"),
        ("nep", "Nepali"),
        ("nor", "Norwegian"),
        ("ota", "Turkish, Ottoman (1500-1928)"),
        ("pan", "Panjabi"),
        ("per", "Persian"),
        ("pli", "Pali"),
        ("pol", "Polish"),
        ("por", "Portuguese"),
        ("pus", "Pushto"),
        ("rum", "Romanian"),
        ("rus", "Russian"),
        ("san", "Sanskrit"),
        ("slo", "Slovak"),
        ("slv", "Slovenian"),
        ("som", "Somali"),
        ("spa", "Spanish"),
        ("srp", "Serbian"),
        ("swa", "Swahili"),
        ("swe", "Swedish"),
        ("syr", "Syriac"),
        ("tam", "Tamil"),
        ("tel", "Telugu"),
        ("tgl", "Tagalog"),
        ("tha", "Thai"),
        ("tib", "Tibetan"),
        ("tur", "Turkish"),
        ("ukr", "Ukrainian"),
        ("und", "Undetermined"),
        ("urd", "Urdu"),
        ("uzb", "Uzbek"),
        ("vie", "Vietnamese"),
        ("wel", "Welsh"),
        ("yid", "Yiddish"),
        ("yor", "Yoruba"),
        ("zul", "Zulu"),
        ("zxx", "No linguistic content"),
    ]
    .into_iter()
    .collect();
}

/// English name of an ISO 639-2/B language code, if the table knows it.
///
/// Codes are matched case-insensitively after trimming.
///
/// ```
/// use bibrec::language::language_name;
///
/// assert_eq!(language_name("jpn"), Some("Japanese"));
/// assert_eq!(language_name("ENG"), Some("English"));
/// assert_eq!(language_name("xx"), None);
/// ```
#[must_use]
pub fn language_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    if code.len() != 3 {
        return None;
    }
    LANGUAGES.get(code.to_ascii_lowercase().as_str()).copied()
}
