use std::sync::OnceLock;

use regex::Regex;

macro_rules! languages {
    ($($code:literal => $($name:literal)|+),+ $(,)?) => {
        /// ISO 639-1 codes with their English names and common aliases.
        pub const LANGUAGES: Languages = Languages(&[
            $( Language { code: $code, names: &[$($name),+] } ),+
        ]);
    };
}

languages! {
    "aa" => "Afar",
    "ab" => "Abkhaz" | "Abkhazian",
    "ae" => "Avestan",
    "af" => "Afrikaans",
    "ak" => "Akan",
    "am" => "Amharic",
    "an" => "Aragonese",
    "ar" => "Arabic",
    "as" => "Assamese",
    "av" => "Avaric",
    "ay" => "Aymara",
    "az" => "Azerbaijani",
    "ba" => "Bashkir",
    "be" => "Belarusian",
    "bg" => "Bulgarian",
    "bi" => "Bislama",
    "bm" => "Bambara",
    "bn" => "Bengali" | "Bangla",
    "bo" => "Tibetan",
    "br" => "Breton",
    "bs" => "Bosnian",
    "ca" => "Catalan",
    "ce" => "Chechen",
    "ch" => "Chamorro",
    "co" => "Corsican",
    "cr" => "Cree",
    "cs" => "Czech",
    "cu" => "Old Church Slavonic",
    "cv" => "Chuvash",
    "cy" => "Welsh",
    "da" => "Danish",
    "de" => "German",
    "dv" => "Divehi" | "Dhivehi",
    "dz" => "Dzongkha",
    "ee" => "Ewe",
    "el" => "Greek",
    "en" => "English",
    "eo" => "Esperanto",
    "es" => "Spanish" | "Castilian",
    "et" => "Estonian",
    "eu" => "Basque",
    "fa" => "Persian" | "Farsi",
    "ff" => "Fula" | "Fulah",
    "fi" => "Finnish",
    "fj" => "Fijian",
    "fo" => "Faroese",
    "fr" => "French",
    "fy" => "Western Frisian" | "Frisian",
    "ga" => "Irish",
    "gd" => "Scottish Gaelic" | "Gaelic",
    "gl" => "Galician",
    "gn" => "Guaraní" | "Guarani",
    "gu" => "Gujarati",
    "gv" => "Manx",
    "ha" => "Hausa",
    "he" => "Hebrew",
    "hi" => "Hindi",
    "ho" => "Hiri Motu",
    "hr" => "Croatian",
    "ht" => "Haitian" | "Haitian Creole",
    "hu" => "Hungarian",
    "hy" => "Armenian",
    "hz" => "Herero",
    "ia" => "Interlingua",
    "id" => "Indonesian",
    "ie" => "Interlingue",
    "ig" => "Igbo",
    "ii" => "Nuosu",
    "ik" => "Inupiaq",
    "io" => "Ido",
    "is" => "Icelandic",
    "it" => "Italian",
    "iu" => "Inuktitut",
    "ja" => "Japanese",
    "jv" => "Javanese",
    "ka" => "Georgian",
    "kg" => "Kongo",
    "ki" => "Kikuyu",
    "kj" => "Kwanyama",
    "kk" => "Kazakh",
    "kl" => "Kalaallisut" | "Greenlandic",
    "km" => "Khmer",
    "kn" => "Kannada",
    "ko" => "Korean",
    "kr" => "Kanuri",
    "ks" => "Kashmiri",
    "ku" => "Kurdish",
    "kv" => "Komi",
    "kw" => "Cornish",
    "ky" => "Kyrgyz" | "Kirghiz",
    "la" => "Latin",
    "lb" => "Luxembourgish",
    "lg" => "Ganda",
    "li" => "Limburgish",
    "ln" => "Lingala",
    "lo" => "Lao",
    "lt" => "Lithuanian",
    "lu" => "Luba-Katanga",
    "lv" => "Latvian",
    "mg" => "Malagasy",
    "mh" => "Marshallese",
    "mi" => "Māori" | "Maori",
    "mk" => "Macedonian",
    "ml" => "Malayalam",
    "mn" => "Mongolian",
    "mr" => "Marathi",
    "ms" => "Malay",
    "mt" => "Maltese",
    "my" => "Burmese",
    "na" => "Nauru",
    "nb" => "Norwegian Bokmål" | "Bokmal",
    "nd" => "Northern Ndebele",
    "ne" => "Nepali",
    "ng" => "Ndonga",
    "nl" => "Dutch",
    "nn" => "Norwegian Nynorsk" | "Nynorsk",
    "no" => "Norwegian",
    "nr" => "Southern Ndebele",
    "nv" => "Navajo",
    "ny" => "Chichewa" | "Chewa",
    "oc" => "Occitan",
    "oj" => "Ojibwe",
    "om" => "Oromo",
    "or" => "Oriya" | "Odia",
    "os" => "Ossetian",
    "pa" => "Panjabi" | "Punjabi",
    "pi" => "Pāli" | "Pali",
    "pl" => "Polish",
    "ps" => "Pashto",
    "pt" => "Portuguese",
    "qu" => "Quechua",
    "rm" => "Romansh",
    "rn" => "Kirundi",
    "ro" => "Romanian",
    "ru" => "Russian",
    "rw" => "Kinyarwanda",
    "sa" => "Sanskrit",
    "sc" => "Sardinian",
    "sd" => "Sindhi",
    "se" => "Northern Sami",
    "sg" => "Sango",
    "si" => "Sinhala",
    "sk" => "Slovak",
    "sl" => "Slovenian" | "Slovene",
    "sm" => "Samoan",
    "sn" => "Shona",
    "so" => "Somali",
    "sq" => "Albanian",
    "sr" => "Serbian",
    "ss" => "Swati",
    "st" => "Southern Sotho" | "Sesotho",
    "su" => "Sundanese",
    "sv" => "Swedish",
    "sw" => "Swahili",
    "ta" => "Tamil",
    "te" => "Telugu",
    "tg" => "Tajik",
    "th" => "Thai",
    "ti" => "Tigrinya",
    "tk" => "Turkmen",
    "tl" => "Tagalog" | "Filipino",
    "tn" => "Tswana",
    "to" => "Tonga",
    "tr" => "Turkish",
    "ts" => "Tsonga",
    "tt" => "Tatar",
    "tw" => "Twi",
    "ty" => "Tahitian",
    "ug" => "Uyghur" | "Uighur",
    "uk" => "Ukrainian",
    "ur" => "Urdu",
    "uz" => "Uzbek",
    "ve" => "Venda",
    "vi" => "Vietnamese",
    "vo" => "Volapük" | "Volapuk",
    "wa" => "Walloon",
    "wo" => "Wolof",
    "xh" => "Xhosa",
    "yi" => "Yiddish",
    "yo" => "Yoruba",
    "za" => "Zhuang",
    "zh" => "Chinese" | "Mandarin",
    "zu" => "Zulu",
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Language {
    code: &'static str,
    names: &'static [&'static str],
}

impl Language {
    pub fn code(&self) -> &'static str {
        self.code
    }

    fn is_named(&self, name: &str) -> bool {
        self.names
            .iter()
            .any(|known| known.to_lowercase() == name.to_lowercase())
    }
}

pub struct Languages(&'static [Language]);

impl Languages {
    pub fn by_name(&self, name: &str) -> Option<Language> {
        let name = name.trim();
        self.0
            .iter()
            .find(|language| language.is_named(name))
            .copied()
    }
}

#[allow(clippy::unwrap_used)]
fn regional_code() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();

    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}-[A-Za-z]{2,4}$").unwrap())
}

/// Turns user input into a target language code for the translator.
///
/// Two-letter input passes through as a code, as do regional tags like `zh-TW`;
/// anything else has to be the English name of an ISO 639-1 language.
pub fn resolve(input: &str) -> Option<String> {
    let input = input.trim();

    if input.chars().count() == 2 {
        return input
            .chars()
            .all(|c| c.is_ascii_alphabetic())
            .then(|| input.to_ascii_lowercase());
    }

    if regional_code().is_match(input) {
        return Some(input.to_owned());
    }

    LANGUAGES.by_name(input).map(|language| language.code().to_owned())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::{resolve, LANGUAGES};

    #[test]
    fn every_code_is_listed_once() {
        let codes: HashSet<_> = LANGUAGES.0.iter().map(|language| language.code()).collect();

        assert_eq!(codes.len(), LANGUAGES.0.len());
        assert_eq!(LANGUAGES.0.len(), 183);
        assert!(codes.iter().all(|code| code.len() == 2));
    }

    #[test]
    fn lookup() {
        let spanish = LANGUAGES.by_name("Spanish").expect("spanish should be listed");
        assert_eq!(spanish.code(), "es");

        assert_eq!(LANGUAGES.by_name("castilian"), Some(spanish));
        assert_eq!(LANGUAGES.by_name("Klingon"), None);
    }

    macro_rules! test_resolve {
        ($($name:ident: $input:expr => $resolved:expr),+ $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(resolve($input).as_deref(), $resolved);
                }
            )+
        };
    }

    test_resolve! {
        code: "fr" => Some("fr"),
        uppercase_code: "DE" => Some("de"),
        unlisted_code_passes_through: "iw" => Some("iw"),
        regional: "zh-TW" => Some("zh-TW"),
        name: "Spanish" => Some("es"),
        lowercase_name: "chinese" => Some("zh"),
        padded_name: "  Japanese " => Some("ja"),
        alias: "Farsi" => Some("fa"),
        accented: "MĀORI" => Some("mi"),
        unknown: "Klingon" => None,
        digits: "42" => None,
        empty: "" => None,
    }
}
