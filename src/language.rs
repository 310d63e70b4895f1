use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Letters present in Kazakh Cyrillic but absent from Russian.
const KAZAKH_LETTERS: [char; 8] = ['қ', 'ә', 'ө', 'ұ', 'ү', 'і', 'ң', 'ғ'];

/// Serialized as the lowercase code; parsed with [`FromStr`] rules, so
/// config files accept the same spellings as the code does.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Ru,
    Kk,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kk => "kk",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "kk" => Ok(Language::Kk),
            other => anyhow::bail!("Unsupported language code: '{}'", other),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Guess the language of a message.
///
/// Any Kazakh-specific letter makes the text Kazakh; everything else is
/// treated as Russian. Kazakh text written without those letters is
/// misclassified, which is accepted.
pub fn detect(text: &str) -> Language {
    if text.to_lowercase().chars().any(|c| KAZAKH_LETTERS.contains(&c)) {
        Language::Kk
    } else {
        Language::Ru
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kazakh_letter_detects_kk() {
        for letter in KAZAKH_LETTERS {
            let text = format!("сал{}ем", letter);
            assert_eq!(detect(&text), Language::Kk, "letter {}", letter);
        }
    }

    #[test]
    fn test_uppercase_kazakh_letter_detects_kk() {
        assert_eq!(detect("ҚАЙДА"), Language::Kk);
        assert_eq!(detect("Іздеу"), Language::Kk);
    }

    #[test]
    fn test_russian_and_other_text_defaults_to_ru() {
        assert_eq!(detect("Когда экзамен?"), Language::Ru);
        assert_eq!(detect("hello"), Language::Ru);
        assert_eq!(detect(""), Language::Ru);
        // Kazakh without any distinguishing letter falls back to ru
        assert_eq!(detect("стипендия"), Language::Ru);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
        assert_eq!(" KK ".parse::<Language>().unwrap(), Language::Kk);
        assert!("en".parse::<Language>().is_err());
        assert_eq!(Language::Kk.to_string(), "kk");
    }

    #[test]
    fn test_deserialize_follows_from_str() {
        #[derive(Deserialize)]
        struct Entry {
            language: Language,
        }

        let entry: Entry = toml::from_str("language = \" KK \"").unwrap();
        assert_eq!(entry.language, Language::Kk);
        assert!(toml::from_str::<Entry>("language = \"en\"").is_err());
        assert_eq!(serde_json::to_string(&Language::Kk).unwrap(), "\"kk\"");
    }
}
