#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

/// Source language sentinel meaning "detect before translating".
pub const AUTO_LANGUAGE: &str = "auto";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

pub const LANGUAGES: [LanguageOption; 7] = [
    LanguageOption {
        code: AUTO_LANGUAGE,
        name: "Auto",
        native: "Detect",
    },
    LanguageOption {
        code: "en",
        name: "English",
        native: "English",
    },
    LanguageOption {
        code: "fr",
        name: "French",
        native: "Français",
    },
    LanguageOption {
        code: "pt",
        name: "Portuguese",
        native: "Português",
    },
    LanguageOption {
        code: "ru",
        name: "Russian",
        native: "Русский",
    },
    LanguageOption {
        code: "es",
        name: "Spanish",
        native: "Español",
    },
    LanguageOption {
        code: "tr",
        name: "Turkish",
        native: "Türkçe",
    },
];

impl LanguageOption {
    pub fn find(code: &str) -> Option<LanguageOption> {
        return LANGUAGES
            .iter()
            .find(|lang| return lang.code == code)
            .copied();
    }

    pub fn codes() -> Vec<&'static str> {
        return LANGUAGES.iter().map(|lang| return lang.code).collect();
    }

    pub fn label(&self) -> String {
        return format!("{} ({})", self.name, self.native);
    }

    /// Label for any language code, including codes returned by a host
    /// detector that are not part of the fixed list.
    pub fn label_for(code: &str) -> String {
        if let Some(lang) = LanguageOption::find(code) {
            return lang.label();
        }

        return code.to_uppercase();
    }
}

pub fn is_auto(code: &str) -> bool {
    return code == AUTO_LANGUAGE;
}
