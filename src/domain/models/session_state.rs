#[cfg(test)]
#[path = "session_state_test.rs"]
mod tests;

use super::is_auto;
use super::AUTO_LANGUAGE;

/// Selected languages and both text areas. Every change produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub source_lang: String,
    pub target_lang: String,
    pub input_text: String,
    pub output_text: String,
}

impl Default for SessionState {
    fn default() -> SessionState {
        return SessionState::new(AUTO_LANGUAGE, "en");
    }
}

impl SessionState {
    pub fn new(source_lang: &str, target_lang: &str) -> SessionState {
        return SessionState {
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            input_text: "".to_string(),
            output_text: "".to_string(),
        };
    }

    pub fn with_input(&self, text: &str) -> SessionState {
        return SessionState {
            input_text: text.to_string(),
            ..self.clone()
        };
    }

    pub fn with_output(&self, text: &str) -> SessionState {
        return SessionState {
            output_text: text.to_string(),
            ..self.clone()
        };
    }

    pub fn with_source(&self, code: &str) -> SessionState {
        return SessionState {
            source_lang: code.to_string(),
            ..self.clone()
        };
    }

    pub fn with_target(&self, code: &str) -> SessionState {
        return SessionState {
            target_lang: code.to_string(),
            ..self.clone()
        };
    }

    /// Replaces the `auto` source with a detected code. A source the user
    /// picked explicitly is left alone.
    pub fn resolve_source(&self, code: &str) -> SessionState {
        if !self.needs_detection() {
            return self.clone();
        }

        return self.with_source(code);
    }

    pub fn needs_detection(&self) -> bool {
        return is_auto(&self.source_lang);
    }

    /// Exchanges languages and text areas in a single transition.
    pub fn swapped(&self) -> SessionState {
        return SessionState {
            source_lang: self.target_lang.to_string(),
            target_lang: self.source_lang.to_string(),
            input_text: self.output_text.to_string(),
            output_text: self.input_text.to_string(),
        };
    }
}
