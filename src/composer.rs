//! Draft-text composition.

/// Diacritic characters the language needs that common keyboard layouts lack.
pub const SPECIAL_CHARACTERS: [char; 6] = ['ā', 'ē', 'ī', 'ō', 'ū', 'ꞌ'];

/// Greeting a fresh session starts with.
pub const DEFAULT_DRAFT_TEXT: &str = "Kia orana kōtou kātoatoa";

/// Single source of truth for the text pending synthesis.
///
/// The presentation layer renders from [`text`](TextComposer::text) on every
/// pass instead of caching its own copy, so programmatic insertion and direct
/// edits cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextComposer {
    text: String,
}

impl TextComposer {
    pub fn new() -> Self {
        Self {
            text: DEFAULT_DRAFT_TEXT.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append one character to the draft. Always succeeds.
    pub fn append(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Overwrite the draft verbatim. Empty input is permitted.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Default for TextComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_default_greeting() {
        assert_eq!(TextComposer::new().text(), "Kia orana kōtou kātoatoa");
    }

    #[test]
    fn appends_preserve_order() {
        let mut composer = TextComposer::new();
        composer.replace("ka");
        for ch in ['k', 'i', 't', 'e'] {
            composer.append(ch);
        }
        assert_eq!(composer.text(), "kakite");
    }

    #[test]
    fn appending_a_macron_vowel_twice_extends_the_default() {
        let mut composer = TextComposer::new();
        composer.append('ā');
        composer.append('ā');
        assert_eq!(
            composer.text(),
            format!("{}āā", DEFAULT_DRAFT_TEXT)
        );
    }

    #[test]
    fn replace_is_verbatim() {
        let mut composer = TextComposer::new();
        composer.replace("Kia orana");
        assert_eq!(composer.text(), "Kia orana");

        composer.append('ē');
        composer.replace("");
        assert_eq!(composer.text(), "");
    }

    #[test]
    fn every_special_character_is_appendable() {
        let mut composer = TextComposer::new();
        composer.replace("");
        for ch in SPECIAL_CHARACTERS {
            composer.append(ch);
        }
        assert_eq!(composer.text(), "āēīōūꞌ");
    }
}
