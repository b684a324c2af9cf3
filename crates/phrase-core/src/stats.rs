use std::fmt;

/// Input lengths above this are flagged as approaching the limit
pub const CAUTION_CHARS: usize = 4000;
/// Input lengths above this are flagged as nearly at the limit
pub const WARNING_CHARS: usize = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthLevel {
    Empty,
    Normal,
    Caution,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
}

impl TextStats {
    /// Counts over the trimmed text, chars as Unicode scalar values
    pub fn of(text: &str) -> Self {
        let text = text.trim();
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }

    pub fn level(&self) -> LengthLevel {
        match self.chars {
            0 => LengthLevel::Empty,
            n if n > WARNING_CHARS => LengthLevel::Warning,
            n if n > CAUTION_CHARS => LengthLevel::Caution,
            _ => LengthLevel::Normal,
        }
    }

    /// Counter line shown next to the input, e.g. `12/5000 characters • 3 words`
    pub fn counter(&self, max_chars: usize) -> String {
        format!(
            "{}/{} characters • {} words",
            self.chars, max_chars, self.words
        )
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words • {} characters", self.words, self.chars)
    }
}
