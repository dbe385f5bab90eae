use serde::Serialize;
use std::fmt;

/// A non-empty word to count, held as characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Pattern(Vec<char>);

impl Pattern {
    pub fn new(word: &str) -> Option<Self> {
        let chars: Vec<char> = word.chars().collect();
        (!chars.is_empty()).then_some(Self(chars))
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            pattern: &self.0,
            cursor: 0,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}

/// Streaming, order-sensitive word matcher.
///
/// A character equal to `pattern[cursor]` advances the cursor, or completes a
/// match when the cursor is already on the last character. Any other
/// character sends the cursor back to 0 without re-testing it against the
/// first character. The cursor stays on the last character after a match, so
/// a repeated final character counts again ("abb" holds two "ab" matches),
/// and overlapping prefixes are missed ("aab" holds none).
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    pattern: &'a [char],
    cursor: usize,
}

impl Matcher<'_> {
    /// Feed one character; returns true when it completes a match.
    pub fn feed(&mut self, c: char) -> bool {
        if c != self.pattern[self.cursor] {
            self.cursor = 0;
            return false;
        }

        if self.cursor < self.pattern.len() - 1 {
            self.cursor += 1;
            false
        } else {
            true
        }
    }

    pub fn count(&mut self, text: &str) -> u64 {
        text.chars().filter(|c| self.feed(*c)).count() as u64
    }
}
