use crate::value_objects::{CharCount, LineCount};

/// Raw text loaded from a single source, kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    /// Identifier of the source, usually the file name without its directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn char_count(&self) -> CharCount {
        CharCount::new(self.content.chars().count())
    }

    pub fn line_count(&self) -> LineCount {
        LineCount::new(count_lines(&self.content))
    }
}

/// Line terminators recognised when splitting text into lines.
#[inline]
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Count lines the way "split into lines" does: `\r\n` is a single break and a
/// trailing break does not open an empty final line.
pub fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut chars = text.chars().peekable();
    let mut pending = false;

    while let Some(c) = chars.next() {
        if is_line_break(c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines += 1;
            pending = false;
        } else {
            pending = true;
        }
    }

    if pending { lines + 1 } else { lines }
}
