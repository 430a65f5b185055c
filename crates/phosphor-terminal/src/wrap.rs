//! Greedy word wrapping for response text.

/// Measures rendered text width in pixels.
///
/// The renderer supplies a glyph-accurate measure; tests and headless
/// callers use [`MonospaceMeasure`].
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;
}

/// Fixed advance per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl MonospaceMeasure {
    /// Approximate advance for a monospace face at `font_size`.
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            advance: font_size * 0.6,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Words accumulate onto a line while the measured width fits; the word
/// that overflows starts the next line. Runs of whitespace collapse to a
/// single space. A word wider than `max_width` gets a line of its own and
/// is not split. Explicit newlines start a new paragraph.
pub fn wrap_text<M: TextMeasure + ?Sized>(text: &str, max_width: f32, measure: &M) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure.measure(&candidate) > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
