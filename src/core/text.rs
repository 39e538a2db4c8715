use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Width and height of a measured text block in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Word-wrapped text block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrappedText {
    pub lines: SmallVec<[String; 2]>,
    pub width: f64,
    pub height: f64,
    pub line_height: f64,
}

impl WrappedText {
    #[must_use]
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics {
            width: self.width,
            height: self.height,
        }
    }
}

/// Text measurement collaborator.
///
/// Layout code treats the result as an opaque rectangle; hosts with access to
/// real font metrics plug their own implementation in.
pub trait TextMeasurer {
    /// Wraps `text` at `font_size_px` so no line exceeds `max_width` when a
    /// word boundary allows it. `None` disables wrapping.
    fn wrap(&self, text: &str, font_size_px: f64, max_width: Option<f64>) -> WrappedText;

    fn measure(&self, text: &str, font_size_px: f64, max_width: Option<f64>) -> TextMetrics {
        self.wrap(text, font_size_px, max_width).metrics()
    }
}

/// Deterministic measurer that assumes a fixed advance per character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicTextMeasurer {
    /// Advance of one character, relative to the font size.
    pub char_width_em: f64,
    /// Line height, relative to the font size.
    pub line_height_em: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_em: 0.55,
            line_height_em: 1.2,
        }
    }
}

impl HeuristicTextMeasurer {
    #[must_use]
    pub fn line_width(&self, line: &str, font_size_px: f64) -> f64 {
        line.chars().count() as f64 * self.char_width_em * font_size_px
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn wrap(&self, text: &str, font_size_px: f64, max_width: Option<f64>) -> WrappedText {
        let line_height = self.line_height_em * font_size_px;
        let mut lines: SmallVec<[String; 2]> = SmallVec::new();

        match max_width.filter(|width| width.is_finite()) {
            None => {
                if !text.is_empty() {
                    lines.push(text.to_owned());
                }
            }
            Some(max_width) => {
                let mut current = String::new();
                for word in text.split_whitespace() {
                    if current.is_empty() {
                        current.push_str(word);
                        continue;
                    }
                    let candidate_chars = current.chars().count() + 1 + word.chars().count();
                    let candidate_width =
                        candidate_chars as f64 * self.char_width_em * font_size_px;
                    if candidate_width <= max_width {
                        current.push(' ');
                        current.push_str(word);
                    } else {
                        lines.push(std::mem::take(&mut current));
                        current.push_str(word);
                    }
                }
                if !current.is_empty() {
                    lines.push(current);
                }
            }
        }

        let width = lines
            .iter()
            .map(|line| self.line_width(line, font_size_px))
            .fold(0.0, f64::max);
        let height = lines.len() as f64 * line_height;
        WrappedText {
            lines,
            width,
            height,
            line_height,
        }
    }
}
