//! Derived input views for the live preview regions: character count,
//! per-character codes, and binary renderings, recomputed on every edit.

use crate::format::{binary_octets, code_points};

/// Shortest visible height of an auto-sized input control.
pub const MIN_INPUT_HEIGHT: f32 = 120.0;

/// Tallest visible height of an auto-sized input control.
pub const MAX_INPUT_HEIGHT: f32 = 400.0;

/// Shown in place of an empty preview so the region never goes blank.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Snapshot of the preview values for the current input text.
///
/// Always rebuilt from the text, never cached across edits; `ascii_codes`
/// and `binary_digits` have exactly `char_count` entries each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView {
    pub char_count: usize,
    pub ascii_codes: Vec<u32>,
    pub binary_digits: Vec<String>,
}

impl DerivedView {
    pub fn of(text: &str) -> Self {
        let ascii_codes = code_points(text);
        let binary_digits = binary_octets(&ascii_codes);
        Self {
            char_count: ascii_codes.len(),
            ascii_codes,
            binary_digits,
        }
    }

    pub fn ascii_preview(&self) -> String {
        if self.ascii_codes.is_empty() {
            return EMPTY_PLACEHOLDER.to_string();
        }
        self.ascii_codes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn binary_preview(&self) -> String {
        if self.binary_digits.is_empty() {
            return EMPTY_PLACEHOLDER.to_string();
        }
        self.binary_digits.join(" ")
    }

    pub fn char_count_label(&self) -> String {
        char_count_label(self.char_count)
    }
}

pub fn char_count_label(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{count} characters")
    }
}

/// Visible height for an input control whose content wants
/// `content_height`: the natural extent clamped into the fixed band.
pub fn input_height(content_height: f32) -> f32 {
    content_height.clamp(MIN_INPUT_HEIGHT, MAX_INPUT_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_view_lengths_match_char_count() {
        for text in ["", "H", "Hi", "héllo wörld", "日本語テキスト"] {
            let view = DerivedView::of(text);
            assert_eq!(view.char_count, text.chars().count());
            assert_eq!(view.ascii_codes.len(), view.char_count);
            assert_eq!(view.binary_digits.len(), view.char_count);
        }
    }

    #[test]
    fn empty_input_previews_show_placeholder() {
        let view = DerivedView::of("");
        assert_eq!(view.ascii_preview(), EMPTY_PLACEHOLDER);
        assert_eq!(view.binary_preview(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn previews_join_per_character_values() {
        let view = DerivedView::of("Hi");
        assert_eq!(view.ascii_preview(), "72 105");
        assert_eq!(view.binary_preview(), "01001000 01101001");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(char_count_label(0), "0 characters");
        assert_eq!(char_count_label(1), "1 character");
        assert_eq!(char_count_label(2), "2 characters");
    }

    #[test]
    fn input_height_clamps_to_band() {
        assert_eq!(input_height(10.0), MIN_INPUT_HEIGHT);
        assert_eq!(input_height(240.0), 240.0);
        assert_eq!(input_height(2_000.0), MAX_INPUT_HEIGHT);
    }
}
