//! Word wrapping measured in terminal cells.
//!
//! Widths come from `unicode-width`, so Hangul and other wide glyphs count
//! as two cells. Text breaks at whitespace; a word wider than a whole row is
//! split between characters.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` into rows no wider than `max_width` cells.
///
/// The first row starts with `prefix`; continuation rows are indented by
/// the prefix's width so wrapped text lines up under the first word. Runs
/// of whitespace collapse to one space. When the prefix leaves no room the
/// text is returned on a single row.
#[must_use]
pub fn wrap_with_prefix(prefix: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_width = prefix.width();
    let available = max_width.saturating_sub(indent_width);
    if available == 0 {
        return vec![format!("{prefix}{text}")];
    }

    let mut rows = RowBuilder::new(prefix, indent_width, available);
    for word in text.split_whitespace() {
        rows.push_word(word);
    }
    rows.finish()
}

/// Accumulates wrapped rows.
struct RowBuilder {
    rows: Vec<String>,
    current: String,
    content_width: usize,
    indent: String,
    available: usize,
}

impl RowBuilder {
    fn new(prefix: &str, indent_width: usize, available: usize) -> Self {
        Self {
            rows: Vec::new(),
            current: prefix.to_owned(),
            content_width: 0,
            indent: " ".repeat(indent_width),
            available,
        }
    }

    fn start_row(&mut self) {
        let finished = std::mem::replace(&mut self.current, self.indent.clone());
        self.rows.push(finished);
        self.content_width = 0;
    }

    fn push_word(&mut self, word: &str) {
        let word_width = word.width();
        if self.content_width > 0 {
            if self.content_width + 1 + word_width > self.available {
                self.start_row();
            } else {
                self.current.push(' ');
                self.content_width += 1;
            }
        }

        if word_width <= self.available {
            self.current.push_str(word);
            self.content_width += word_width;
            return;
        }

        for character in word.chars() {
            let char_width = character.width().unwrap_or(0);
            if self.content_width > 0 && self.content_width + char_width > self.available {
                self.start_row();
            }
            self.current.push(character);
            self.content_width += char_width;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.rows.push(self.current);
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::wrap_with_prefix;

    #[test]
    fn short_text_stays_on_one_row() {
        assert_eq!(wrap_with_prefix("! ", "bad credentials", 40), vec!["! bad credentials"]);
    }

    #[test]
    fn long_text_breaks_between_words_and_keeps_every_word() {
        let text = "POST /api/auth/login failed: 401 Unauthorized bad credentials";

        let rows = wrap_with_prefix("! ", text, 40);

        assert_eq!(
            rows,
            vec![
                "! POST /api/auth/login failed: 401",
                "  Unauthorized bad credentials",
            ]
        );
    }

    #[rstest]
    #[case::ascii("x".repeat(90))]
    #[case::hangul("가".repeat(30))]
    fn oversized_words_are_split_within_the_width(#[case] word: String) {
        let rows = wrap_with_prefix("  ", &word, 20);

        assert!(rows.len() > 1, "word should span several rows: {rows:?}");
        assert!(
            rows.iter().all(|row| row.width() <= 20),
            "row exceeds width: {rows:?}"
        );
        let rejoined: String = rows.iter().map(|row| row.trim_start()).collect();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn wide_glyphs_count_as_two_cells() {
        let rows = wrap_with_prefix("", "아이디는 2~32자여야 합니다.", 12);

        assert!(rows.iter().all(|row| row.width() <= 12), "{rows:?}");
        assert_eq!(rows.join(" "), "아이디는 2~32자여야 합니다.");
    }

    #[test]
    fn prefix_wider_than_the_row_returns_text_unwrapped() {
        assert_eq!(wrap_with_prefix("!!!!", "abc", 3), vec!["!!!!abc"]);
    }
}
