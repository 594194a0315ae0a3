//! Greedy word wrapping onto fixed-width display lines.
//!
//! Lines are yielded lazily as byte ranges into the source string, so the
//! wrapper never allocates and never copies text. Widths count `char`s.

/// One display row: a contiguous slice of the wrapped string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line {
    /// Byte offset of the first character in the source string.
    pub offset: usize,
    /// Length in characters.
    pub len: usize,
    end: usize,
}

impl Line {
    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Resolve this line against the string it was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset..self.end]
    }
}

/// Iterator returned by [`wrap`].
#[derive(Clone, Debug)]
pub struct Wrap<'a> {
    text: &'a str,
    pos: usize,
    max_width: usize,
}

/// Split `text` into lines of at most `max_width` characters.
///
/// Breaks fall on the last space inside the window when there is one;
/// otherwise the line is hard-broken at exactly `max_width`. Spaces at a
/// break are dropped. A `max_width` of 0 is treated as 1.
pub fn wrap(text: &str, max_width: usize) -> Wrap<'_> {
    Wrap {
        text,
        pos: 0,
        max_width: max_width.max(1),
    }
}

impl<'a> Iterator for Wrap<'a> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];

        let (take, chars) = match rest.char_indices().nth(self.max_width) {
            // Everything left fits on this line.
            None => (rest.len(), rest.chars().count()),
            Some((window_end, _)) => match rest[..window_end].rfind(' ') {
                Some(space) if space > 0 => (space, rest[..space].chars().count()),
                _ => (window_end, self.max_width),
            },
        };

        let line = Line {
            offset: self.pos,
            len: chars,
            end: self.pos + take,
        };

        self.pos += take;
        let skipped = self.text[self.pos..]
            .bytes()
            .take_while(|&b| b == b' ')
            .count();
        self.pos += skipped;

        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines<'a>(text: &'a str, width: usize) -> Vec<&'a str> {
        wrap(text, width).map(|l| l.text(text)).collect()
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(wrap("", 21).count(), 0);
        assert_eq!(wrap("", 1).count(), 0);
    }

    #[test]
    fn short_text_is_a_single_line() {
        assert_eq!(lines("MENU 1", 21), ["MENU 1"]);
    }

    #[test]
    fn breaks_on_word_boundaries() {
        assert_eq!(
            lines("SINAL ABERTO - ATRAVESSAR COM CUIDADO", 21),
            ["SINAL ABERTO -", "ATRAVESSAR COM", "CUIDADO"]
        );
    }

    #[test]
    fn long_word_is_hard_broken() {
        assert_eq!(
            lines("Supercalifragilisticexpialidocious", 10),
            ["Supercalif", "ragilistic", "expialidoc", "ious"]
        );
    }

    #[test]
    fn word_ending_exactly_at_width_is_kept_whole() {
        assert_eq!(lines("abcde fgh", 5), ["abcde", "fgh"]);
    }

    #[test]
    fn space_runs_at_breaks_are_dropped() {
        assert_eq!(lines("aaa    bbb", 4), ["aaa", "bbb"]);
    }

    #[test]
    fn interior_spaces_inside_a_fitting_line_survive() {
        assert_eq!(lines("ab  cd", 10), ["ab  cd"]);
    }

    #[test]
    fn leading_space_does_not_count_as_a_break_point() {
        assert_eq!(lines(" abcdefgh", 4), [" abc", "defg", "h"]);
    }

    #[test]
    fn zero_width_behaves_like_one() {
        assert_eq!(lines("ab", 0), ["a", "b"]);
    }

    #[test]
    fn multibyte_chars_count_as_one_column() {
        let text = "ação rápida";
        let out = lines(text, 6);
        assert_eq!(out, ["ação", "rápida"]);
        for line in wrap(text, 6) {
            assert_eq!(line.len, line.text(text).chars().count());
        }
    }

    #[test]
    fn offsets_are_contiguous_modulo_dropped_spaces() {
        let text = "the quick brown fox jumps";
        let mut expected_offset = 0;
        for line in wrap(text, 7) {
            assert_eq!(line.offset, expected_offset);
            expected_offset = line.end();
            while text.as_bytes().get(expected_offset) == Some(&b' ') {
                expected_offset += 1;
            }
        }
        assert_eq!(expected_offset, text.len());
    }

    #[test]
    fn no_line_exceeds_width() {
        let samples = [
            "a bb ccc dddd eeeee ffffff",
            "x",
            "   ",
            "one  two   three    four",
            "SINAL ABERTO - ATRAVESSAR COM CUIDADO",
        ];
        for text in samples {
            for width in 1..=12 {
                for line in wrap(text, width) {
                    assert!(line.len <= width, "{text:?} w={width} -> {line:?}");
                }
            }
        }
    }

    #[test]
    fn joining_with_single_spaces_restores_text() {
        let text = "the quick brown fox jumps over the lazy dog";
        // Every word fits from width 5 up, so no break splits a word.
        for width in 5..=20 {
            let joined = lines(text, width).join(" ");
            assert_eq!(joined, text, "width {width}");
        }
    }

    #[test]
    fn hard_broken_words_rejoin_with_a_space() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert_eq!(
            lines(text, 3).join(" "),
            "the qui ck bro wn fox jum ps ove r the laz y dog"
        );
        assert_eq!(lines("abcdefgh", 3).join(" "), "abc def gh");
    }
}
